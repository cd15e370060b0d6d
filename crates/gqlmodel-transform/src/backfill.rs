use crate::input::{input_field_type, queue_missing_types};
use crate::{Error, Result};
use gqlmodel_core::context::ModelContext;
use gqlmodel_core::names::input_type_name;
use gqlmodel_core::schema::{InputValue, TypeDef, TypeGraph};

/// Drains the model's missing type queue, adding an `<Object>Input` mirror
/// for every queued object type that does not have one yet.
///
/// A mirror carries every argument-free field of its object, mapped the same
/// way model inputs are. Object types discovered while mirroring are queued
/// and mirrored in the same call. Once the queue is drained, calling this
/// again adds nothing.
///
/// Returns the number of types added.
pub fn backfill(graph: &mut TypeGraph, cx: &mut ModelContext) -> Result<usize> {
    let mut added = 0;

    while let Some(name) = cx.next_missing() {
        let def = graph.get(&name).ok_or_else(|| {
            Error::type_resolution(format!("missing type `{name}` is not defined"))
        })?;

        let Some(object) = def.as_object() else {
            return Err(Error::type_resolution(format!(
                "expected `{name}` to be an object type, found {}",
                def.kind_name()
            )));
        };

        let mut fields = vec![];
        for field in &object.fields {
            if let Some(ty) = input_field_type(graph, field) {
                queue_missing_types(graph, field, cx);
                fields.push(InputValue::new(&field.name, ty));
            }
        }

        let input = input_type_name(&name);
        if graph.insert(TypeDef::input_object(&input, fields)) {
            tracing::trace!(object = %name, %input, "backfilled input type");
            added += 1;
        }
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlmodel_core::context::{ModelDirectiveArgs, ModelRecord};

    #[test]
    fn mirrors_queued_objects() {
        let mut graph = crate::sdl::parse(
            "
            type Blog { id: ID!, name: String!, owner: Author }
            type Author { id: ID!, blogs(limit: Int): [Blog] }
            ",
        )
        .unwrap();

        let mut record = ModelRecord::new("Post", ModelDirectiveArgs::default());
        record.context.queue_missing("Blog");

        assert_eq!(backfill(&mut graph, &mut record.context).unwrap(), 2);
        assert!(record.context.is_drained());

        let blog = graph.get("BlogInput").unwrap().as_input_object().unwrap();
        let fields: Vec<_> = blog.fields.iter().map(ToString::to_string).collect();
        assert_eq!(fields, ["id: ID!", "name: String!", "owner: AuthorInput"]);

        let author = graph.get("AuthorInput").unwrap().as_input_object().unwrap();
        assert_eq!(author.fields.len(), 1);

        assert_eq!(backfill(&mut graph, &mut record.context).unwrap(), 0);
        assert!(graph.verify().is_ok());
    }

    #[test]
    fn rejects_non_object() {
        let mut graph = crate::sdl::parse("enum Color { RED }").unwrap();
        let mut record = ModelRecord::new("Post", ModelDirectiveArgs::default());
        record.context.queue_missing("Color");

        let err = backfill(&mut graph, &mut record.context).unwrap_err();
        assert!(err.is_type_resolution());
    }
}
