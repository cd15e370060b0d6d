//! Mapping of output field types onto input positions.

use gqlmodel_core::context::ModelContext;
use gqlmodel_core::names::input_type_name;
use gqlmodel_core::schema::{scalar, FieldDef, TypeGraph, TypeKind, TypeRef};

/// Maps the type of `field` onto the type its input counterpart takes.
///
/// Scalars and enums are used as is. Objects become `<Object>Input`. List
/// and non-null wrappers are kept around the mapped type. Fields taking
/// arguments, and fields returning interfaces or unions, have no input
/// counterpart.
pub(crate) fn input_field_type(graph: &TypeGraph, field: &FieldDef) -> Option<TypeRef> {
    if field.has_arguments() {
        return None;
    }

    input_type(graph, &field.ty)
}

fn input_type(graph: &TypeGraph, ty: &TypeRef) -> Option<TypeRef> {
    match ty {
        TypeRef::NonNull(inner) => input_type(graph, inner).map(TypeRef::non_null),
        TypeRef::List(inner) => input_type(graph, inner).map(TypeRef::list),
        TypeRef::Named(name) if scalar::is_builtin(name) => Some(ty.clone()),
        TypeRef::Named(name) => match graph.get(name)?.kind {
            TypeKind::Scalar | TypeKind::Enum(_) => Some(ty.clone()),
            TypeKind::Object(_) => Some(TypeRef::named(input_type_name(name))),
            _ => None,
        },
    }
}

/// Queues every object type reachable from `field` whose input mirror is
/// needed: the field's own object type, then, transitively, the object types
/// of that object's argument-free fields.
///
/// Types already queued are not walked again, so cyclic references between
/// object types terminate.
pub(crate) fn queue_missing_types(graph: &TypeGraph, field: &FieldDef, cx: &mut ModelContext) {
    if field.has_arguments() {
        return;
    }

    let name = field.ty.named_type();
    let Some(object) = graph.get(name).and_then(|def| def.as_object()) else {
        return;
    };

    if !cx.queue_missing(name) {
        return;
    }

    for field in &object.fields {
        queue_missing_types(graph, field, cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlmodel_core::context::{ModelDirectiveArgs, ModelRecord};

    fn graph() -> TypeGraph {
        crate::sdl::parse(
            "
            type Blog { id: ID!, name: String!, owner: Author, tags: [Tag!]! }
            type Author { id: ID!, blog: Blog, favourite: Author }
            enum Tag { NEWS, SPORT }
            interface Node { id: ID! }
            type Post { blog: Blog, node: Node, search(term: String): [Blog] }
            ",
        )
        .unwrap()
    }

    fn mapped(graph: &TypeGraph, owner: &str, field: &str) -> Option<String> {
        let field = graph.object(owner).unwrap().field(field).unwrap();
        input_field_type(graph, field).map(|ty| ty.to_string())
    }

    #[test]
    fn maps_field_types() {
        let graph = graph();

        assert_eq!(mapped(&graph, "Blog", "id").as_deref(), Some("ID!"));
        assert_eq!(mapped(&graph, "Blog", "tags").as_deref(), Some("[Tag!]!"));
        assert_eq!(mapped(&graph, "Blog", "owner").as_deref(), Some("AuthorInput"));
        assert_eq!(mapped(&graph, "Post", "node"), None);
        assert_eq!(mapped(&graph, "Post", "search"), None);
    }

    #[test]
    fn missing_types_follow_cycles() {
        let graph = graph();
        let mut record = ModelRecord::new("Post", ModelDirectiveArgs::default());

        for field in &graph.object("Post").unwrap().fields {
            queue_missing_types(&graph, field, &mut record.context);
        }

        assert_eq!(
            record.context.missing_types().collect::<Vec<_>>(),
            ["Blog", "Author"]
        );
    }
}
