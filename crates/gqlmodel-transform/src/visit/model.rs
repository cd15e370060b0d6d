mod filters;
mod inputs;
mod operations;

use super::{DirectiveSite, Visit};
use crate::{common, Error, Result};
use gqlmodel_core::context::{ModelContext, ModelDirectiveArgs, ModelRecord};
use gqlmodel_core::names::{DELETED_FIELD, LAST_CHANGED_AT_FIELD, VERSION_FIELD};
use gqlmodel_core::schema::{scalar, Directive, FieldDef, ObjectType, TypeDef, TypeGraph, TypeRef};
use gqlmodel_core::ModelNames;

/// Synthesizes the types generated for one model.
struct Expand<'a> {
    graph: &'a mut TypeGraph,

    /// Names derived from the model type's name
    names: &'a ModelNames,
}

/// Handles `@model` on an object type.
///
/// Registers the model and adds everything that does not depend on other
/// directives having been processed: bookkeeping fields, the connection
/// wrapper, the delete input and the root operation fields. Inputs mirroring
/// the model's fields are added later by [`add_model_input_types`], once
/// every connection field has its final shape.
pub(super) fn visit(visit: &mut Visit<'_>, site: &DirectiveSite, directive: &Directive) -> Result<()> {
    let DirectiveSite::Type { type_name } = site else {
        return Err(Error::directive_misuse(format!(
            "@model may only be applied to object types, found it on {site}"
        )));
    };

    let def = visit
        .graph
        .get(type_name)
        .ok_or_else(|| Error::type_resolution(format!("type `{type_name}` is not defined")))?;

    if !def.is_object() {
        return Err(Error::directive_misuse(format!(
            "@model may only be applied to object types, `{type_name}` is {} {}",
            article(def.kind_name()),
            def.kind_name()
        )));
    }

    let args = ModelDirectiveArgs::from_directive(directive)
        .map_err(|err| err.context(gqlmodel_core::err!("parsing @model on `{type_name}`")))?;
    let record = ModelRecord::new(type_name, args);

    common::register(visit.graph);

    let mut expand = Expand {
        graph: visit.graph,
        names: &record.names,
    };
    expand.add_bookkeeping_fields()?;
    expand.add_connection_type();
    expand.add_delete_input();
    expand.add_query_fields()?;
    expand.add_mutation_fields()?;
    expand.add_subscription_fields(visit.cx)?;

    tracing::debug!(model = %type_name, "registered model");
    visit.cx.models.push(record);

    Ok(())
}

/// Adds the create, update, filter and condition inputs of a model, then
/// queues the object types those inputs reference.
pub(crate) fn add_model_input_types(graph: &mut TypeGraph, cx: &mut ModelContext) -> Result<()> {
    let names = cx.names.clone();
    let mut expand = Expand {
        graph,
        names: &names,
    };

    expand.add_create_input(cx)?;
    expand.add_update_input(cx)?;
    expand.add_filter_input()?;
    expand.add_condition_input()?;

    Ok(())
}

impl Expand<'_> {
    /// The model type itself, as it stands in the graph.
    fn model(&self) -> Result<&ObjectType> {
        self.graph.object(&self.names.main)
    }

    fn add_bookkeeping_fields(&mut self) -> Result<()> {
        let model = self.graph.object_mut(&self.names.main)?;

        model.set_field(FieldDef::new(
            VERSION_FIELD,
            TypeRef::named(scalar::INT).non_null(),
        ));
        model.set_field(FieldDef::new(DELETED_FIELD, TypeRef::named(scalar::BOOLEAN)));
        model.set_field(FieldDef::new(
            LAST_CHANGED_AT_FIELD,
            TypeRef::named(scalar::AWS_TIMESTAMP).non_null(),
        ));

        Ok(())
    }

    fn add_connection_type(&mut self) {
        self.graph.insert(TypeDef::object(
            &self.names.connection,
            ObjectType::from_fields([
                FieldDef::new("items", TypeRef::named(&self.names.main).list()),
                FieldDef::new("nextToken", TypeRef::named(scalar::STRING)),
                FieldDef::new("startedAt", TypeRef::named(scalar::AWS_TIMESTAMP)),
            ]),
        ));
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}
