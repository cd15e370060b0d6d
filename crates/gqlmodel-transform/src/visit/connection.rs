use super::{DirectiveSite, Visit};
use crate::{Error, Result};
use gqlmodel_core::context::{Cardinality, ConnectionDirectiveArgs, ConnectionRecord};
use gqlmodel_core::names::{self, SORT_DIRECTION};
use gqlmodel_core::schema::{scalar, Directive, InputValue, TypeRef};
use gqlmodel_core::ModelNames;

/// Handles `@connection` on a field of an object type.
///
/// Every connection is recorded. A list connection is rewritten in place to
/// return the target's paginated connection type and to accept `filter`,
/// `sortDirection`, `limit` and `nextToken`. A singular connection keeps its
/// shape; its owner's inputs gain a foreign key once they exist.
pub(super) fn visit(visit: &mut Visit<'_>, site: &DirectiveSite, directive: &Directive) -> Result<()> {
    let DirectiveSite::Field {
        type_name,
        field_name,
    } = site
    else {
        return Err(Error::directive_misuse(format!(
            "@connection may only be applied to fields, found it on {site}"
        )));
    };

    let owner = visit
        .graph
        .get(type_name)
        .ok_or_else(|| Error::type_resolution(format!("type `{type_name}` is not defined")))?;

    let Some(object) = owner.as_object() else {
        return Err(Error::directive_misuse(format!(
            "@connection may only be applied to fields of object types, \
             {site} belongs to {} `{type_name}`",
            owner.kind_name()
        )));
    };

    let field = object
        .field(field_name)
        .ok_or_else(|| Error::type_resolution(format!("field {site} is not defined")))?
        .clone();

    if field.has_arguments() {
        return Err(Error::directive_misuse(format!(
            "@connection may only be applied to fields with no arguments, {site} has {}",
            field.arguments.len()
        )));
    }

    let target = target_type(&field.ty).ok_or_else(|| {
        Error::directive_misuse(format!(
            "@connection may only be applied to fields returning an object or a list of \
             objects, {site} returns `{}`",
            field.ty
        ))
    })?;

    if scalar::is_builtin(target) {
        return Err(Error::directive_misuse(format!(
            "@connection may only target object types, {site} targets scalar `{target}`"
        )));
    }

    let target_def = visit.graph.get(target).ok_or_else(|| {
        Error::type_resolution(format!("type `{target}` referenced by {site} is not defined"))
    })?;

    if !target_def.is_object() {
        return Err(Error::directive_misuse(format!(
            "@connection may only target object types, {site} targets {} `{target}`",
            target_def.kind_name()
        )));
    }

    if !visit.cx.is_model(target) {
        return Err(Error::type_resolution(format!(
            "{site} connects to `{target}`, which is not annotated with @model"
        )));
    }

    let args = ConnectionDirectiveArgs::from_directive(directive)
        .map_err(|err| err.context(gqlmodel_core::err!("parsing @connection on {site}")))?;
    let owner_names = ModelNames::derive(type_name);
    let cardinality = Cardinality::of(&field.ty);
    let target = target.to_string();

    let record = ConnectionRecord {
        model_type: type_name.clone(),
        create_input_type_name: owner_names.create_input,
        update_input_type_name: owner_names.update_input,
        id_field_name: names::foreign_key_field_name(type_name, &target),
        name: args
            .name
            .clone()
            .unwrap_or_else(|| names::default_connection_name(type_name, &target)),
        target_type: target,
        cardinality,
        field,
        args,
    };

    if cardinality.is_many() {
        let target_names = ModelNames::derive(&record.target_type);
        let field = visit
            .graph
            .object_mut(type_name)?
            .field_mut(field_name)
            .ok_or_else(|| Error::type_resolution(format!("field {site} is not defined")))?;

        field.ty = TypeRef::named(target_names.connection);
        field.arguments = vec![
            InputValue::new("filter", TypeRef::named(target_names.filter_input)),
            InputValue::new("sortDirection", TypeRef::named(SORT_DIRECTION)),
            InputValue::new("limit", TypeRef::named(scalar::INT)),
            InputValue::new("nextToken", TypeRef::named(scalar::STRING)),
        ];
    }

    tracing::debug!(
        owner = %record.model_type,
        field = %record.field.name,
        target = %record.target_type,
        cardinality = ?record.cardinality,
        "registered connection"
    );
    visit.cx.connections.push(record);

    Ok(())
}

/// The object type a connection field points to, if the field's shape is one
/// a connection supports: `T`, `T!`, `[T]` or `[T]!`, with optional non-null
/// list elements.
fn target_type(ty: &TypeRef) -> Option<&str> {
    match ty.nullable() {
        TypeRef::Named(name) => Some(name.as_str()),
        TypeRef::List(inner) => match inner.nullable() {
            TypeRef::Named(name) => Some(name.as_str()),
            _ => None,
        },
        TypeRef::NonNull(_) => None,
    }
}
