use crate::{Error, Result};
use gqlmodel_core::context::ConnectionRecord;
use gqlmodel_core::schema::{scalar, InputValue, TypeGraph, TypeRef};
use gqlmodel_core::TransformContext;

/// Adds the foreign key field of every singular connection to the create
/// and update inputs of the connection's owner.
///
/// Must run after every model's inputs exist. Returns the number of fields
/// added; a foreign key already present is not added twice.
pub(crate) fn add_foreign_keys(graph: &mut TypeGraph, cx: &TransformContext) -> Result<usize> {
    let mut added = 0;

    for connection in cx.singular_connections() {
        added += add_foreign_key(graph, cx, connection).map_err(|err| {
            err.context(gqlmodel_core::err!(
                "adding foreign key `{}` for `{}.{}`",
                connection.id_field_name,
                connection.model_type,
                connection.field.name
            ))
        })?;
    }

    Ok(added)
}

fn add_foreign_key(
    graph: &mut TypeGraph,
    cx: &TransformContext,
    connection: &ConnectionRecord,
) -> Result<usize> {
    if !cx.is_model(&connection.model_type) {
        return Err(Error::type_resolution(format!(
            "`{}` is not annotated with @model and has no input types",
            connection.model_type
        )));
    }

    let mut added = 0;
    for input in [
        &connection.create_input_type_name,
        &connection.update_input_type_name,
    ] {
        let field = InputValue::new(&connection.id_field_name, TypeRef::named(scalar::ID));
        if graph.input_object_mut(input)?.insert_field_if_absent(field) {
            added += 1;
        }
    }

    Ok(added)
}
