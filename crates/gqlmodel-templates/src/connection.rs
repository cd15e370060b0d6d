//! Templates resolving `@connection` fields.

use crate::{render::render, Config};
use gqlmodel_core::{context::ConnectionRecord, MappingTemplatePair};
use std_util::str::{camel_case, pluralize};

const ITEM_REQUEST: &str = include_str!("templates/connection_item.request.vtl");
const ITEM_RESPONSE: &str = include_str!("templates/connection_item.response.vtl");
const LIST_REQUEST: &str = include_str!("templates/connection_list.request.vtl");
const LIST_RESPONSE: &str = include_str!("templates/connection_list.response.vtl");

/// Looks up the single connected item by the foreign key stored on the
/// source item.
pub(crate) fn item(config: &Config, connection: &ConnectionRecord) -> MappingTemplatePair {
    let request = render(
        ITEM_REQUEST,
        &[
            ("foreign_key", connection.id_field_name.as_str()),
            ("missing_key", config.missing_key_sentinel.as_str()),
        ],
    );

    MappingTemplatePair::new(request, render(ITEM_RESPONSE, &[]))
}

/// Queries the target's table for items pointing back at the source item.
pub(crate) fn list(config: &Config, connection: &ConnectionRecord) -> MappingTemplatePair {
    let attribute = connection_attribute(connection);
    let index = list_index_name(config, connection);
    let limit = config.list_limit.to_string();

    let request = render(
        LIST_REQUEST,
        &[
            ("connection_attribute", attribute.as_str()),
            ("index_name", index.as_str()),
            ("list_limit", limit.as_str()),
        ],
    );

    MappingTemplatePair::new(request, render(LIST_RESPONSE, &[]))
}

/// Attribute on target items holding the owner's id, e.g. `postBlogId` for
/// `Blog.posts`.
fn connection_attribute(connection: &ConnectionRecord) -> String {
    camel_case(&format!(
        "{}{}Id",
        connection.target_type, connection.model_type
    ))
}

/// Index queried by a list connection, e.g. `gsi-BlogPosts` for `Blog.posts`.
fn list_index_name(config: &Config, connection: &ConnectionRecord) -> String {
    config.index_name(&format!(
        "{}{}",
        connection.model_type,
        pluralize(&connection.target_type)
    ))
}
