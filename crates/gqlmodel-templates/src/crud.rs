//! Query and mutation templates of a single model.

use crate::{render::render, Config};
use gqlmodel_core::{MappingTemplatePair, ModelNames};

const GET_REQUEST: &str = include_str!("templates/get.request.vtl");
const LIST_REQUEST: &str = include_str!("templates/list.request.vtl");
const SYNC_REQUEST: &str = include_str!("templates/sync.request.vtl");
const CREATE_REQUEST: &str = include_str!("templates/create.request.vtl");
const UPDATE_REQUEST: &str = include_str!("templates/update.request.vtl");
const DELETE_REQUEST: &str = include_str!("templates/delete.request.vtl");
const DEFAULT_RESPONSE: &str = include_str!("templates/default.response.vtl");

/// One generated operation: the root type and field it resolves plus its
/// templates.
pub(crate) struct Operation<'a> {
    pub(crate) type_name: &'a str,
    pub(crate) field_name: &'a str,
    pub(crate) templates: MappingTemplatePair,
}

/// Builds the six query and mutation template pairs of a model.
pub(crate) fn operations<'a>(config: &Config, names: &'a ModelNames) -> [Operation<'a>; 6] {
    let list_limit = config.list_limit.to_string();
    let sync_limit = config.sync_limit.to_string();
    let type_name = names.main.as_str();

    let query = &names.query.type_name;
    let mutation = &names.mutation.type_name;

    [
        Operation::new(query, &names.query.get, render(GET_REQUEST, &[])),
        Operation::new(
            query,
            &names.query.list,
            render(LIST_REQUEST, &[("list_limit", list_limit.as_str())]),
        ),
        Operation::new(
            query,
            &names.query.sync,
            render(SYNC_REQUEST, &[("sync_limit", sync_limit.as_str())]),
        ),
        Operation::new(
            mutation,
            &names.mutation.create,
            render(CREATE_REQUEST, &[("type_name", type_name)]),
        ),
        Operation::new(
            mutation,
            &names.mutation.update,
            render(UPDATE_REQUEST, &[("type_name", type_name)]),
        ),
        Operation::new(mutation, &names.mutation.delete, render(DELETE_REQUEST, &[])),
    ]
}

impl<'a> Operation<'a> {
    fn new(type_name: &'a str, field_name: &'a str, request: String) -> Operation<'a> {
        Operation {
            type_name,
            field_name,
            templates: MappingTemplatePair::new(request, render(DEFAULT_RESPONSE, &[])),
        }
    }
}
