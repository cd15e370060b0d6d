mod connection;
mod model;

pub(crate) use model::add_model_input_types;

use crate::definitions::{CONNECTION_DIRECTIVE, MODEL_DIRECTIVE};
use crate::Result;
use gqlmodel_core::schema::{Directive, TypeGraph, TypeKind};
use gqlmodel_core::TransformContext;

/// Where a directive was applied.
#[derive(Debug, Clone)]
pub(crate) enum DirectiveSite {
    Type {
        type_name: String,
    },
    Field {
        type_name: String,
        field_name: String,
    },
}

/// Handles one application of a directive.
type Handler = fn(&mut Visit<'_>, &DirectiveSite, &Directive) -> Result<()>;

/// Directive handlers, run in table order. Every `@model` is handled before
/// any `@connection`, so connections can check that their target is a model.
const HANDLERS: &[(&str, Handler)] = &[
    (MODEL_DIRECTIVE, model::visit),
    (CONNECTION_DIRECTIVE, connection::visit),
];

pub(crate) struct Visit<'a> {
    pub(crate) graph: &'a mut TypeGraph,
    pub(crate) cx: &'a mut TransformContext,
}

impl<'a> Visit<'a> {
    pub(crate) fn new(graph: &'a mut TypeGraph, cx: &'a mut TransformContext) -> Visit<'a> {
        Visit { graph, cx }
    }

    /// Runs every handler over the sites its directive is applied at.
    pub(crate) fn run(&mut self) -> Result<()> {
        for (name, handler) in HANDLERS {
            for (site, directive) in self.collect(name) {
                handler(self, &site, &directive)?;
            }
        }

        Ok(())
    }

    /// Finds every application of the directive `name`, in schema order.
    ///
    /// Sites are collected up front because handlers rewrite the types they
    /// visit.
    fn collect(&self, name: &str) -> Vec<(DirectiveSite, Directive)> {
        let mut sites = vec![];

        for def in self.graph.types() {
            for directive in def.directives.iter().filter(|d| d.name == name) {
                sites.push((
                    DirectiveSite::Type {
                        type_name: def.name.clone(),
                    },
                    directive.clone(),
                ));
            }

            let (TypeKind::Object(object) | TypeKind::Interface(object)) = &def.kind else {
                continue;
            };

            for field in &object.fields {
                for directive in field.directives.iter().filter(|d| d.name == name) {
                    sites.push((
                        DirectiveSite::Field {
                            type_name: def.name.clone(),
                            field_name: field.name.clone(),
                        },
                        directive.clone(),
                    ));
                }
            }
        }

        sites
    }
}

impl std::fmt::Display for DirectiveSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectiveSite::Type { type_name } => write!(f, "`{type_name}`"),
            DirectiveSite::Field {
                type_name,
                field_name,
            } => write!(f, "`{type_name}.{field_name}`"),
        }
    }
}
