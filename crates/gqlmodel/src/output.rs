use crate::{Resolver, SecondaryIndex, TransformContext};
use serde::Serialize;

/// Everything produced by a successful transform.
#[derive(Debug, Serialize)]
pub struct Output {
    /// Expanded schema text
    pub schema: String,

    /// Models and connections found in the source
    #[serde(skip)]
    pub context: TransformContext,

    pub resolvers: Vec<Resolver>,

    /// Secondary indexes the model tables need
    pub indexes: Vec<SecondaryIndex>,
}

impl Output {
    /// Finds the resolver serving `type_name.field_name`.
    pub fn resolver(&self, type_name: &str, field_name: &str) -> Option<&Resolver> {
        self.resolvers
            .iter()
            .find(|resolver| resolver.resolves(type_name, field_name))
    }

    /// Names of the models found in the source, in declaration order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.context.models.iter().map(|model| model.names.main.as_str())
    }
}
