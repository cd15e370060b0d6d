mod args;
pub use args::{
    ConnectionDirectiveArgs, ModelDirectiveArgs, MutationMap, QueryMap, SubscriptionLevel,
    SubscriptionMap,
};

mod connection;
pub use connection::{Cardinality, ConnectionRecord};

mod model;
pub use model::{ModelContext, ModelRecord};

use indexmap::IndexMap;

/// State shared by every pass of a single transform invocation.
///
/// A context is created empty, filled by the directive visitors, read by the
/// backfill and foreign key passes, and finally handed to the template
/// generator. It is never shared between invocations.
#[derive(Debug, Default)]
pub struct TransformContext {
    /// Models in the order their `@model` directives were visited
    pub models: Vec<ModelRecord>,

    /// One record per `@connection` field, whatever its cardinality
    pub connections: Vec<ConnectionRecord>,

    /// Subscription field name to the mutation fields that trigger it
    pub subscription_map: IndexMap<String, Vec<String>>,
}

impl TransformContext {
    pub fn new() -> TransformContext {
        TransformContext::default()
    }

    pub fn model(&self, name: &str) -> Option<&ModelRecord> {
        self.models.iter().find(|model| model.names.main == name)
    }

    pub fn is_model(&self, name: &str) -> bool {
        self.model(name).is_some()
    }

    /// Records that `mutation` triggers the subscription field `subscription`.
    pub fn record_subscription(&mut self, subscription: &str, mutation: &str) {
        let mutations = self
            .subscription_map
            .entry(subscription.to_string())
            .or_default();

        if !mutations.iter().any(|existing| existing == mutation) {
            mutations.push(mutation.to_string());
        }
    }

    /// Connections whose owner gains a foreign key field.
    pub fn singular_connections(&self) -> impl Iterator<Item = &ConnectionRecord> + '_ {
        self.connections
            .iter()
            .filter(|connection| connection.cardinality.is_one())
    }
}
