//! Definitions merged ahead of every input document.

/// The `@connection` directive.
pub const CONNECTION: &str = "
directive @connection(name: String, fields: [String!]) on FIELD_DEFINITION
";

/// The `@model` directive and the input types its arguments use.
pub const MODEL: &str = "
directive @model(
    queries: ModelQueryMap,
    mutations: ModelMutationMap,
    subscriptions: ModelSubscriptionMap
) on OBJECT
input ModelMutationMap { create: String, update: String, delete: String }
input ModelQueryMap { get: String, list: String }
input ModelSubscriptionMap {
    onCreate: [String]
    onUpdate: [String]
    onDelete: [String]
    level: ModelSubscriptionLevel
}
enum ModelSubscriptionLevel { off public on }
";

/// Directive attached to generated subscription fields. Not merged into the
/// input; a consumer re-reading a transformed schema loads it first.
pub const AWS_SUBSCRIBE: &str = "
directive @aws_subscribe(mutations: [String!]) on FIELD_DEFINITION
";

/// Merged ahead of the caller's document, in order.
pub const BASE: [&str; 2] = [CONNECTION, MODEL];

/// Types only needed to declare `@model`, removed from the output.
pub const PRUNED_TYPES: [&str; 4] = [
    "ModelMutationMap",
    "ModelQueryMap",
    "ModelSubscriptionMap",
    "ModelSubscriptionLevel",
];

pub(crate) const MODEL_DIRECTIVE: &str = "model";
pub(crate) const CONNECTION_DIRECTIVE: &str = "connection";
pub(crate) const AWS_SUBSCRIBE_DIRECTIVE: &str = "aws_subscribe";
pub(crate) const DEPRECATED_DIRECTIVE: &str = "deprecated";
pub(crate) const SPECIFIED_BY_DIRECTIVE: &str = "specifiedBy";

/// Directives every schema may use without defining them. They are kept on
/// the transformed schema.
pub(crate) const BUILTIN_DIRECTIVES: [&str; 2] = [DEPRECATED_DIRECTIVE, SPECIFIED_BY_DIRECTIVE];
