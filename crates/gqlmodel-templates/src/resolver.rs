use gqlmodel_core::MappingTemplatePair;
use serde::Serialize;

/// Binds a generated field to the data source that serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolver {
    /// Type owning the resolved field, e.g. `Query` or `Blog`
    pub type_name: String,

    pub field_name: String,

    /// Data source of the model whose table is read or written
    pub data_source: String,

    pub templates: MappingTemplatePair,
}

/// A secondary index on the table of a singular connection's owner, keyed on
/// the foreign key.
///
/// List connections query `<prefix><Owner><Target>s` on the target's table.
/// The two only line up when both sides of a connection use the same explicit
/// `@connection(name:)`, e.g. `BlogPosts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryIndex {
    /// Model whose table carries the index
    pub model: String,

    pub name: String,

    /// Attribute the index is partitioned on
    pub partition_key: String,
}

impl Resolver {
    pub(crate) fn new(
        type_name: &str,
        field_name: &str,
        data_source: &str,
        templates: MappingTemplatePair,
    ) -> Resolver {
        Resolver {
            type_name: type_name.to_string(),
            field_name: field_name.to_string(),
            data_source: data_source.to_string(),
            templates,
        }
    }

    /// Returns `true` if this resolver serves `type_name.field_name`.
    pub fn resolves(&self, type_name: &str, field_name: &str) -> bool {
        self.type_name == type_name && self.field_name == field_name
    }
}
