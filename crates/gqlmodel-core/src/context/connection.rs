use super::ConnectionDirectiveArgs;
use crate::schema::{FieldDef, TypeRef};

/// A field annotated with `@connection`.
#[derive(Debug, Clone)]
pub struct ConnectionRecord {
    /// The type owning the field
    pub model_type: String,

    pub create_input_type_name: String,
    pub update_input_type_name: String,

    /// The field as declared, before a list connection is rewritten
    pub field: FieldDef,

    /// The model the field points to
    pub target_type: String,

    pub cardinality: Cardinality,

    /// Foreign key field added to the owner's inputs, e.g. `postBlogId`
    pub id_field_name: String,

    /// Groups the two sides of a bidirectional connection
    pub name: String,

    pub args: ConnectionDirectiveArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// The field returns a single item
    One,

    /// The field returns a list of items
    Many,
}

impl Cardinality {
    /// Computes the cardinality of a field returning `ty`.
    pub fn of(ty: &TypeRef) -> Cardinality {
        if ty.is_list() {
            Cardinality::Many
        } else {
            Cardinality::One
        }
    }

    pub fn is_one(self) -> bool {
        matches!(self, Cardinality::One)
    }

    pub fn is_many(self) -> bool {
        matches!(self, Cardinality::Many)
    }
}
