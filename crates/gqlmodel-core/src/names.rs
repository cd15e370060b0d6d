//! Deterministic names derived from a model's base name.
//!
//! Every pass that needs a generated name computes it through
//! [`ModelNames::derive`], so independently derived names always agree.

use std_util::str::{camel_case, pluralize};

pub const SORT_DIRECTION: &str = "ModelSortDirection";
pub const ATTRIBUTE_TYPES: &str = "ModelAttributeTypes";
pub const SIZE_INPUT: &str = "ModelSizeInput";
pub const STRING_INPUT: &str = "ModelStringInput";
pub const ID_INPUT: &str = "ModelIDInput";
pub const INT_INPUT: &str = "ModelIntInput";
pub const FLOAT_INPUT: &str = "ModelFloatInput";
pub const BOOLEAN_INPUT: &str = "ModelBooleanInput";

/// Optimistic concurrency counter added to every model.
pub const VERSION_FIELD: &str = "_version";

/// Soft-delete flag added to every model.
pub const DELETED_FIELD: &str = "_deleted";

/// Last modification timestamp added to every model.
pub const LAST_CHANGED_AT_FIELD: &str = "_lastChangedAt";

pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelNames {
    /// The model type itself
    pub main: String,

    /// Paginated wrapper returned by list and sync queries
    pub connection: String,

    pub create_input: String,
    pub update_input: String,
    pub delete_input: String,
    pub filter_input: String,
    pub condition_input: String,

    pub query: QueryNames,
    pub mutation: MutationNames,
    pub subscription: SubscriptionNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryNames {
    pub type_name: String,
    pub get: String,
    pub list: String,
    pub sync: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MutationNames {
    pub type_name: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionNames {
    pub type_name: String,
    pub on_create: String,
    pub on_update: String,
    pub on_delete: String,
}

impl ModelNames {
    /// Derives every generated name for the model named `base`.
    ///
    /// Pluralization appends `s`, so `Category` lists through
    /// `listCategorys`.
    pub fn derive(base: &str) -> ModelNames {
        let plural = pluralize(base);

        ModelNames {
            main: base.to_string(),
            connection: format!("Model{base}Connection"),
            create_input: format!("Create{base}Input"),
            update_input: format!("Update{base}Input"),
            delete_input: format!("Delete{base}Input"),
            filter_input: format!("Model{base}FilterInput"),
            condition_input: format!("Model{base}ConditionInput"),
            query: QueryNames {
                type_name: "Query".to_string(),
                get: format!("get{base}"),
                list: format!("list{plural}"),
                sync: format!("sync{plural}"),
            },
            mutation: MutationNames {
                type_name: "Mutation".to_string(),
                create: format!("create{base}"),
                update: format!("update{base}"),
                delete: format!("delete{base}"),
            },
            subscription: SubscriptionNames {
                type_name: "Subscription".to_string(),
                on_create: format!("onCreate{base}"),
                on_update: format!("onUpdate{base}"),
                on_delete: format!("onDelete{base}"),
            },
        }
    }
}

/// Name of the input type mirroring the object type `object`.
pub fn input_type_name(object: &str) -> String {
    format!("{object}Input")
}

/// Foreign key field carried by `owner`'s inputs for a singular connection to
/// `target`, e.g. `postBlogId`.
pub fn foreign_key_field_name(owner: &str, target: &str) -> String {
    camel_case(&format!("{owner}{target}Id"))
}

/// Name grouping both sides of a connection when `@connection(name:)` is
/// not given.
pub fn default_connection_name(owner: &str, target: &str) -> String {
    format!("${owner}{target}")
}
