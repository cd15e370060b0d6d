//! Types shared by every model: the comparison inputs used in filters and
//! conditions, the sort direction and attribute type enums, and the
//! `AWSTimestamp` scalar.
//!
//! Each builder returns a fresh, structurally identical definition on every
//! call. [`register`] inserts them without replacing existing definitions,
//! so processing any number of models leaves a single copy of each.

use gqlmodel_core::names::{
    ATTRIBUTE_TYPES, BOOLEAN_INPUT, FLOAT_INPUT, ID_INPUT, INT_INPUT, SIZE_INPUT, SORT_DIRECTION,
    STRING_INPUT,
};
use gqlmodel_core::schema::{scalar, InputValue, TypeDef, TypeGraph, TypeRef};

const AWS_TIMESTAMP_DESCRIPTION: &str = "The AWSTimestamp scalar type represents the number of \
seconds that have elapsed since 1970-01-01T00:00Z. Timestamps are serialized and deserialized \
as numbers. Negative values are also accepted and these represent the number of seconds till \
1970-01-01T00:00Z.";

/// Registers every shared type, keeping existing definitions.
///
/// Returns the number of types added.
pub fn register(graph: &mut TypeGraph) -> usize {
    [
        sort_direction(),
        attribute_types(),
        size_input(),
        string_input(),
        id_input(),
        int_input(),
        float_input(),
        boolean_input(),
        aws_timestamp(),
    ]
    .into_iter()
    .map(|def| graph.insert(def))
    .filter(|inserted| *inserted)
    .count()
}

pub fn sort_direction() -> TypeDef {
    TypeDef::enumeration(SORT_DIRECTION, ["ASC", "DESC"])
}

pub fn attribute_types() -> TypeDef {
    TypeDef::enumeration(
        ATTRIBUTE_TYPES,
        [
            "binary",
            "binarySet",
            "bool",
            "list",
            "map",
            "number",
            "numberSet",
            "string",
            "stringSet",
            "_null",
        ],
    )
}

pub fn size_input() -> TypeDef {
    TypeDef::input_object(SIZE_INPUT, comparisons(scalar::INT))
}

pub fn string_input() -> TypeDef {
    TypeDef::input_object(STRING_INPUT, text_comparisons(scalar::STRING))
}

pub fn id_input() -> TypeDef {
    TypeDef::input_object(ID_INPUT, text_comparisons(scalar::ID))
}

pub fn int_input() -> TypeDef {
    TypeDef::input_object(INT_INPUT, with_attribute_checks(comparisons(scalar::INT)))
}

pub fn float_input() -> TypeDef {
    TypeDef::input_object(FLOAT_INPUT, with_attribute_checks(comparisons(scalar::FLOAT)))
}

pub fn boolean_input() -> TypeDef {
    TypeDef::input_object(
        BOOLEAN_INPUT,
        with_attribute_checks(vec![
            field("ne", TypeRef::named(scalar::BOOLEAN)),
            field("eq", TypeRef::named(scalar::BOOLEAN)),
        ]),
    )
}

pub fn aws_timestamp() -> TypeDef {
    TypeDef::scalar(scalar::AWS_TIMESTAMP).with_description(AWS_TIMESTAMP_DESCRIPTION)
}

/// Returns the comparison input used to filter a field of type `ty`.
///
/// Only the built-in scalars, optionally non-null, have one.
pub fn comparison_input(ty: &TypeRef) -> Option<&'static str> {
    let TypeRef::Named(name) = ty.nullable() else {
        return None;
    };

    match name.as_str() {
        scalar::ID => Some(ID_INPUT),
        scalar::STRING => Some(STRING_INPUT),
        scalar::INT => Some(INT_INPUT),
        scalar::FLOAT => Some(FLOAT_INPUT),
        scalar::BOOLEAN => Some(BOOLEAN_INPUT),
        _ => None,
    }
}

fn field(name: &str, ty: TypeRef) -> InputValue {
    InputValue::new(name, ty)
}

/// `ne eq le lt ge gt` and `between`
fn comparisons(scalar: &str) -> Vec<InputValue> {
    let mut fields: Vec<_> = ["ne", "eq", "le", "lt", "ge", "gt"]
        .into_iter()
        .map(|op| field(op, TypeRef::named(scalar)))
        .collect();
    fields.push(field("between", TypeRef::named(scalar).list()));
    fields
}

fn with_attribute_checks(mut fields: Vec<InputValue>) -> Vec<InputValue> {
    fields.push(field("attributeExists", TypeRef::named(scalar::BOOLEAN)));
    fields.push(field("attributeType", TypeRef::named(ATTRIBUTE_TYPES)));
    fields
}

/// Comparisons for string-like scalars.
fn text_comparisons(scalar: &str) -> Vec<InputValue> {
    let mut fields: Vec<_> = ["ne", "eq", "le", "lt", "ge", "gt", "contains", "notContains"]
        .into_iter()
        .map(|op| field(op, TypeRef::named(scalar)))
        .collect();
    fields.push(field("between", TypeRef::named(scalar).list()));
    fields.push(field("beginsWith", TypeRef::named(scalar)));

    let mut fields = with_attribute_checks(fields);
    fields.push(field("size", TypeRef::named(SIZE_INPUT)));
    fields
}
