use gqlmodel_transform::transform_schema;
use tests::{assert_err, assert_ok, BLOG};

#[test]
fn model_on_enum() {
    let err = assert_err!(transform_schema("enum Color @model { RED GREEN }"));

    assert!(err.is_directive_misuse());
    assert_eq!(
        err.to_string(),
        "directive misuse: `@model` may not be applied to `Color` (ENUM)"
    );
}

#[test]
fn connection_on_type() {
    let err = assert_err!(transform_schema(
        "type Blog @model @connection { id: ID! }"
    ));
    assert!(err.is_directive_misuse());
}

#[test]
fn connection_on_interface_field() {
    let err = assert_err!(transform_schema(
        "
        type Blog @model { id: ID! }
        interface Node { blog: Blog @connection }
        "
    ));

    assert!(err.is_directive_misuse());
    assert_eq!(
        err.to_string(),
        "directive misuse: @connection may only be applied to fields of object types, \
         `Node.blog` belongs to interface `Node`"
    );
}

#[test]
fn singular_connection_on_non_model_owner() {
    let err = assert_err!(transform_schema(
        "
        type Blog @model { id: ID! }
        type Author { id: ID! blog: Blog @connection }
        "
    ));

    assert!(err.is_type_resolution());
    assert_eq!(
        err.to_string(),
        "adding foreign key `authorBlogId` for `Author.blog`: type resolution failed: \
         `Author` is not annotated with @model and has no input types"
    );
}

#[test]
fn list_connection_on_non_model_owner() {
    let out = assert_ok!(transform_schema(
        "
        type Post @model { id: ID! }
        type Author { id: ID! posts: [Post] @connection }
        "
    ));

    assert!(out.context.connections[0].cardinality.is_many());
}

#[test]
fn connection_on_field_with_arguments() {
    let err = assert_err!(transform_schema(
        "
        type Blog @model { id: ID! }
        type Post @model {
            id: ID!
            blog(version: Int): Blog @connection
        }
        "
    ));
    assert!(err.is_directive_misuse());
}

#[test]
fn connection_to_scalar() {
    let err = assert_err!(transform_schema(
        "type Post @model { id: ID! title: String @connection }"
    ));
    assert!(err.is_directive_misuse());
}

#[test]
fn connection_to_non_model() {
    let err = assert_err!(transform_schema(
        "
        type Author { id: ID! }
        type Post @model { id: ID! author: Author @connection }
        "
    ));
    assert!(err.is_type_resolution());
}

#[test]
fn connection_to_nested_list() {
    let err = assert_err!(transform_schema(
        "
        type Tag @model { id: ID! }
        type Post @model { id: ID! tags: [[Tag]] @connection }
        "
    ));
    assert!(err.is_directive_misuse());
}

#[test]
fn undefined_field_type() {
    let err = assert_err!(transform_schema(
        "type Post @model { id: ID! author: Author }"
    ));
    assert!(err.is_type_resolution());
}

#[test]
fn unknown_directive() {
    let err = assert_err!(transform_schema("type Post @searchable { id: ID! }"));
    assert!(err.is_directive_misuse());
}

#[test]
fn unknown_model_argument() {
    let err = assert_err!(transform_schema(
        "type Post @model(timestamps: null) { id: ID! }"
    ));
    assert!(err.is_directive_misuse());
}

#[test]
fn syntax_error() {
    let err = assert_err!(transform_schema("type Blog @model { id: ID! "));
    assert!(err.is_invalid_schema());
}

#[test]
fn duplicate_type() {
    let source = format!("{BLOG}\ntype Blog {{ id: ID! }}");
    let err = assert_err!(transform_schema(&source));
    assert!(err.is_invalid_schema());
}

#[test]
fn root_type_is_not_an_object() {
    let source = format!("{BLOG}\ninput Mutation {{ id: ID }}");
    let err = assert_err!(transform_schema(&source));
    assert!(err.is_type_resolution());
}

#[test]
fn errors_are_reported_through_facade() {
    let err = assert_err!(gqlmodel::transform("scalar Post @model"));
    assert!(err.is_directive_misuse());
}
