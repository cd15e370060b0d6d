pub use std_util::*;

use gqlmodel_core::schema::TypeGraph;
use gqlmodel_transform::Transformed;

/// A single model without connections.
pub const BLOG: &str = "
type Blog @model {
    id: ID!
    name: String!
}
";

/// Three models linked by two bidirectional connections.
pub const BLOG_POST_COMMENT: &str = r#"
type Blog @model {
    id: ID!
    name: String!
    posts: [Post] @connection(name: "BlogPosts")
}

type Post @model {
    id: ID!
    title: String!
    blog: Blog @connection(name: "BlogPosts")
    comments: [Comment] @connection(name: "PostComments")
}

type Comment @model {
    id: ID!
    content: String
    post: Post @connection(name: "PostComments")
}
"#;

/// Transforms `source`, panicking with the error message on failure.
pub fn transform(source: &str) -> Transformed {
    match gqlmodel_transform::transform_schema(source) {
        Ok(out) => out,
        Err(err) => panic!("transform failed: {err}\n{source}"),
    }
}

/// Fields of an object or input object, rendered as `name(args): Type`.
pub fn fields(graph: &TypeGraph, name: &str) -> Vec<String> {
    let Some(def) = graph.get(name) else {
        panic!("`{name}` is not defined");
    };

    if let Some(object) = def.as_object() {
        object.fields.iter().map(ToString::to_string).collect()
    } else if let Some(input) = def.as_input_object() {
        input.fields.iter().map(ToString::to_string).collect()
    } else {
        panic!("`{name}` is a {} and has no fields", def.kind_name())
    }
}

/// Finds the rendered field `field` of `ty`.
pub fn field(graph: &TypeGraph, ty: &str, field: &str) -> String {
    fields(graph, ty)
        .into_iter()
        .find(|rendered| {
            rendered
                .strip_prefix(field)
                .is_some_and(|rest| rest.starts_with(':') || rest.starts_with('('))
        })
        .unwrap_or_else(|| panic!("`{ty}.{field}` is not defined"))
}
