use gqlmodel_core::{context::ModelDirectiveArgs, context::ModelRecord, TransformContext};
use gqlmodel_templates::{Config, Generator, SecondaryIndex};
use gqlmodel_transform::transform_schema;
use pretty_assertions::assert_eq;
use std_util::{assert_err, assert_none, assert_ok, assert_some};

const BLOG_POST: &str = r#"
type Blog @model {
    id: ID!
    name: String!
    posts: [Post] @connection(name: "BlogPosts")
}

type Post @model {
    id: ID!
    title: String!
    blog: Blog @connection(name: "BlogPosts")
}
"#;

#[test]
fn six_resolvers_per_model() {
    let out = assert_ok!(transform_schema("type Blog @model { id: ID! name: String! }"));
    let artifacts = assert_ok!(Generator::default().generate(&out.context));

    let bound: Vec<_> = artifacts
        .resolvers
        .iter()
        .map(|r| (r.type_name.as_str(), r.field_name.as_str(), r.data_source.as_str()))
        .collect();

    assert_eq!(
        bound,
        [
            ("Query", "getBlog", "Blog"),
            ("Query", "listBlogs", "Blog"),
            ("Query", "syncBlogs", "Blog"),
            ("Mutation", "createBlog", "Blog"),
            ("Mutation", "updateBlog", "Blog"),
            ("Mutation", "deleteBlog", "Blog"),
        ]
    );
    assert!(artifacts.indexes.is_empty());
}

#[test]
fn connection_resolvers_bind_to_target() {
    let out = assert_ok!(transform_schema(BLOG_POST));
    let artifacts = assert_ok!(Generator::default().generate(&out.context));

    assert_eq!(artifacts.resolvers.len(), 14);

    let posts = assert_some!(artifacts.resolver("Blog", "posts"));
    assert_eq!(posts.data_source, "Post");
    assert!(posts.templates.request.contains(r#""index": "gsi-BlogPosts""#));
    assert!(posts
        .templates
        .request
        .contains(r##""#connectionAttribute": "postBlogId""##));

    let blog = assert_some!(artifacts.resolver("Post", "blog"));
    assert_eq!(blog.data_source, "Blog");
    assert!(blog.templates.request.contains("$ctx.source.postBlogId"));
    assert!(blog.templates.request.contains("___xamznone____"));

    assert_none!(artifacts.resolver("Post", "title"));
}

#[test]
fn singular_connection_needs_index() {
    let out = assert_ok!(transform_schema(BLOG_POST));
    let artifacts = assert_ok!(Generator::default().generate(&out.context));

    assert_eq!(
        artifacts.indexes,
        [SecondaryIndex {
            model: "Post".to_string(),
            name: "gsi-BlogPosts".to_string(),
            partition_key: "postBlogId".to_string(),
        }]
    );
}

#[test]
fn config_reaches_every_template() {
    let out = assert_ok!(transform_schema(BLOG_POST));
    let config = Config::new()
        .list_limit(50)
        .sync_limit(1000)
        .missing_key_sentinel("<none>")
        .index_prefix("idx-");
    let artifacts = assert_ok!(Generator::new(config).generate(&out.context));

    let request = |ty, field| {
        assert_some!(artifacts.resolver(ty, field))
            .templates
            .request
            .clone()
    };

    assert!(request("Query", "listPosts").contains("$context.args.limit, 50)"));
    assert!(request("Query", "syncPosts").contains("$ctx.args.limit, 1000)"));
    assert!(request("Blog", "posts").contains(r#""index": "idx-BlogPosts""#));
    assert!(request("Post", "blog").contains(r#""<none>""#));
    assert_eq!(artifacts.indexes[0].name, "idx-BlogPosts");
}

#[test]
fn artifacts_serialize_as_json() {
    let out = assert_ok!(transform_schema(BLOG_POST));
    let artifacts = assert_ok!(Generator::default().generate(&out.context));
    let json = assert_ok!(serde_json::to_value(&artifacts));

    assert_eq!(json["resolvers"][0]["field_name"], "getBlog");
    assert_eq!(json["indexes"][0]["partition_key"], "postBlogId");
}

#[test]
fn connection_to_unknown_model_fails() {
    let mut out = assert_ok!(transform_schema(BLOG_POST));
    out.context.models.retain(|model| model.names.main != "Blog");

    let err = assert_err!(Generator::default().generate(&out.context));
    assert!(err.is_type_resolution());
}

#[test]
fn empty_context_generates_nothing() {
    let artifacts = assert_ok!(Generator::default().generate(&TransformContext::new()));
    assert!(artifacts.resolvers.is_empty());

    let mut cx = TransformContext::new();
    cx.models
        .push(ModelRecord::new("Note", ModelDirectiveArgs::default()));
    let artifacts = assert_ok!(Generator::default().generate(&cx));
    assert_eq!(artifacts.resolvers.len(), 6);
}

#[test]
fn shared_foreign_key_needs_one_index() {
    let out = assert_ok!(transform_schema(
        "
        type Author @model { id: ID! }
        type Book @model {
            id: ID!
            writer: Author @connection
            editor: Author @connection
        }
        "
    ));
    let artifacts = assert_ok!(Generator::default().generate(&out.context));

    assert_eq!(artifacts.resolvers.len(), 14);
    assert_eq!(
        artifacts.indexes,
        [SecondaryIndex {
            model: "Book".to_string(),
            name: "gsi-$BookAuthor".to_string(),
            partition_key: "bookAuthorId".to_string(),
        }]
    );
}
