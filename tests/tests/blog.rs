use pretty_assertions::assert_eq;
use tests::{assert_ok, field, fields, transform, BLOG};

#[test]
fn root_fields() {
    let out = transform(BLOG);

    assert_eq!(field(&out.graph, "Query", "getBlog"), "getBlog(id: ID!): Blog");
    assert_eq!(
        field(&out.graph, "Query", "listBlogs"),
        "listBlogs(filter: ModelBlogFilterInput, limit: Int, nextToken: String): ModelBlogConnection"
    );
    assert_eq!(
        field(&out.graph, "Mutation", "createBlog"),
        "createBlog(input: CreateBlogInput!, condition: ModelBlogConditionInput): Blog"
    );
}

#[test]
fn printed_schema_drops_helper_types() {
    let out = transform(BLOG);

    assert!(out.schema.contains("  getBlog(id: ID!): Blog\n"));
    assert!(out.schema.contains("  listBlogs(filter: ModelBlogFilterInput, limit: Int, nextToken: String): ModelBlogConnection\n"));
    assert!(out.schema.contains(
        "  createBlog(input: CreateBlogInput!, condition: ModelBlogConditionInput): Blog\n"
    ));

    for helper in [
        "ModelMutationMap",
        "ModelQueryMap",
        "ModelSubscriptionMap",
        "ModelSubscriptionLevel",
    ] {
        assert!(!out.schema.contains(helper), "`{helper}` was printed");
        assert!(!out.graph.contains(helper));
    }

    assert!(!out.schema.contains("@model"));
    assert!(!out.schema.contains("directive @"));
}

#[test]
fn model_type_in_output() {
    let out = transform(BLOG);

    assert_eq!(
        fields(&out.graph, "Blog"),
        [
            "id: ID!",
            "name: String!",
            "_version: Int!",
            "_deleted: Boolean",
            "_lastChangedAt: AWSTimestamp!",
        ]
    );
    assert_eq!(out.context.models.len(), 1);
    assert!(out.context.connections.is_empty());
}

#[test]
fn facade_produces_resolvers() {
    let out = assert_ok!(gqlmodel::transform(BLOG));

    assert_eq!(out.resolvers.len(), 6);
    assert!(out.indexes.is_empty());
    assert_eq!(out.schema, transform(BLOG).schema);

    let create = out.resolver("Mutation", "createBlog").unwrap();
    assert_eq!(create.data_source, "Blog");
    assert!(create
        .templates
        .request
        .contains(r#"put("__typename", "Blog")"#));
}
