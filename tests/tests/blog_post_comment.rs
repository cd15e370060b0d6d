use pretty_assertions::assert_eq;
use tests::{assert_ok, assert_some, assert_unique, field, fields, transform, BLOG_POST_COMMENT};

#[test]
fn singular_connections_add_foreign_keys() {
    let out = transform(BLOG_POST_COMMENT);

    assert_eq!(
        fields(&out.graph, "CreatePostInput"),
        [
            "title: String!",
            "blog: BlogInput",
            "id: ID",
            "_version: Int",
            "postBlogId: ID",
        ]
    );
    assert_eq!(
        fields(&out.graph, "UpdatePostInput"),
        [
            "title: String",
            "blog: BlogInput",
            "id: ID!",
            "_version: Int",
            "postBlogId: ID",
        ]
    );
    assert_eq!(
        field(&out.graph, "CreateCommentInput", "commentPostId"),
        "commentPostId: ID"
    );
    assert_eq!(
        field(&out.graph, "UpdateCommentInput", "commentPostId"),
        "commentPostId: ID"
    );
}

#[test]
fn list_connection_is_rewritten() {
    let out = transform(BLOG_POST_COMMENT);

    assert_eq!(
        field(&out.graph, "Blog", "posts"),
        "posts(filter: ModelPostFilterInput, sortDirection: ModelSortDirection, limit: Int, nextToken: String): ModelPostConnection"
    );
    assert_eq!(
        field(&out.graph, "Post", "comments"),
        "comments(filter: ModelCommentFilterInput, sortDirection: ModelSortDirection, limit: Int, nextToken: String): ModelCommentConnection"
    );
    assert_eq!(field(&out.graph, "Post", "blog"), "blog: Blog");

    // List connections add no foreign key to the owner.
    for input in ["CreateBlogInput", "UpdateBlogInput"] {
        assert!(fields(&out.graph, input)
            .iter()
            .all(|field| !field.ends_with("Id: ID")));
    }
}

#[test]
fn referenced_objects_are_backfilled() {
    let out = transform(BLOG_POST_COMMENT);

    assert_eq!(
        fields(&out.graph, "BlogInput"),
        [
            "id: ID!",
            "name: String!",
            "_version: Int!",
            "_deleted: Boolean",
            "_lastChangedAt: AWSTimestamp!",
        ]
    );
    assert_eq!(
        fields(&out.graph, "PostInput"),
        [
            "id: ID!",
            "title: String!",
            "blog: BlogInput",
            "_version: Int!",
            "_deleted: Boolean",
            "_lastChangedAt: AWSTimestamp!",
        ]
    );

    let comment = out.context.model("Comment").unwrap();
    assert_eq!(
        comment.context.missing_types().collect::<Vec<_>>(),
        ["Post", "Blog"]
    );
}

#[test]
fn connections_are_recorded() {
    let out = transform(BLOG_POST_COMMENT);

    let recorded: Vec<_> = out
        .context
        .connections
        .iter()
        .map(|c| {
            (
                format!("{}.{}", c.model_type, c.field.name),
                c.target_type.as_str(),
                c.cardinality.is_many(),
                c.name.as_str(),
            )
        })
        .collect();

    assert_eq!(
        recorded,
        [
            ("Blog.posts".to_string(), "Post", true, "BlogPosts"),
            ("Post.blog".to_string(), "Blog", false, "BlogPosts"),
            ("Post.comments".to_string(), "Comment", true, "PostComments"),
            ("Comment.post".to_string(), "Post", false, "PostComments"),
        ]
    );
}

#[test]
fn resolvers_and_indexes() {
    let out = assert_ok!(gqlmodel::transform(BLOG_POST_COMMENT));

    assert_eq!(out.resolvers.len(), 3 * 6 + 4);

    let bound: Vec<_> = out
        .resolvers
        .iter()
        .map(|resolver| (resolver.type_name.as_str(), resolver.field_name.as_str()))
        .collect();
    assert_unique!(bound);

    let posts = assert_some!(out.resolver("Blog", "posts"));
    assert_eq!(posts.data_source, "Post");
    assert!(posts.templates.request.contains(r#""index": "gsi-BlogPosts""#));

    let post = assert_some!(out.resolver("Comment", "post"));
    assert_eq!(post.data_source, "Post");
    assert!(post.templates.request.contains("$ctx.source.commentPostId"));

    let indexes: Vec<_> = out
        .indexes
        .iter()
        .map(|index| (index.model.as_str(), index.name.as_str(), index.partition_key.as_str()))
        .collect();
    assert_eq!(
        indexes,
        [
            ("Post", "gsi-BlogPosts", "postBlogId"),
            ("Comment", "gsi-PostComments", "commentPostId"),
        ]
    );
}
