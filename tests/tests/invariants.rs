use gqlmodel_core::context::{ModelDirectiveArgs, ModelRecord};
use gqlmodel_core::{ModelNames, TypeGraph};
use gqlmodel_transform::{backfill, definitions, sdl, validate};
use pretty_assertions::assert_eq;
use tests::{assert_empty, assert_ok, fields, transform, BLOG, BLOG_POST_COMMENT};

#[test]
fn filter_has_one_field_per_scalar_plus_id_and_combinators() {
    let out = transform(
        "
        type Reading @model {
            id: ID!
            sensor: String!
            value: Float
            count: Int
            valid: Boolean
            tag: ID
        }
        ",
    );

    let filter = fields(&out.graph, "ModelReadingFilterInput");
    assert_eq!(filter.len(), 5 + 1 + 3);
    assert_eq!(
        filter,
        [
            "sensor: ModelStringInput",
            "value: ModelFloatInput",
            "count: ModelIntInput",
            "valid: ModelBooleanInput",
            "tag: ModelIDInput",
            "id: ModelIDInput",
            "and: [ModelReadingFilterInput]",
            "or: [ModelReadingFilterInput]",
            "not: ModelReadingFilterInput",
        ]
    );

    // Conditions are filters without `id`.
    assert_eq!(fields(&out.graph, "ModelReadingConditionInput").len(), 5 + 3);
}

#[test]
fn foreign_keys_only_for_singular_connections() {
    let out = transform(BLOG_POST_COMMENT);

    let foreign_keys = |input: &str| {
        fields(&out.graph, input)
            .into_iter()
            .filter(|field| field.ends_with("Id: ID"))
            .collect::<Vec<_>>()
    };

    assert_empty!(foreign_keys("CreateBlogInput"));
    assert_empty!(foreign_keys("UpdateBlogInput"));
    assert_eq!(foreign_keys("CreatePostInput"), ["postBlogId: ID"]);
    assert_eq!(foreign_keys("UpdatePostInput"), ["postBlogId: ID"]);
    assert_eq!(foreign_keys("CreateCommentInput"), ["commentPostId: ID"]);
    assert_eq!(foreign_keys("UpdateCommentInput"), ["commentPostId: ID"]);
}

#[test]
fn repeated_connection_keeps_one_foreign_key() {
    let out = transform(
        "
        type Author @model { id: ID! }
        type Book @model {
            id: ID!
            writer: Author @connection
            editor: Author @connection
        }
        ",
    );

    assert_eq!(
        fields(&out.graph, "CreateBookInput"),
        [
            "writer: AuthorInput",
            "editor: AuthorInput",
            "id: ID",
            "_version: Int",
            "bookAuthorId: ID",
        ]
    );
}

#[test]
fn backfill_is_idempotent() {
    let mut out = transform(BLOG_POST_COMMENT);
    let types_before = out.graph.len();

    for model in &mut out.context.models {
        assert!(model.context.is_drained());
        assert_eq!(assert_ok!(backfill(&mut out.graph, &mut model.context)), 0);

        let mut requeued = ModelRecord::new(&model.names.main, ModelDirectiveArgs::default()).context;
        for name in model.context.missing_types() {
            requeued.queue_missing(name);
        }
        assert_eq!(assert_ok!(backfill(&mut out.graph, &mut requeued)), 0);
    }

    assert_eq!(out.graph.len(), types_before);
}

#[test]
fn names_agree_across_passes() {
    let out = transform(BLOG_POST_COMMENT);

    for model in &out.context.models {
        assert_eq!(model.names, ModelNames::derive(&model.names.main));
        assert_eq!(model.context.names, model.names);
    }

    for connection in &out.context.connections {
        let owner = ModelNames::derive(&connection.model_type);
        assert_eq!(connection.create_input_type_name, owner.create_input);
        assert_eq!(connection.update_input_type_name, owner.update_input);
    }
}

#[test]
fn output_is_deterministic() {
    assert_eq!(
        transform(BLOG_POST_COMMENT).schema,
        transform(BLOG_POST_COMMENT).schema
    );
}

#[test]
fn every_reference_resolves() {
    for source in [BLOG, BLOG_POST_COMMENT] {
        let out = transform(source);

        assert_empty!(out.graph.unresolved_references());
        assert_ok!(out.graph.verify());
    }
}

#[test]
fn printed_schema_is_valid() {
    for source in [BLOG, BLOG_POST_COMMENT] {
        let out = transform(source);

        let mut graph = TypeGraph::new();
        assert_ok!(sdl::load(&mut graph, definitions::AWS_SUBSCRIBE));
        assert_ok!(sdl::load(&mut graph, &out.schema));
        assert_ok!(validate(&graph));

        // Everything except the directive definition survives printing.
        assert_eq!(graph.len(), out.graph.len());
    }
}
