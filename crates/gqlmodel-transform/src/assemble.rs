use crate::visit::{add_model_input_types, Visit};
use crate::{backfill, definitions, foreign_key, sdl, subscribe, validate, Result};
use gqlmodel_core::schema::TypeGraph;
use gqlmodel_core::TransformContext;

/// The result of transforming a schema document.
#[derive(Debug)]
pub struct Transformed {
    /// The transformed schema, printed as SDL
    pub schema: String,

    /// The transformed schema, before printing
    pub graph: TypeGraph,

    /// Models and connections found in the document
    pub context: TransformContext,
}

/// Transforms an SDL document using `@model` and `@connection` into the
/// expanded schema exposing generated operations for every model.
///
/// Phases run in a fixed order, each depending on the previous one:
///
/// 1. merge the directive definitions ahead of `source` and validate
/// 2. visit `@model` types, then `@connection` fields
/// 3. add every model's inputs and backfill the inputs they reference
/// 4. add foreign keys for singular connections
/// 5. strip all but the built-in directives, prune helper types and verify
///    every reference
/// 6. annotate subscription fields and print
///
/// Any error aborts the transform.
#[tracing::instrument(level = "debug", skip_all)]
pub fn transform_schema(source: &str) -> Result<Transformed> {
    let mut graph = TypeGraph::new();
    for base in definitions::BASE {
        sdl::load(&mut graph, base)?;
    }
    sdl::load(&mut graph, source)?;
    validate(&graph)?;

    let mut cx = TransformContext::new();
    Visit::new(&mut graph, &mut cx).run()?;
    tracing::debug!(
        models = cx.models.len(),
        connections = cx.connections.len(),
        "visited directives"
    );

    let mut backfilled = 0;
    for model in &mut cx.models {
        add_model_input_types(&mut graph, &mut model.context)?;
        backfilled += backfill(&mut graph, &mut model.context)?;
    }
    tracing::debug!(backfilled, "added model input types");

    let foreign_keys = foreign_key::add_foreign_keys(&mut graph, &cx)?;
    tracing::debug!(foreign_keys, "added foreign keys");

    graph.retain_applied_directives(|directive| {
        definitions::BUILTIN_DIRECTIVES.contains(&directive.name.as_str())
    });
    graph.clear_directives();

    let pruned = definitions::PRUNED_TYPES
        .iter()
        .filter_map(|name| graph.remove(name))
        .count();
    tracing::debug!(pruned, "pruned helper types");

    graph.verify()?;

    subscribe::annotate_subscriptions(&mut graph, &cx);

    Ok(Transformed {
        schema: sdl::print(&graph),
        graph,
        context: cx,
    })
}
