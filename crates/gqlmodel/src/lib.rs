mod output;
pub use output::Output;

pub use gqlmodel_core::{
    context, err, names, schema, Error, IntoError, MappingTemplatePair, ModelNames, Result,
    TransformContext,
};
pub use gqlmodel_templates::{Config, Resolver, SecondaryIndex};
pub use gqlmodel_transform::sdl;

/// Transforms `source` with the default [`Config`].
pub fn transform(source: &str) -> Result<Output> {
    transform_with(source, &Config::default())
}

/// Transforms `source`, producing the expanded schema text and the resolvers
/// serving every generated field.
#[tracing::instrument(level = "debug", skip_all)]
pub fn transform_with(source: &str, config: &Config) -> Result<Output> {
    let transformed = gqlmodel_transform::transform_schema(source)?;

    let artifacts = gqlmodel_templates::Generator::new(config.clone())
        .generate(&transformed.context)
        .map_err(|err| err.context(err!("generating resolvers")))?;

    tracing::debug!(
        models = transformed.context.models.len(),
        resolvers = artifacts.resolvers.len(),
        "transformed schema"
    );

    Ok(Output {
        schema: transformed.schema,
        context: transformed.context,
        resolvers: artifacts.resolvers,
        indexes: artifacts.indexes,
    })
}
