use crate::{connection, crud, Config, Resolver, SecondaryIndex};
use gqlmodel_core::{context::ConnectionRecord, Error, Result, TransformContext};
use serde::Serialize;

/// Produces resolver bindings for a transformed schema.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: Config,
}

/// Everything the provisioning layer needs besides the schema text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifacts {
    /// Six per model, followed by one per connection field
    pub resolvers: Vec<Resolver>,

    /// One per distinct singular connection
    pub indexes: Vec<SecondaryIndex>,
}

impl Generator {
    pub fn new(config: Config) -> Generator {
        Generator { config }
    }

    /// Generates templates for every model and connection recorded in `cx`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn generate(&self, cx: &TransformContext) -> Result<Artifacts> {
        let mut artifacts = Artifacts::default();

        for model in &cx.models {
            let data_source = data_source_name(&model.names.main);

            for op in crud::operations(&self.config, &model.names) {
                artifacts.resolvers.push(Resolver::new(
                    op.type_name,
                    op.field_name,
                    data_source,
                    op.templates,
                ));
            }
        }

        for record in &cx.connections {
            let target = cx.model(&record.target_type).ok_or_else(|| {
                Error::type_resolution(format!(
                    "connection target `{}` of `{}.{}` is not a model",
                    record.target_type, record.model_type, record.field.name
                ))
            })?;

            let templates = if record.cardinality.is_one() {
                let index = self.secondary_index(record);
                if !artifacts.indexes.contains(&index) {
                    artifacts.indexes.push(index);
                }
                connection::item(&self.config, record)
            } else {
                connection::list(&self.config, record)
            };

            artifacts.resolvers.push(Resolver::new(
                &record.model_type,
                &record.field.name,
                data_source_name(&target.names.main),
                templates,
            ));
        }

        tracing::debug!(
            resolvers = artifacts.resolvers.len(),
            indexes = artifacts.indexes.len(),
            "generated resolvers"
        );

        Ok(artifacts)
    }

    fn secondary_index(&self, record: &ConnectionRecord) -> SecondaryIndex {
        SecondaryIndex {
            model: record.model_type.clone(),
            name: self.config.index_name(&record.name),
            partition_key: record.id_field_name.clone(),
        }
    }
}

impl Artifacts {
    /// Finds the resolver serving `type_name.field_name`.
    pub fn resolver(&self, type_name: &str, field_name: &str) -> Option<&Resolver> {
        self.resolvers
            .iter()
            .find(|resolver| resolver.resolves(type_name, field_name))
    }
}

/// Each model is stored in its own table, exposed as a data source named
/// after the model.
fn data_source_name(model: &str) -> &str {
    model
}
