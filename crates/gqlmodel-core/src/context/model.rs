use super::ModelDirectiveArgs;
use crate::ModelNames;
use indexmap::IndexSet;

/// A type annotated with `@model`.
#[derive(Debug, Clone)]
pub struct ModelRecord {
    pub names: ModelNames,
    pub context: ModelContext,
    pub args: ModelDirectiveArgs,
}

/// Per-model synthesis state.
///
/// `missing_types` is a work queue of object types that need a mirroring
/// `<Object>Input` type. Names are only ever appended, and the queue is
/// drained front to back by the backfill pass, including names appended while
/// draining.
#[derive(Debug, Clone)]
pub struct ModelContext {
    /// Name of the model type in the type graph
    pub type_name: String,

    pub names: ModelNames,

    missing_types: IndexSet<String>,

    /// Index of the next queued name the backfill pass has not processed
    cursor: usize,
}

impl ModelRecord {
    pub fn new(type_name: &str, args: ModelDirectiveArgs) -> ModelRecord {
        let names = ModelNames::derive(type_name);

        ModelRecord {
            context: ModelContext {
                type_name: type_name.to_string(),
                names: names.clone(),
                missing_types: IndexSet::new(),
                cursor: 0,
            },
            names,
            args,
        }
    }
}

impl ModelContext {
    /// Queues `name` unless it has been queued before. Returns `true` if the
    /// name is new.
    pub fn queue_missing(&mut self, name: impl Into<String>) -> bool {
        self.missing_types.insert(name.into())
    }

    /// Takes the next queued name, if any.
    pub fn next_missing(&mut self) -> Option<String> {
        let name = self.missing_types.get_index(self.cursor)?.clone();
        self.cursor += 1;
        Some(name)
    }

    /// Returns `true` once every queued name has been taken.
    pub fn is_drained(&self) -> bool {
        self.cursor == self.missing_types.len()
    }

    /// Every name queued so far, in queue order.
    pub fn missing_types(&self) -> impl Iterator<Item = &str> + '_ {
        self.missing_types.iter().map(String::as_str)
    }
}
