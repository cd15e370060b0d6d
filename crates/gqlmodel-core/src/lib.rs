mod error;
pub use error::{Error, IntoError};

pub mod context;
pub use context::TransformContext;

pub mod names;
pub use names::ModelNames;

pub mod schema;
pub use schema::TypeGraph;

mod template;
pub use template::MappingTemplatePair;

/// A Result type alias that uses gqlmodel's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
