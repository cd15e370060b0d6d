mod assemble;
pub use assemble::{transform_schema, Transformed};

mod backfill;
pub use backfill::backfill;

pub mod common;

pub mod definitions;

mod foreign_key;

mod input;

pub mod sdl;

mod subscribe;

mod validate;
pub use validate::validate;

mod visit;

use gqlmodel_core::{Error, Result};
