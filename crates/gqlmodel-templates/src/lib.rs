mod config;
pub use config::Config;

mod connection;

mod crud;

mod generator;
pub use generator::{Artifacts, Generator};

mod render;

mod resolver;
pub use resolver::{Resolver, SecondaryIndex};
