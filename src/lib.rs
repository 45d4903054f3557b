pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod ui;

pub use error::{NextSemVersError, Result};
pub use resolver::{resolve, OutputKey, Resolver, ResolverInput, ResolverOutput};
