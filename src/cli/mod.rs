//! CLI module
//!
//! Command-line interface for mapping declared types.
//!
//! # Commands
//!
//! - `map` - Print the mapping document for one or more types
//! - `types` - List declared types
//! - `validate` - Load definitions and map every type

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
