//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Schema mapping CLI
#[derive(Parser, Debug)]
#[command(name = "automap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Type definition file (YAML)
    #[arg(short, long, global = true)]
    pub types: Option<PathBuf>,

    /// Mapping settings file (YAML)
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the mapping document for the given types
    Map {
        /// Type names to map
        #[arg(required = true)]
        type_names: Vec<String>,

        /// Maximum repeat count for recursive types (defaults to settings)
        #[arg(long)]
        max_repeat: Option<usize>,

        /// Override file (YAML: type name -> field id -> node)
        #[arg(short, long)]
        overrides: Option<PathBuf>,
    },

    /// List declared types
    #[command(name = "types")]
    ListTypes,

    /// Validate definitions and settings by mapping every type
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
