//! CLI argument definitions for the pathtree binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use pathtree::WritePolicy;

use crate::output::OutputFormat;

/// Write policy selection, mirroring [`WritePolicy`]
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Policy {
    /// Refuse to write through a value that is not a map
    Strict,
    /// Replace a blocking value with an empty map
    Overwrite,
}

impl From<Policy> for WritePolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => WritePolicy::Strict,
            Policy::Overwrite => WritePolicy::Overwrite,
        }
    }
}

/// Output format selection
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    /// Plain text values
    Human,
    /// Pretty-printed JSON
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Human => OutputFormat::Human,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Read, write and filter JSON documents with dotted paths
#[derive(Parser, Debug)]
#[command(name = "pathtree")]
#[command(about = "pathtree: dot-path access to nested JSON documents")]
#[command(version)]
pub struct Cli {
    /// JSON document to operate on, `-` for stdin
    #[arg(short, long, default_value = "-", env = "PATHTREE_INPUT", global = true)]
    pub input: PathBuf,

    /// How writes treat a value that sits where a map is needed
    #[arg(short, long, default_value = "strict", env = "PATHTREE_POLICY", global = true)]
    pub policy: Policy,

    /// Output format for single values
    #[arg(short, long, default_value = "human", env = "PATHTREE_FORMAT", global = true)]
    pub format: Format,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value stored at a path
    Get(GetArgs),
    /// Set a value at a path and print the resulting document
    Set(SetArgs),
    /// Print the document reduced to the given paths
    Filter(FilterArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,
}

/// Arguments for the set command
#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Dotted path, e.g. `user.profile.name`
    pub path: String,

    /// Value to store. Parsed as JSON, or stored as text if it is not valid JSON.
    pub value: String,
}

/// Arguments for the filter command
#[derive(clap::Args, Debug)]
pub struct FilterArgs {
    /// Dotted paths to keep. Paths that do not exist are ignored.
    #[arg(required = true)]
    pub paths: Vec<String>,
}
