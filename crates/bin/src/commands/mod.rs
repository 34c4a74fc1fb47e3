//! Subcommand implementations.

pub mod filter;
pub mod get;
pub mod set;
