//! Get command - prints the value stored at a path.

use std::process::ExitCode;

use pathtree::PathTree;

use crate::cli::GetArgs;
use crate::output::{OutputFormat, print_value};

/// Run the get command. A missing path is reported on stderr with a
/// failing exit status.
pub fn run(
    tree: &PathTree,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match tree.require(&args.path) {
        Ok(value) => {
            print_value(value, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if err.is_not_found_error() => {
            tracing::debug!(path = %args.path, "Path not found");
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}
