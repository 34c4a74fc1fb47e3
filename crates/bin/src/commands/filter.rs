//! Filter command - prints the document reduced to the requested paths.

use std::process::ExitCode;

use pathtree::PathTree;

use crate::cli::FilterArgs;
use crate::output::print_document;

/// Run the filter command
pub fn run(tree: &PathTree, args: &FilterArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let filtered = tree.filter(&args.paths);

    let missing = args.paths.iter().filter(|p| !tree.contains(*p)).count();
    if missing > 0 {
        tracing::info!(missing, requested = args.paths.len(), "Some paths were not found");
    }

    print_document(&filtered)?;
    Ok(ExitCode::SUCCESS)
}
