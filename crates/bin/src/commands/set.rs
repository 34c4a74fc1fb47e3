//! Set command - writes a value and prints the updated document.

use std::process::ExitCode;

use pathtree::PathTree;

use crate::cli::SetArgs;
use crate::input::parse_value;
use crate::output::print_document;

/// Run the set command. A write the tree's policy refuses is reported on
/// stderr with a failing exit status.
pub fn run(mut tree: PathTree, args: &SetArgs) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let value = parse_value(&args.value);
    let previous = match tree.set(&args.path, value) {
        Ok(previous) => previous,
        Err(pathtree::Error::Tree(err)) => {
            tracing::debug!(path = %args.path, policy = %tree.policy(), "Write rejected");
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        path = %args.path,
        replaced = previous.is_some(),
        "Value set"
    );

    print_document(&tree)?;
    Ok(ExitCode::SUCCESS)
}
