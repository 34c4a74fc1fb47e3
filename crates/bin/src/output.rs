//! Output formatting helpers for human-readable and JSON output.

use pathtree::{PathTree, Value};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a single value.
///
/// Human output uses the value's `Display`, so text prints without quotes.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Human => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print a whole document. Documents are always JSON so they can be piped
/// back into another invocation.
pub fn print_document(tree: &PathTree) -> pathtree::Result<()> {
    // serde_json::Value orders object keys, giving stable output
    let json = serde_json::Value::from(Value::from(tree.clone()));
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
