//! Loading the input document.

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use pathtree::{PathTree, WritePolicy};

/// Reads a JSON object from `source` (`-` for stdin) into a tree.
pub fn load_tree(source: &Path, policy: WritePolicy) -> pathtree::Result<PathTree> {
    let text = if source == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(source)?
    };

    let tree = PathTree::from_json(&text)?.with_policy(policy);
    tracing::debug!(
        source = %source.display(),
        keys = tree.len(),
        %policy,
        "Loaded document"
    );
    Ok(tree)
}

/// Interprets a command-line value as JSON, falling back to plain text.
pub fn parse_value(raw: &str) -> pathtree::Value {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => json.into(),
        Err(_) => pathtree::Value::Text(raw.to_string()),
    }
}
