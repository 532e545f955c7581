use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a plain-text file of extracted statement lines, one per line.
///
/// This is the host's job: the analysis pipeline itself never opens files
/// and only sees the line sequence.
pub fn read_statement_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(&path).with_context(|| {
        format!(
            "Failed to read statement text from {}",
            path.as_ref().display()
        )
    })?;

    Ok(content.lines().map(str::to_string).collect())
}
