//! User interface module - output emission and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing rendered output to stdout and CI output files

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{display_error, display_status, format_output};

use crate::config::OutputFormat;
use crate::resolver::ResolverOutput;

/// Prints rendered output to stdout.
pub fn print_output(output: &ResolverOutput, format: OutputFormat) -> Result<()> {
    let rendered = format_output(output, format).context("Failed to render output")?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Appends `key=value` lines to a CI output file such as `$GITHUB_OUTPUT`.
///
/// The file is created when missing; existing content is preserved.
///
/// # Arguments
/// * `path` - Output file path
/// * `output` - Resolved versions to record
pub fn append_github_output(path: &Path, output: &ResolverOutput) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open output file '{}'", path.display()))?;

    file.write_all(output.to_env_lines().as_bytes())
        .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_append_github_output_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("github_output");
        let output = resolve("v1.0.0", "v0.0.0", true).unwrap();

        append_github_output(&path, &output).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("patch=1.0.1\n"));
        assert!(content.contains("v_patch=v1.0.1\n"));
    }

    #[test]
    fn test_append_github_output_preserves_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("github_output");
        fs::write(&path, "existing=1\n").unwrap();
        let output = resolve("2.0.0", "0.0.0", true).unwrap();

        append_github_output(&path, &output).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing=1\nmajor=3.0.0\n"));
    }

    #[test]
    fn test_append_github_output_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("github_output");
        let output = resolve("2.0.0", "0.0.0", true).unwrap();

        assert!(append_github_output(&path, &output).is_err());
    }
}
