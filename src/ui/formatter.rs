//! Pure formatting functions for UI output.
//!
//! Rendering of resolver output is kept free of I/O so it can be tested
//! directly; the `display_*` helpers only print.

use console::style;

use crate::config::OutputFormat;
use crate::resolver::ResolverOutput;

/// Render resolver output in the requested format.
///
/// `Env` yields `key=value` lines; `Json` yields a pretty-printed object with
/// the same keys in the same order.
pub fn format_output(output: &ResolverOutput, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Env => Ok(output.to_env_lines()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(output)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a status message with yellow arrow.
///
/// Goes to stderr so stdout stays machine readable.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}
