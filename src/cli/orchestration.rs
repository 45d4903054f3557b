//! Main workflow orchestration logic
//!
//! Merges command line arguments over the loaded configuration, runs the
//! resolver and records the result for CI. Kept separate from clap so the
//! workflow can be called programmatically.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{Config, OutputFormat};
use crate::resolver::{Resolver, ResolverInput, ResolverOutput};
use crate::ui;

/// Arguments for the resolve workflow
///
/// Mirrors the CLI Args. `None` means "use the configured value".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveWorkflowArgs {
    /// Current version, e.g. "v1.2.3"
    pub version: String,

    /// Minimum version floor
    pub minimum_version: Option<String>,

    /// Disable tolerant coercion of partial versions
    pub strict: Option<bool>,

    /// Also emit `current` / `v_current`
    pub include_current: Option<bool>,

    /// Rendering format for stdout
    pub format: Option<OutputFormat>,

    /// File to append `key=value` lines to (e.g. `$GITHUB_OUTPUT`)
    pub github_output: Option<PathBuf>,
}

/// Result of a successful resolve workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The resolved versions
    pub output: ResolverOutput,

    /// Format the caller should print with
    pub format: OutputFormat,

    /// Output file written, if any
    pub github_output: Option<PathBuf>,
}

/// Main resolve workflow
///
/// 1. Merge arguments over configuration
/// 2. Resolve the next versions
/// 3. Append them to the CI output file when one is given
pub fn run_resolve_workflow(args: ResolveWorkflowArgs, config: Config) -> Result<WorkflowResult> {
    let prefixes = config
        .resolver
        .version_prefixes()
        .context("Invalid prefix configuration")?;
    let resolver = Resolver::new(prefixes);

    let input = ResolverInput::new(
        args.version,
        args.minimum_version
            .filter(|minimum| !minimum.trim().is_empty())
            .unwrap_or(config.resolver.minimum_version),
        args.strict.unwrap_or(config.resolver.strict),
    );
    debug!(?input, "resolving next versions");

    let include_current = args
        .include_current
        .unwrap_or(config.output.include_current);
    let output = resolver
        .resolve_input(&input)
        .with_context(|| format!("Failed to resolve next versions for '{}'", input.version))?
        .with_current(include_current);

    if let Some(path) = args.github_output.as_deref() {
        ui::append_github_output(path, &output)?;
        info!(path = %path.display(), "wrote resolved versions to output file");
    }

    Ok(WorkflowResult {
        output,
        format: args.format.unwrap_or(config.output.format),
        github_output: args.github_output,
    })
}
