use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_semvers::cli::{run_resolve_workflow, ResolveWorkflowArgs};
use next_semvers::config::{self, OutputFormat};
use next_semvers::ui;

#[derive(clap::Parser)]
#[command(
    name = "next-semvers",
    version,
    about = "Compute the next major, minor and patch versions for a release"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        env = "INPUT_VERSION",
        help = "Current version, e.g. v1.2.3 or release-1.2"
    )]
    current_version: String,

    #[arg(
        short,
        long = "min-version",
        env = "INPUT_MIN_VERSION",
        help = "Minimum version the results may not go below"
    )]
    min_version: Option<String>,

    #[arg(
        short,
        long,
        env = "INPUT_STRICT",
        help = "Reject partial versions instead of completing them"
    )]
    strict: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Also emit current and v_current")]
    with_current: bool,

    #[arg(long, help = "Output format: env or json")]
    format: Option<OutputFormat>,

    #[arg(
        long,
        env = "GITHUB_OUTPUT",
        help = "Append key=value lines to this file"
    )]
    github_output: Option<PathBuf>,

    #[arg(short, long, help = "Log resolution steps to stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config =
        config::load_config(args.config.as_deref()).context("Error loading configuration")?;

    let workflow_args = ResolveWorkflowArgs {
        version: args.current_version,
        minimum_version: args.min_version,
        strict: args.strict.then_some(true),
        include_current: args.with_current.then_some(true),
        format: args.format,
        github_output: args.github_output.filter(|p| !p.as_os_str().is_empty()),
    };

    let result = run_resolve_workflow(workflow_args, config)?;

    if let Some(path) = &result.github_output {
        ui::display_status(&format!("Wrote outputs to {}", path.display()));
    }

    ui::print_output(&result.output, result.format)
}
