/*!
 * Command-line interface for git-flatten
 */

use std::io;
use std::sync::Arc;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use git_flatten::config::{Args, Config};
use git_flatten::flattener::Flattener;
use git_flatten::report::{ReportFormat, Reporter};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();
    init_tracing(args.verbose);

    // Create and validate configuration
    let config = Config::from_args(args);
    config.validate()?;

    // Progress goes to stderr and hides itself when that is not a terminal
    let progress = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} {pos}/{len} {wide_msg:.dim}")
    {
        progress.set_style(style);
    }

    let mut flattener = Flattener::new(config.clone(), Arc::new(progress));
    let written = flattener.flatten()?;

    if written && config.summary {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        reporter.print_report(
            &config.output_path.display().to_string(),
            &flattener.get_statistics(),
        );
    }

    Ok(())
}
