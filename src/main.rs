//! CLI entry point for the tiling count report

use clap::Parser;
use strip_tilings::io::cli::{Cli, ReportRunner};
use strip_tilings::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

// Reports are the program's output
#[allow(clippy::print_stdout)]
fn main() -> strip_tilings::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut runner = ReportRunner::new(cli)?;
    let answer = runner.run(|report| println!("{report}"))?;
    println!("{answer}");
    Ok(())
}
