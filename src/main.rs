//! repo-tidier — report sizes and file types across a repository.
//!
//! Thin binary entry point. All logic lives in the `repo-tidier-core`
//! and `repo-tidier-cli` crates.
use clap::Parser;
use repo_tidier_cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so tables and JSON on stdout stay clean.
    // RUST_LOG wins over --verbose when set.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("repo-tidier starting");

    repo_tidier_cli::run(&cli)
}
