// sentinel/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug sentinel validate ... to see per-column verdicts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            project_dir,
            train,
            test,
            threshold,
        } => commands::validate::execute(project_dir, train, test, threshold),
        Commands::Report { path } => commands::report::execute(path),
    }
}
