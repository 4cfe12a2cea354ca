mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{summary, tables};
use tracing::Level;

/// Route log output to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Tables(args) => tables::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
