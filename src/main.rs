// edgeguard: security header policy for edge viewer responses
// main entry point with minimal bootstrap logic

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use edgeguard::{
    cli::{apply_event, log_level, read_event, render_policy},
    config::{load_configuration, Cli, Command},
    server::start_server,
};

#[tokio::main]
async fn main() -> Result<()> {
    // parse command line arguments
    let cli = Cli::parse();

    // initialize logging based on verbosity flags
    init_logging(cli.verbose, cli.quiet)?;

    match &cli.command {
        Command::Apply { event, pretty } => {
            let raw = read_event(event.as_deref(), io::stdin())?;
            println!("{}", apply_event(&raw, *pretty)?);
            Ok(())
        }
        Command::Policy { json } => {
            println!("{}", render_policy(*json)?);
            Ok(())
        }
        Command::Serve(_) => {
            // load and merge configuration from file, env and cli
            let config = load_configuration(&cli)?;
            start_server(config).await
        }
    }
}

/// initialize structured logging with tracing
fn init_logging(verbose_count: u8, quiet_count: u8) -> Result<()> {
    let level = log_level(verbose_count, quiet_count);

    // stdout carries command output, logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    debug!("logging initialized at level: {}", level);
    Ok(())
}
