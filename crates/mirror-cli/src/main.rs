mod cli;
mod commands;
mod interactive;
mod logging;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use commands::RunOptions;
use mirror_core::sync::MirrorMode;

fn main() -> anyhow::Result<()> {
    // Set up Ctrl+C handler for graceful interruption
    ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    })
    .context("Failed to set Ctrl+C handler")?;

    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to initialize logging")?;

    let mode = if cli.clean {
        MirrorMode::Clean
    } else {
        MirrorMode::Copy
    };
    let options = RunOptions::from_cli(&cli);

    commands::Mirror::execute(mode, &options)
        .with_context(|| format!("Failed to execute {mode} command"))?;

    Ok(())
}
