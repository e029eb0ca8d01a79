//! Sealant Calculator - joint sealant volume and cartridge estimation
//!
//! A CLI tool that computes how much sealant a joint needs and how many
//! cartridges to buy.

mod cli;
mod commands;
mod logging;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
