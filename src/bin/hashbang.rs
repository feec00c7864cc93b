// src/bin/hashbang.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use hashbang::cli::{Cli, args::Action, handlers};

/// The main entry point of the `hashbang` binary.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    match cli.command {
        Action::Which { name } => handlers::which::handle(&name),
        Action::Shebang { file } => handlers::shebang::handle(&file),
        Action::Norm { command_line } => handlers::norm::handle(&command_line),
    }
}
