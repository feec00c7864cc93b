// src/cli/handlers/norm.rs

use crate::core::resolver::Resolver;
use anyhow::{Result, anyhow};

/// Entry point for the `norm` command: tokenize the quoted command line,
/// normalize it, and print the resulting argv one element per line.
pub fn handle(command_line: &str) -> Result<()> {
    let parts = shlex::split(command_line)
        .ok_or_else(|| anyhow!("Command could not be parsed: {}", command_line))?;
    let resolver = Resolver::from_process();
    for part in resolver.normalize_command(&parts)? {
        println!("{}", part);
    }
    Ok(())
}
