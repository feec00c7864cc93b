// src/cli/handlers/which.rs

use crate::core::resolver::Resolver;
use anyhow::Result;

/// Entry point for the `which` command: hard-resolve a name against the
/// process environment and print the winning absolute path.
pub fn handle(name: &str) -> Result<()> {
    let resolver = Resolver::from_process();
    let path = resolver.normalize_executable(name)?;
    println!("{}", path.display());
    Ok(())
}
