// src/cli/handlers/shebang.rs

use crate::{core::shebang, system::platform::Platform};
use anyhow::Result;
use std::path::Path;

/// Entry point for the `shebang` command: print the parsed interpreter
/// tokens, one per line. A file with no usable shebang prints nothing,
/// mirroring the library's silent-miss contract.
pub fn handle(file: &Path) -> Result<()> {
    for token in shebang::parse_file(file, &Platform::host()) {
        println!("{}", token);
    }
    Ok(())
}
