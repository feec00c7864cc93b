// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hashbang: shebang-aware executable lookup and command normalization.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Action,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Locate an executable on PATH and print its absolute path.
    Which {
        /// Bare executable name to search for, or a path to verify.
        name: String,
    },
    /// Print the interpreter tokens from a script's shebang line.
    Shebang {
        /// File to probe. Prints nothing when no usable shebang is found.
        file: PathBuf,
    },
    /// Rewrite a command line into a directly spawnable invocation.
    Norm {
        /// The command line, quoted as a single argument (e.g. "script.py --fast").
        command_line: String,
    },
}
