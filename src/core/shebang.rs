// src/core/shebang.rs

use crate::{
    constants::{ENV_LAUNCHER, SHEBANG_MARKER, SHEBANG_READ_LIMIT},
    system::platform::Platform,
};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extracts the interpreter invocation from the shebang line of `prefix`,
/// the leading bytes of a file.
///
/// Returns the whitespace-delimited tokens after the `#!` marker, up to the
/// first newline. A leading `/usr/bin/env` launcher is dropped, so
/// `#!/usr/bin/env python` yields just `python` for the resolver to locate.
/// Anything that does not look like a usable shebang (a missing marker,
/// undecodable garbage, a blank line) yields an empty vector, never an
/// error.
pub fn parse_bytes(prefix: &[u8]) -> Vec<String> {
    let Some(rest) = prefix.strip_prefix(SHEBANG_MARKER) else {
        return Vec::new();
    };
    let line = match rest.iter().position(|&b| b == b'\n') {
        Some(end) => rest.get(..end).unwrap_or(rest),
        None => rest,
    };
    let Ok(line) = std::str::from_utf8(line) else {
        return Vec::new();
    };
    // Interpreter lines are plain ASCII in practice. Control garbage after
    // the marker (e.g. "#!\x00\x00") means a binary file, not a script,
    // even when it happens to decode.
    if line.chars().any(|c| !is_printable(c)) {
        return Vec::new();
    }

    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if tokens.first().is_some_and(|first| first == ENV_LAUNCHER) {
        tokens.remove(0);
    }
    tokens
}

fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\r' | '\x0b' | '\x0c')
}

/// Reads the shebang of the file at `path`.
///
/// At most [`SHEBANG_READ_LIMIT`] leading bytes are read; the handle is
/// released before parsing. A path that does not exist, cannot be opened,
/// or is not executable by the caller yields an empty vector: callers treat
/// "no shebang" and "can't shebang" identically, so neither outcome is
/// surfaced as an I/O fault.
pub fn parse_file(path: &Path, platform: &Platform) -> Vec<String> {
    if !platform.is_executable(path) {
        return Vec::new();
    }
    let Ok(file) = File::open(path) else {
        return Vec::new();
    };
    let mut prefix = Vec::with_capacity(SHEBANG_READ_LIMIT);
    if file.take(SHEBANG_READ_LIMIT as u64).read_to_end(&mut prefix).is_err() {
        return Vec::new();
    }
    parse_bytes(&prefix)
}
