// src/constants.rs

/// The two-byte marker that opens a shebang line.
pub const SHEBANG_MARKER: &[u8] = b"#!";

/// Maximum number of leading bytes read when probing a file for a shebang.
/// Only the first line matters, so the probe stays cheap and safe on
/// arbitrary binary files.
pub const SHEBANG_READ_LIMIT: usize = 512;

/// The conventional launcher whose token is dropped from a parsed shebang
/// line, leaving the bare interpreter name for PATH resolution.
pub const ENV_LAUNCHER: &str = "/usr/bin/env";

/// Environment variable holding the executable search path.
pub const PATH_VAR: &str = "PATH";

/// Environment variable holding the ordered list of executable extensions,
/// consulted whenever present (Windows convention).
pub const PATHEXT_VAR: &str = "PATHEXT";
