//! # System Interaction Layer
//!
//! This module provides abstractions for interacting with the underlying operating system.
//! It serves as a boundary between the core resolution logic and the specifics of the
//! process environment and the host platform's executable conventions.
//!
//! ## Modules
//!
//! - **`env`**: An immutable snapshot of environment variables. The core logic never
//!   reads the process environment directly; it works against one of these views, so
//!   resolution stays deterministic and fully injectable in tests.
//! - **`platform`**: The strategy value concentrating every platform-specific decision
//!   of executable lookup: how `PATH`-style lists are split, which characters mark a
//!   name as a path, and what "marked executable" means.

pub mod env;
pub mod platform;
