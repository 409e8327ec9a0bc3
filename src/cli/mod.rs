//! CLI command handlers for bandcode.
//!
//! This module provides headless, scriptable access to the decoding core
//! for automation, testing and shell use. Each command parses its own
//! arguments, calls the pure core functions and renders plain text or JSON.

pub mod available;
pub mod colors;
pub mod common;
pub mod decode;
pub mod resolve;

// Re-export types used by main.rs and tests
pub use available::AvailableArgs;
pub use colors::ColorsArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use decode::DecodeArgs;
pub use resolve::ResolveArgs;
