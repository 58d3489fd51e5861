//! Tooling & Integration Layer
//!
//! Command-line entry points wrapping the VFS shell.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
