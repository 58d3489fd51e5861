//! VFS Shell: In-Memory Virtual Filesystem
//!
//! A hierarchical namespace of directories and files held in memory, loaded
//! from a JSON document and manipulated through shell-like commands
//! (`ls`, `cd`, `tree`, `cp`).

pub mod commands;
pub mod concurrency;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod shell;
pub mod tooling;
pub mod tree;

pub use error::{CommandError, DocumentError, ShellError};
pub use tree::{Node, NodeRef, Vfs};
