//! Command engine
//!
//! Every command takes pre-split arguments and resolves paths from the root of
//! the tree. Only `cp` mutates.

pub mod copy;
pub mod listing;
pub mod system;

use crate::error::CommandError;
use crate::tree::Vfs;
use tracing::debug;

/// Commands understood by the engine (`exit` is handled by the shell)
pub const COMMAND_NAMES: &[&str] = &["ls", "cd", "tree", "cp", "uptime", "date"];

/// Whether `name` needs mutable access to the tree
pub fn is_mutating(name: &str) -> bool {
    name == "cp"
}

/// Run a command that only reads the tree.
pub fn execute_read_only(vfs: &Vfs, name: &str, args: &[String]) -> Result<String, CommandError> {
    debug!(command = name, ?args, "Executing command");
    match name {
        "ls" => listing::ls(vfs, args),
        "cd" => listing::cd(vfs, args),
        "tree" => listing::tree(vfs, args),
        "uptime" => Ok(system::uptime()),
        "date" => Ok(system::date()),
        other => Err(CommandError::UnknownCommand(other.to_string())),
    }
}

/// Run any engine command.
pub fn execute(vfs: &mut Vfs, name: &str, args: &[String]) -> Result<String, CommandError> {
    if is_mutating(name) {
        debug!(command = name, ?args, "Executing command");
        copy::cp(vfs, args)
    } else {
        execute_read_only(vfs, name, args)
    }
}
