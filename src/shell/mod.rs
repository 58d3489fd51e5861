//! Command dispatcher
//!
//! Splits an input line into a command name and arguments, routes it to the
//! command engine and renders the result. Script and interactive front ends
//! both go through [`Shell::process_line`].

pub mod repl;
pub mod script;

pub use repl::run_interactive;
pub use script::ScriptOutcome;

use crate::commands;
use crate::tree::Vfs;
use std::path::Path;
use tracing::debug;

/// Prompt shown before each interactive line and echoed before script lines
pub const PROMPT: &str = "VFS> ";

/// Result of processing one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Keep reading; print the output if there is one
    Continue(Option<String>),
    /// `exit` was entered
    Exit,
}

/// Split a line into command name and arguments.
pub fn tokenize(line: &str) -> Option<(&str, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let name = parts.next()?;
    Some((name, parts.map(str::to_string).collect()))
}

/// Owns the tree for the lifetime of a session.
#[derive(Debug, Default)]
pub struct Shell {
    vfs: Vfs,
}

impl Shell {
    pub fn new(vfs: Vfs) -> Self {
        Self { vfs }
    }

    pub fn vfs(&self) -> &Vfs {
        &self.vfs
    }

    pub fn into_vfs(self) -> Vfs {
        self.vfs
    }

    /// Execute one line. Command failures are rendered, never propagated.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        let Some((name, args)) = tokenize(line) else {
            return LineOutcome::Continue(None);
        };
        if name == "exit" {
            return LineOutcome::Exit;
        }

        match commands::execute(&mut self.vfs, name, &args) {
            Ok(output) => LineOutcome::Continue(Some(output)),
            Err(e) => {
                debug!(command = name, error = ?e, "Command failed");
                LineOutcome::Continue(Some(e.to_string()))
            }
        }
    }
}

/// Startup banner naming the document and the startup script
pub fn banner(document: &Path, script: Option<&Path>) -> String {
    let script = script
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    format!(
        "VFS Path: {}\nStartup Script: {}\n",
        document.display(),
        script
    )
}
