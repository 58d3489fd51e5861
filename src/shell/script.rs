//! Startup script execution

use super::{LineOutcome, Shell, PROMPT};
use crate::error::ShellError;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{info, warn};

/// How a script run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Every line was processed
    Completed,
    /// The script ran `exit`
    Exited,
    /// The script file does not exist
    Missing,
    /// Reading the script failed part way
    Failed,
}

impl Shell {
    /// Run the script at `path`, writing echoes and output to `out`.
    ///
    /// Blank lines and `#` comments are skipped. Each executed line is echoed
    /// with the prompt first. Errors only end the script phase; `Err` is
    /// returned only when `out` cannot be written.
    pub fn run_script<W: Write>(
        &mut self,
        path: &Path,
        out: &mut W,
    ) -> Result<ScriptOutcome, ShellError> {
        if !path.exists() {
            warn!(path = %path.display(), "Startup script not found");
            writeln!(
                out,
                "Error: script file '{}' does not exist.",
                path.display()
            )?;
            return Ok(ScriptOutcome::Missing);
        }

        info!(path = %path.display(), "Running script");
        let outcome = match std::fs::File::open(path) {
            Ok(file) => self.run_lines(BufReader::new(file), out)?,
            Err(e) => {
                writeln!(out, "Error executing script: {}", e)?;
                ScriptOutcome::Failed
            }
        };
        info!(path = %path.display(), outcome = ?outcome, "Script finished");
        Ok(outcome)
    }

    /// Run script lines from any reader.
    pub fn run_lines<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        out: &mut W,
    ) -> Result<ScriptOutcome, ShellError> {
        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    writeln!(out, "Error executing script: {}", e)?;
                    return Ok(ScriptOutcome::Failed);
                }
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            writeln!(out, "{}{}", PROMPT, line)?;
            match self.process_line(line) {
                LineOutcome::Continue(Some(output)) => writeln!(out, "{}", output)?,
                LineOutcome::Continue(None) => {}
                LineOutcome::Exit => return Ok(ScriptOutcome::Exited),
            }
        }
        Ok(ScriptOutcome::Completed)
    }
}
