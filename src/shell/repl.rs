//! Interactive prompt loop

use super::{LineOutcome, Shell, PROMPT};
use crate::error::ShellError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn load_history(rl: &mut DefaultEditor, path: &Path) {
    if let Err(e) = rl.load_history(path) {
        // A missing file is expected on first run.
        let is_not_found = matches!(&e, ReadlineError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound);
        if !is_not_found {
            warn!("Failed to load history: {}", e);
        }
    }
}

fn save_history(rl: &mut DefaultEditor, path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            warn!("Failed to create history directory: {}", e);
            return;
        }
    }
    if let Err(e) = rl.save_history(path) {
        warn!("Failed to save history: {}", e);
    }
}

/// Prompt for lines until `exit` or end of input.
///
/// An interrupt prints a hint and keeps the session alive.
pub fn run_interactive(shell: &mut Shell, history: Option<PathBuf>) -> Result<(), ShellError> {
    let mut rl = DefaultEditor::new()?;
    if let Some(path) = &history {
        load_history(&mut rl, path);
    }
    info!("Interactive session started");

    let result = loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        warn!("Failed to add history entry: {}", e);
                    }
                }
                match shell.process_line(&line) {
                    LineOutcome::Continue(Some(output)) => println!("{}", output),
                    LineOutcome::Continue(None) => {}
                    LineOutcome::Exit => break Ok(()),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("\nUse 'exit' to quit.");
            }
            Err(ReadlineError::Eof) => break Ok(()),
            Err(e) => break Err(ShellError::Readline(e)),
        }
    };

    if let Some(path) = &history {
        save_history(&mut rl, path);
    }
    info!("Interactive session ended");
    result
}
