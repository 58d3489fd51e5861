use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;
use vfs_shell::shell::{LineOutcome, Shell};

/// Write the reference document used across tests.
pub fn write_reference_document(path: &Path) {
    let raw = json!({
        "readme.txt": "Welcome to VFS",
        "bin": { "test.bin": STANDARD.encode("binary data") },
        "docs": { "doc.txt": "Documentation here" }
    });
    std::fs::write(path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();
}

/// Run a line and return its rendered output.
pub fn run(shell: &mut Shell, line: &str) -> String {
    match shell.process_line(line) {
        LineOutcome::Continue(Some(output)) => output,
        other => panic!("unexpected outcome for {line:?}: {other:?}"),
    }
}
