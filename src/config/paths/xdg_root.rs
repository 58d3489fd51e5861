//! XDG Base Directory locations for shell state.

use directories::ProjectDirs;
use std::path::PathBuf;

/// Project directories for the shell (`$XDG_DATA_HOME/vfs`, ...)
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "vfs", "vfs")
}

/// State directory (logs).
///
/// Falls back to the data directory on platforms without a state directory.
pub fn state_dir() -> Option<PathBuf> {
    let dirs = project_dirs()?;
    Some(
        dirs.state_dir()
            .unwrap_or_else(|| dirs.data_dir())
            .to_path_buf(),
    )
}

/// Interactive history file: `$XDG_DATA_HOME/vfs/history.txt`
pub fn history_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("history.txt"))
}
