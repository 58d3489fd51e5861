//! Platform directories used by the shell.

mod xdg_root;

pub use xdg_root::{history_file, project_dirs, state_dir};
