//! Shell configuration
//!
//! Sources, lowest precedence first: built-in defaults, `vfs.toml` in the
//! working directory (or an explicit `--config` file), then `VFS__*`
//! environment variables. CLI flags are applied on top by the caller.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::document::DecodePolicy;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "vfs.toml";

pub(crate) fn default_document() -> PathBuf {
    PathBuf::from("vfs.json")
}

pub(crate) fn default_startup_script() -> Option<PathBuf> {
    Some(PathBuf::from("startup_script.txt"))
}

fn default_true() -> bool {
    true
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Backing JSON document
    #[serde(default = "default_document")]
    pub document: PathBuf,

    /// Script executed before the interactive prompt; empty disables it
    #[serde(default = "default_startup_script")]
    pub startup_script: Option<PathBuf>,

    /// Text decoding of `.bin` file content
    #[serde(default)]
    pub decode_policy: DecodePolicy,

    /// Persist interactive history between sessions
    #[serde(default = "default_true")]
    pub history: bool,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            startup_script: default_startup_script(),
            decode_policy: DecodePolicy::default(),
            history: default_true(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Startup script, treating an empty path as unset
    pub fn startup_script(&self) -> Option<&Path> {
        self.startup_script
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
