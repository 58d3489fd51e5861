//! Built-in defaults, the lowest-precedence layer.

use crate::config::{default_document, LOCAL_CONFIG_FILE};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder seeded with defaults for keys that other layers commonly override.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let document = default_document();
    Config::builder()
        .set_default("document", document.to_string_lossy().to_string())?
        .set_default("decode_policy", "lossy")?
        .set_default("history", true)
}

/// File name the merge service looks for in the working directory.
pub fn local_file_name() -> &'static str {
    LOCAL_CONFIG_FILE
}
