//! Environment variable source: VFS prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment variable prefix (`VFS__DOCUMENT`, `VFS__LOGGING__LEVEL`, ...)
pub const ENV_PREFIX: &str = "VFS";

/// Add environment variable overlay to builder.
/// Uses VFS prefix and __ as separator for nested keys.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
