//! MergeService: orchestrates sources, applies merge policy, deserializes to ShellConfig.

use crate::config::sources::{environment, local_file};
use crate::config::ShellConfig;
use config::ConfigError;
use std::path::Path;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the working directory and the environment.
    /// Precedence: defaults (lowest) -> local file -> environment (highest).
    pub fn load(working_dir: &Path) -> Result<ShellConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = local_file::add_to_builder(builder, working_dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    /// The file must exist.
    pub fn load_from_file(path: &Path) -> Result<ShellConfig, ConfigError> {
        use config::File;

        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        config.try_deserialize()
    }
}
