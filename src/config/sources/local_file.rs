//! Optional `vfs.toml` in the working directory.

use crate::config::merge::merge_policy;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    working_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = working_dir.join(merge_policy::local_file_name());
    Ok(builder.add_source(File::from(path).required(false)))
}
