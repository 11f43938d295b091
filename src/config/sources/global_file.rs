//! Global config file: `<config dir>/ancestry/config.toml`, optional.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::PathBuf;

/// Platform config file location, if the platform has one.
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "ancestry", "ancestry")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) => Ok(builder.add_source(
            File::from(path)
                .format(FileFormat::Toml)
                .required(false),
        )),
        None => Ok(builder),
    }
}
