//! Workspace config file: `<workspace>/ancestry.toml`, optional.

use crate::config::CONFIG_FILE_NAME;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        File::from(workspace_root.join(CONFIG_FILE_NAME))
            .format(FileFormat::Toml)
            .required(false),
    ))
}
