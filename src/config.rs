//! Configuration
//!
//! `AncestryConfig` is assembled from layered sources by [`ConfigLoader`]:
//! built-in defaults, the global config file, `ancestry.toml` in the
//! workspace, then `ANCESTRY__*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;

pub use facade::ConfigLoader;

use crate::logging::LoggingConfig;
use crate::options::AncestryOptions;
use serde::{Deserialize, Serialize};

/// Workspace config file name
pub const CONFIG_FILE_NAME: &str = "ancestry.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AncestryConfig {
    /// Ancestry options live at the top level of the file
    #[serde(flatten)]
    pub ancestry: AncestryOptions,

    #[serde(default)]
    pub logging: LoggingConfig,
}
