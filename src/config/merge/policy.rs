//! Merge policy: builder seeded with scalar defaults.

use crate::logging::LoggingConfig;
use crate::options::AncestryOptions;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Builder with every scalar default set, so later sources only override.
///
/// `sort_by` and `sort_files_first` are left to serde defaults: they accept
/// several shapes and a seeded default would merge into a user-supplied list.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let options = AncestryOptions::default();
    let logging = LoggingConfig::default();

    Config::builder()
        .set_default("ancestry_property", options.ancestry_property)?
        .set_default("match", options.match_pattern)?
        .set_default("match_dot", options.match_dot)?
        .set_default("reverse", options.reverse)?
        .set_default("logging.enabled", logging.enabled)?
        .set_default("logging.level", logging.level)?
        .set_default("logging.format", logging.format)?
        .set_default("logging.output", logging.output)?
        .set_default("logging.color", logging.color)
}
