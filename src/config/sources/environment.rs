//! Environment variable source: ANCESTRY__* with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `ANCESTRY__REVERSE=true`, `ANCESTRY__LOGGING__LEVEL=debug`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("ANCESTRY")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    ))
}
