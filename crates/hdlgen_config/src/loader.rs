//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ToolConfig;
use std::path::Path;

/// Loads and validates an `hdlgen.toml` configuration from a directory.
///
/// Reads `<dir>/hdlgen.toml`, parses it, and validates its values. A
/// missing file yields the built-in defaults — only a present-but-broken
/// file is an error.
pub fn load_config(dir: &Path) -> Result<ToolConfig, ConfigError> {
    let config_path = dir.join("hdlgen.toml");
    if !config_path.exists() {
        return Ok(ToolConfig::default());
    }
    load_config_file(&config_path)
}

/// Loads and validates a configuration from an explicitly named file.
///
/// Unlike [`load_config`], a missing file is an error here: the caller
/// asked for this path specifically.
pub fn load_config_file(path: &Path) -> Result<ToolConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ToolConfig, ConfigError> {
    let config: ToolConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &ToolConfig) -> Result<(), ConfigError> {
    if config.tags.ctags.is_empty() {
        return Err(ConfigError::ValidationError(
            "tags.ctags must not be empty".to_string(),
        ));
    }
    Ok(())
}
