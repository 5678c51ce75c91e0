//! Parsing and validation of `hdlgen.toml` configuration files.
//!
//! This crate reads the tool configuration file and produces a
//! strongly-typed [`ToolConfig`]. Every option has a built-in default, so a
//! missing file is not an error — the original settings surface always
//! resolved to defaults too.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_file, load_config_from_str};
pub use types::*;
