//! Configuration file loading.
//!
//! Build target files are plain TOML documents. This module provides the
//! shared loading path and its error type:
//! - [`load_toml_file`]: Read and parse a TOML file
//! - [`parse_toml`]: Parse a TOML string
//! - [`ConfigFileError`]: Read and parse failures

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

/// Load a configuration structure from a TOML file.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_toml_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ConfigFileError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading config file");

    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_toml(&content)
}

/// Parse a configuration structure from a TOML string.
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as TOML.
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigFileError> {
    toml::from_str(content).map_err(|e| ConfigFileError::Parse {
        message: e.to_string(),
    })
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}
