//! Core error types for the PubChem scraper.
//!
//! This module defines the error types shared by every crate in the workspace.
//! Subsystem crates wrap these in their own error enums.

use thiserror::Error;

/// Central error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration errors (file loading, parsing, validation)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to determine config directory path
    #[error("could not determine config directory (XDG base directories not available)")]
    NoConfigDir,

    /// Config file not found
    #[error("cannot find file: '{path}'")]
    NotFound {
        /// Path where config was expected
        path: String,
    },

    /// Failed to parse settings TOML
    #[error("failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Failed to parse constants YAML
    #[error("failed to parse constants YAML in '{path}': {source}")]
    YamlError {
        /// Path of the YAML file
        path: String,
        /// YAML parse error
        #[source]
        source: serde_yaml::Error,
    },

    /// I/O error reading/writing config
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("invalid config value for {field}: {reason}")]
    InvalidValue {
        /// Field name
        field: String,
        /// Reason for invalidity
        reason: String,
    },
}

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
