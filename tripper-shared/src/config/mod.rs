//! # Configuration
//!
//! Client settings are available on every target; the server configuration
//! loader touches the filesystem and is native-only.

pub mod client;
#[cfg(not(target_arch = "wasm32"))]
pub mod server;

use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file extension is not one of yaml, yml, json, or toml.
    #[error("unsupported configuration format '{0}'. Use 'yaml', 'json', or 'toml'.")]
    UnsupportedFormat(String),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// An environment override held an unusable value.
    #[error("invalid {name} value: {reason}")]
    InvalidEnv {
        /// Name of the offending variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The resolved configuration failed validation.
    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
