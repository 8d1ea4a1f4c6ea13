//! Configuration loading errors.

use thiserror::Error;

/// Errors from loading a navigation config file
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    Io(String),

    #[error("failed to parse config YAML: {0}")]
    Parse(String),
}
