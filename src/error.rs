//! Error types for sphere configuration and generation

use thiserror::Error;

/// Errors that can occur while configuring or generating a sphere
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphereError {
    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    /// The resolution would need more subdivision passes than allowed
    #[error("resolution needs {levels} subdivision levels (max {max})")]
    TooManyLevels {
        /// Levels selected for the requested resolution
        levels: u32,
        /// Configured ceiling
        max: u32,
    },
}

/// Result type alias for sphere operations
pub type Result<T> = std::result::Result<T, SphereError>;
