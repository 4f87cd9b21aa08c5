//! Error types for veneer_core

use thiserror::Error;

/// Errors raised while validating state configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("event log capacity must be at least 1")]
    InvalidCapacity,

    #[error("transient delay must be greater than zero")]
    InvalidDelay,
}

/// Result type for veneer_core operations
pub type Result<T> = std::result::Result<T, Error>;
