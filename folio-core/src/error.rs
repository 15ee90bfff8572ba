//! Error types for the Folio catalog

use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for catalog operations
///
/// Catalog lookups never produce these; a missing plan is `None`.
/// Errors only come from parsing user input and loading configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A plan identifier outside the known set
    #[error("Unknown plan: {0}")]
    UnknownPlan(String),

    /// A billing period name that is neither monthly nor annual
    #[error("Unknown billing period: {0}")]
    UnknownPeriod(String),
}
