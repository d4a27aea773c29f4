//! Error types for the tire log service

/// Errors that can occur talking to the fleet backend or handling records
#[derive(Debug, thiserror::Error)]
pub enum TireLogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Server returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid measurement record: {0}")]
    InvalidRecord(String),
}

/// Result type alias for tire log operations
pub type Result<T> = std::result::Result<T, TireLogError>;
