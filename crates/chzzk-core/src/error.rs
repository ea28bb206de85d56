//! Error types for the Chzzk live stream reporter
//!
//! Provides a comprehensive error enum with human-readable messages
//! suitable for direct console reporting.

use thiserror::Error;

/// Error type for all Chzzk reporter operations
#[derive(Error, Debug)]
pub enum ChzzkError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-success HTTP status
    #[error("API returned HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Requested live list size was not a positive integer
    #[error("Invalid live list limit: {0}")]
    InvalidLimit(u32),

    /// API response contained no usable live broadcasts
    #[error("No live broadcasts in API response")]
    NoStreams,

    /// File-system error while writing an export file
    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Chzzk reporter operations
pub type Result<T> = std::result::Result<T, ChzzkError>;
