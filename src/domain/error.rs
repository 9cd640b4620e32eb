//! Error types for the ladle application.
//!
//! This module defines the centralized error type [`LadleError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for ladle operations.
///
/// This enum consolidates all error conditions that can occur while browsing,
/// bookmarking, or submitting recipes. Network-level errors propagate through
/// the state store unchanged; the coordinator is the only place they are turned
/// into user-visible messages.
#[derive(Debug, Error)]
pub enum LadleError {
    /// The request exceeded the configured timeout.
    ///
    /// Raised when the timeout timer settles before the in-flight request does.
    /// Carries the configured duration so the message can name it.
    #[error("Request took too long! Timeout after {seconds} seconds")]
    Timeout {
        /// Configured timeout duration, in seconds.
        seconds: u64,
    },

    /// The API responded with a non-success status.
    ///
    /// Carries the server-provided message and the HTTP status code, displayed
    /// in the `"<message> (<status>)"` shape the recipe API uses.
    #[error("{message} ({status})")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The request failed at the transport level.
    ///
    /// Covers connection failures, DNS errors, and malformed response bodies.
    /// The string contains a description of what went wrong.
    #[error("Request failed: {0}")]
    Request(String),

    /// User-submitted recipe data is malformed.
    ///
    /// Raised while parsing submission form entries, before any network call
    /// is made. The string describes the offending field.
    #[error("{0}")]
    Validation(String),

    /// Bookmark persistence failed.
    ///
    /// Occurs when reading from or writing to the bookmark store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for ladle operations.
///
/// This is a type alias for `std::result::Result<T, LadleError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LadleError>;
