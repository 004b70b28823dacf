//! Error types for archive-browser
//!
//! This module provides the error handling for the library:
//! - A configuration error for startup-time validation failures
//! - Transport, decode, and remote-fault variants for everything the
//!   fetch-and-parse pipeline can report at run time
//!
//! Every runtime failure collapses into one of these variants before it
//! reaches the consumer; the pipeline never panics across its boundary. The
//! `Display` output is the human-readable message a consuming screen shows
//! verbatim, while the variant itself is the machine-readable kind.

use thiserror::Error;

/// Result type alias for archive-browser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for archive-browser
///
/// This is the primary error type used throughout the library. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    ///
    /// Fatal at startup; never produced per-request once a fetcher has been
    /// constructed.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "api_key")
        key: Option<String>,
    },

    /// Network transfer failed
    ///
    /// Covers unreachable hosts, timeouts, read failures, and non-success
    /// HTTP statuses. Reported without attempting to parse any body.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response bytes matched neither the fault nor the success wire shape
    #[error("decode error: {0}")]
    Decode(String),

    /// The archive API explicitly reported an application-level fault
    ///
    /// The message is the server's faultstring, verbatim.
    #[error("{0}")]
    RemoteFault(String),
}
