//! Error types for the userdeck plugin.
//!
//! This module defines the centralized error type [`UserdeckError`] and a type
//! alias [`Result`] used throughout the crate. Fetch failures have their own
//! enum, [`FetchError`](crate::fetcher::FetchError), which converts into
//! [`UserdeckError`] via `#[from]`.

use crate::fetcher::FetchError;
use thiserror::Error;

/// The main error type for userdeck operations.
///
/// Consolidates every failure the plugin can observe. None of them is fatal:
/// the plugin shell logs the error and keeps the pane usable.
#[derive(Debug, Error)]
pub enum UserdeckError {
    /// Loading the user batch failed.
    ///
    /// Wraps transport, HTTP status and payload parsing failures.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the offending key and value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for userdeck operations.
pub type Result<T> = std::result::Result<T, UserdeckError>;
