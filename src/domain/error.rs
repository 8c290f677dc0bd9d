//! Error types for the Velobook plugin.
//!
//! This module defines the centralized error type [`VelobookError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for Velobook plugin operations.
///
/// This enum consolidates the error conditions that can occur during plugin
/// execution, from malformed configuration to wire-format failures at the
/// booking API boundary.
#[derive(Debug, Error)]
pub enum VelobookError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request or response body could not be (de)serialized.
    ///
    /// Wraps errors from `serde_json` when encoding request payloads for the
    /// booking API or decoding its responses. Automatically converts using
    /// the `#[from]` attribute.
    #[error("Wire format error: {0}")]
    Wire(#[from] serde_json::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when the plugin cannot parse or apply the configured theme.
    /// The string contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (trace file writes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Velobook operations.
///
/// This is a type alias for `std::result::Result<T, VelobookError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VelobookError>;
