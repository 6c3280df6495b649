//! # Error Types
//!
//! This module defines error types used throughout the thermal-printer library.

use thiserror::Error;

/// Main error type for thermal-printer operations
#[derive(Debug, Error)]
pub enum PrinterError {
    /// The active dialect has no code page with this name
    #[error("Code page not recognized: '{0}'")]
    UnknownCodePage(String),

    /// Image printing was given a path without a supported raster suffix
    #[error("Unsupported image format: {0} (image printing supports only PNG files)")]
    UnsupportedFormat(String),

    /// Bitmap decoding failed
    #[error("Decode error: {0}")]
    Decode(String),

    /// Image processing error (e.g. a bitmap too large for a raster command)
    #[error("Image error: {0}")]
    Image(String),

    /// The dialect has no command for the requested capability
    #[error("{command} is not supported by {dialect} printers")]
    UnsupportedCommand {
        dialect: &'static str,
        command: &'static str,
    },

    /// A symbol payload or setting the dialect cannot encode
    #[error("Symbol error: {0}")]
    Symbol(String),

    /// Invalid printer options
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Transport-level errors (connection, I/O)
    #[error("Transport error: {0}")]
    Transport(String),

    /// A print job command failed
    #[error("Job error: {0}")]
    Job(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PrinterError>;
