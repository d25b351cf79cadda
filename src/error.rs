//! # Error Types
//!
//! This module defines error types used throughout the as289r2 library.

use thiserror::Error;

/// Main error type for printer operations
#[derive(Debug, Error)]
pub enum PrinterError {
    /// The byte sink failed or was disconnected
    #[error("Transport error: {0}")]
    Transport(String),

    /// A parameter or payload cannot be represented in the command layout
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Image loading or conversion error
    #[error("Image error: {0}")]
    Image(String),

    /// Malformed print job description
    #[error("Job error: {0}")]
    Job(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, PrinterError>;
