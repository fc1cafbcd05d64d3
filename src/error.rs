//! # Error Types
//!
//! This module defines error types used throughout the chispa library.

use thiserror::Error;

use crate::raster::Resolution;

/// Main error type for chispa operations
#[derive(Debug, Error)]
pub enum ChispaError {
    /// Transport-level errors (port open, TTY configuration)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed bitmap input (bad magic, binary variant, truncated data)
    #[error("Bitmap format error: {0}")]
    Format(String),

    /// Image wider than the dot-column limit of the selected resolution
    #[error("Image width {width} exceeds maximum {max} for {resolution:?} resolution")]
    WidthExceeded {
        width: u32,
        max: u16,
        resolution: Resolution,
    },

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
