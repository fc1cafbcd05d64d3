//! # ASCII PBM Bitmap Source
//!
//! This module parses the plain-text (type `P1`) variant of the netpbm
//! monochrome bitmap format and exposes its pixels as a lazy, forward-only
//! stream for the raster pipeline.
//!
//! ## File Structure
//!
//! ```text
//! P1            <- magic: plain (ASCII) bitmap
//! # comment     <- exactly one comment line
//! 12 8          <- width and height
//! 0 1 0 1 ...   <- width*height pixel glyphs, any whitespace layout
//! ```
//!
//! `1` is a mark (printed dot), `0` is background. The pixel scanner skips
//! any character that is not one of the two glyphs, which tolerates
//! arbitrary whitespace and line breaks in the data section.
//!
//! ## Deliberate Limitations
//!
//! - The binary `P4` variant (and every other netpbm type) is rejected.
//! - Exactly one comment line after the magic is discarded; this parser
//!   matches the fixed layout of the expected input files rather than
//!   implementing general `#`-comment skipping.

use std::io::{BufRead, Read};

use crate::error::ChispaError;

/// Lazy reader over an ASCII PBM byte stream.
///
/// Construction parses the header and leaves the underlying reader
/// positioned at the first pixel glyph. Pixels are then pulled one at a
/// time with [`next_pixel`](PbmReader::next_pixel); the source is never
/// buffered whole.
#[derive(Debug)]
pub struct PbmReader<R> {
    reader: R,
    width: u32,
    height: u32,
}

impl<R: BufRead> PbmReader<R> {
    /// Parse the PBM header: magic token, one comment line, dimensions.
    ///
    /// ## Errors
    ///
    /// Returns [`ChispaError::Format`] if the magic is not `P1` (a binary
    /// `P4` file gets a distinct message), if the dimension fields are
    /// missing, non-numeric, or zero, or if the stream ends inside the
    /// header.
    pub fn new(mut reader: R) -> Result<Self, ChispaError> {
        let mut line = String::new();
        reader.read_line(&mut line)?;

        let magic = line.trim_end();
        if !magic.starts_with('P') {
            return Err(ChispaError::Format("not a PBM file".into()));
        }
        if magic.as_bytes().get(1) != Some(&b'1') {
            return Err(ChispaError::Format(
                "not an ASCII PBM file (only the plain P1 variant is supported)".into(),
            ));
        }

        // One comment line always follows the magic in our inputs.
        line.clear();
        reader.read_line(&mut line)?;

        let width = read_dimension(&mut reader, "width")?;
        let height = read_dimension(&mut reader, "height")?;

        Ok(Self {
            reader,
            width,
            height,
        })
    }

    /// Image width in source pixel columns
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in source pixel rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Produce the next pixel: `true` for a mark (`1`), `false` for
    /// background (`0`).
    ///
    /// Characters other than the two pixel glyphs are skipped, so the data
    /// section may be laid out with any whitespace. Reaching end-of-input
    /// is a [`ChispaError::Format`]: the caller asks for exactly
    /// `width * height` pixels and a shortfall means the file is truncated.
    pub fn next_pixel(&mut self) -> Result<bool, ChispaError> {
        loop {
            match next_byte(&mut self.reader)? {
                Some(b'1') => return Ok(true),
                Some(b'0') => return Ok(false),
                Some(_) => continue,
                None => {
                    return Err(ChispaError::Format(
                        "unexpected end of file in PBM pixel data".into(),
                    ));
                }
            }
        }
    }
}

/// Read one byte, mapping EOF to `None`.
fn next_byte<R: BufRead>(reader: &mut R) -> Result<Option<u8>, ChispaError> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ChispaError::Io(e)),
        }
    }
}

/// Parse one whitespace-delimited positive integer from the stream.
fn read_dimension<R: BufRead>(reader: &mut R, what: &str) -> Result<u32, ChispaError> {
    // Skip leading whitespace
    let mut byte = loop {
        match next_byte(reader)? {
            Some(b) if b.is_ascii_whitespace() => continue,
            Some(b) => break b,
            None => {
                return Err(ChispaError::Format(format!(
                    "unexpected end of file reading PBM {}",
                    what
                )));
            }
        }
    };

    let mut value: u32 = 0;
    let mut digits = 0usize;
    loop {
        if byte.is_ascii_digit() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(byte - b'0')))
                .ok_or_else(|| {
                    ChispaError::Format(format!("PBM {} out of range", what))
                })?;
            digits += 1;
        } else if byte.is_ascii_whitespace() {
            break;
        } else {
            return Err(ChispaError::Format(format!(
                "invalid character {:?} in PBM {}",
                byte as char, what
            )));
        }
        match next_byte(reader)? {
            Some(b) => byte = b,
            None => break,
        }
    }

    if digits == 0 {
        return Err(ChispaError::Format(format!("missing PBM {}", what)));
    }
    if value == 0 {
        return Err(ChispaError::Format(format!("PBM {} must be positive", what)));
    }
    Ok(value)
}

// ============================================================================
// TESTS
// ============================================================================
