//! # Text Styling Commands
//!
//! This module implements character formatting commands for the CBM1000
//! command set. All of them are stateless one-shot emissions: the printer
//! latches the mode until it is explicitly changed.
//!
//! ## Text Styling Overview
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Underline | ESC - n | None, single or double underline |
//! | Emphasis | ESC E n | Bold strike |
//! | Double print | ESC G n | Second pass over the same line |
//! | Inverse | GS B n | White on black |
//! | Upside down | ESC { n | 180-degree character flip |
//! | Rotate | ESC V n | 90-degree character rotation |
//! | Font | ESC M n | Font A (normal) / Font B (condensed) |
//! | Size | GS ! n | 1x-8x horizontal and vertical magnification |
//!
//! ## Font Metrics
//!
//! | Font | Cell width | Columns (576 dots) |
//! |------|-----------|--------------------|
//! | Font A | 12 dots | 48 chars |
//! | Font B | 9 dots | 64 chars |
//!
//! The 12-dot Font A cell is what the raster pipeline's justification
//! padding relies on (one space = 12 dot-columns).

use super::commands::{ESC, GS};

// ============================================================================
// UNDERLINE
// ============================================================================

/// Underline modes
///
/// The mode parameter is the ASCII digit, not the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Underline {
    #[default]
    None = b'0',
    Single = b'1',
    Double = b'2',
}

/// # Set Underline Mode (ESC - n)
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC - n |
/// | Hex     | 1B 2D n |
/// | Decimal | 27 45 n |
///
/// ## Parameters
///
/// - `n = '0'`: underline off
/// - `n = '1'`: single underline
/// - `n = '2'`: double underline
///
/// ## Example
///
/// ```
/// use chispa::protocol::text::{underline, Underline};
///
/// assert_eq!(underline(Underline::Single), vec![0x1B, 0x2D, b'1']);
/// ```
#[inline]
pub fn underline(mode: Underline) -> Vec<u8> {
    vec![ESC, b'-', mode as u8]
}

// ============================================================================
// ON/OFF STYLE TOGGLES
// ============================================================================

/// # Emphasis (ESC E n)
///
/// Bold printing. `n = 1` on, `n = 0` off.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 45 n |
/// | Decimal | 27 69 n |
#[inline]
pub fn emphasis(on: bool) -> Vec<u8> {
    vec![ESC, b'E', on as u8]
}

/// # Double Print (ESC G n)
///
/// Prints each line twice for a darker impression. Visually similar to
/// emphasis on impact mechanisms.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 47 n |
/// | Decimal | 27 71 n |
#[inline]
pub fn double_print(on: bool) -> Vec<u8> {
    vec![ESC, b'G', on as u8]
}

/// # Inverse Printing (GS B n)
///
/// White characters on a black background.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 42 n |
/// | Decimal | 29 66 n |
#[inline]
pub fn inverse(on: bool) -> Vec<u8> {
    vec![GS, b'B', on as u8]
}

/// # Upside-Down Characters (ESC { n)
///
/// Flips each character 180 degrees.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 7B n |
/// | Decimal | 27 123 n |
#[inline]
pub fn upside_down(on: bool) -> Vec<u8> {
    vec![ESC, b'{', on as u8]
}

/// # Rotated Characters (ESC V n)
///
/// Rotates each character 90 degrees clockwise.
///
/// Note: distinct from the cutter command, which is `GS V n`.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 56 n |
/// | Decimal | 27 86 n |
#[inline]
pub fn rotate(on: bool) -> Vec<u8> {
    vec![ESC, b'V', on as u8]
}

// ============================================================================
// FONT SELECTION
// ============================================================================

/// Printer fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Font {
    /// Font A: 12-dot cell, 48 columns
    #[default]
    A = 0x00,
    /// Font B: 9-dot cell, 64 columns (condensed)
    B = 0x01,
}

/// # Select Font (ESC M n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1B 4D n |
/// | Decimal | 27 77 n |
///
/// ## Example
///
/// ```
/// use chispa::protocol::text::{font, Font};
///
/// assert_eq!(font(Font::B), vec![0x1B, 0x4D, 0x01]);
/// ```
#[inline]
pub fn font(f: Font) -> Vec<u8> {
    vec![ESC, b'M', f as u8]
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (GS ! n)
///
/// Sets horizontal and vertical magnification in one byte:
/// `n = (hmag - 1) << 4 | (vmag - 1)`.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 21 n |
/// | Decimal | 29 33 n |
///
/// ## Parameters
///
/// - `hmag`, `vmag`: magnification factors, clamped to 1..=8
///
/// ## Example
///
/// ```
/// use chispa::protocol::text::char_size;
///
/// // Double width, normal height
/// assert_eq!(char_size(2, 1), vec![0x1D, 0x21, 0x10]);
/// // Triple size
/// assert_eq!(char_size(3, 3), vec![0x1D, 0x21, 0x22]);
/// ```
pub fn char_size(hmag: u8, vmag: u8) -> Vec<u8> {
    let h = hmag.clamp(1, 8);
    let v = vmag.clamp(1, 8);
    vec![GS, b'!', (h - 1) << 4 | (v - 1)]
}

/// Restore 1x1 character size
#[inline]
pub fn char_size_normal() -> Vec<u8> {
    char_size(1, 1)
}

/// Double width and height
#[inline]
pub fn char_size_double() -> Vec<u8> {
    char_size(2, 2)
}

// ============================================================================
// TESTS
// ============================================================================
