//! # Microprinter Protocol Commands
//!
//! This module implements the ESC/GS command protocol used by Citizen
//! CBM1000-class receipt microprinters (and compatible impact/thermal
//! mechanisms sold as "hackspace microprinters").
//!
//! ## Protocol Overview
//!
//! The protocol is ESC/POS-like: commands are short byte sequences starting
//! with an escape character, interleaved freely with printable text. The
//! printer supports:
//!
//! - **Text printing**: Two fonts, magnification, underline, emphasis
//! - **Graphics**: Bit-image bands at two densities (ESC *)
//! - **Barcodes**: 1D symbologies printed by the firmware (GS k)
//! - **Paper control**: Line pitch, feeding, partial cut
//! - **Buzzer**: Single-beep annunciator
//!
//! ## Escape Sequence Structure
//!
//! Commands follow these patterns:
//! - Two bytes: `ESC 2`, `ESC RS`
//! - Three bytes: `ESC 3 n`, `ESC - n`, `GS V n`
//! - Variable length: `ESC * d nL nH data...`, `GS k m data... NUL`
//!
//! ## Byte Order
//!
//! Multi-byte integers use **little-endian** encoding:
//! - `u16` value 0x1234 is sent as bytes `[0x34, 0x12]`
//!
//! ## Feedback
//!
//! The device is a pure byte sink: nothing here reads status back, and no
//! command depends on a prior acknowledgement.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
///
/// Most commands begin with ESC (0x1B). This byte signals the start of a
/// control sequence rather than printable text.
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix
///
/// Prefixes barcode configuration, inverse printing, character sizing and
/// the cutter command. Hex: 0x1D, Decimal: 29.
pub const GS: u8 = 0x1D;

/// CR (Carriage Return)
pub const CR: u8 = 0x0D;

/// LF (Line Feed) - Print and advance one line
///
/// Prints any data in the line buffer and advances paper by the current
/// line pitch.
pub const LF: u8 = 0x0A;

// ============================================================================
// LINE PITCH COMMANDS
// ============================================================================

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the line pitch to n/180 inch. Used by the raster pipeline to make
/// consecutive graphics bands tile with no vertical gap: a 24-dot band at
/// n = 24 advances exactly one band height per `CR LF`.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | ASCII   | ESC 3 n |
/// | Hex     | 1B 33 n |
/// | Decimal | 27 51 n |
///
/// ## Example
///
/// ```
/// use chispa::protocol::commands;
///
/// let cmd = commands::line_spacing(24);
/// assert_eq!(cmd, vec![0x1B, 0x33, 24]);
/// ```
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n]
}

/// # Default Line Spacing (ESC 2)
///
/// Restores the power-on 1/6 inch line pitch. Sent after the last graphics
/// band so subsequent text prints normally.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 2 |
/// | Hex     | 1B 32 |
/// | Decimal | 27 50 |
#[inline]
pub fn line_spacing_default() -> Vec<u8> {
    vec![ESC, b'2']
}

// ============================================================================
// ANNUNCIATOR AND CUTTER
// ============================================================================

/// # Sound Buzzer (ESC RS)
///
/// Sounds the printer's internal buzzer once.
///
/// ## Protocol Details
///
/// | Format  | Bytes  |
/// |---------|--------|
/// | Hex     | 1B 1E  |
/// | Decimal | 27 30  |
#[inline]
pub fn buzzer() -> Vec<u8> {
    vec![ESC, 0x1E]
}

/// # Partial Cut (GS V 1)
///
/// Performs a partial cut, leaving a small "hinge" so the receipt stays
/// attached to the roll until torn off.
///
/// ## Protocol Details
///
/// | Format  | Bytes    |
/// |---------|----------|
/// | ASCII   | GS V 1   |
/// | Hex     | 1D 56 01 |
/// | Decimal | 29 86 1  |
#[inline]
pub fn cut_partial() -> Vec<u8> {
    vec![GS, b'V', 0x01]
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Feed Blank Lines (CR LF repeated)
///
/// Advances the paper by printing empty lines at the current pitch. The
/// mechanism has no dedicated multi-line feed opcode, so feeding is plain
/// line terminators.
///
/// ## Example
///
/// ```
/// use chispa::protocol::commands;
///
/// // Feed past the tear bar before cutting
/// let cmd = commands::feed(8);
/// assert_eq!(cmd.len(), 16);
/// assert_eq!(&cmd[0..2], &[0x0D, 0x0A]);
/// ```
pub fn feed(lines: usize) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(lines * 2);
    for _ in 0..lines {
        cmd.push(CR);
        cmd.push(LF);
    }
    cmd
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Encode a u16 value as little-endian bytes [low, high]
///
/// The protocol uses little-endian encoding for all multi-byte integers.
///
/// ## Example
///
/// ```
/// use chispa::protocol::commands::u16_le;
///
/// assert_eq!(u16_le(0x1234), [0x34, 0x12]);
/// assert_eq!(u16_le(576), [0x40, 0x02]); // 576 = 0x0240
/// ```
#[inline]
pub const fn u16_le(value: u16) -> [u8; 2] {
    [value as u8, (value >> 8) as u8]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_spacing() {
        assert_eq!(line_spacing(24), vec![0x1B, 0x33, 24]);
        assert_eq!(line_spacing(0), vec![0x1B, 0x33, 0]);
        assert_eq!(line_spacing(255), vec![0x1B, 0x33, 255]);
    }

    #[test]
    fn test_line_spacing_default() {
        assert_eq!(line_spacing_default(), vec![0x1B, 0x32]);
    }

    #[test]
    fn test_buzzer() {
        assert_eq!(buzzer(), vec![0x1B, 0x1E]);
    }

    #[test]
    fn test_cut_partial() {
        assert_eq!(cut_partial(), vec![0x1D, 0x56, 0x01]);
    }

    #[test]
    fn test_feed() {
        assert_eq!(feed(0), Vec::<u8>::new());
        assert_eq!(feed(1), vec![0x0D, 0x0A]);
        assert_eq!(feed(3), vec![0x0D, 0x0A, 0x0D, 0x0A, 0x0D, 0x0A]);
    }

    #[test]
    fn test_u16_le() {
        assert_eq!(u16_le(0x0000), [0x00, 0x00]);
        assert_eq!(u16_le(0x00FF), [0xFF, 0x00]);
        assert_eq!(u16_le(0xFF00), [0x00, 0xFF]);
        assert_eq!(u16_le(0x1234), [0x34, 0x12]);
        assert_eq!(u16_le(576), [0x40, 0x02]); // full page width in dots
    }
}
