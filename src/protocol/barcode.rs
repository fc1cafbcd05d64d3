//! # Barcode Commands
//!
//! This module implements 1D barcode printing commands. The CBM1000 renders
//! barcodes in firmware: the host configures bar geometry, then sends the
//! payload characters and the printer does the symbology encoding itself.
//!
//! ## Supported Symbologies
//!
//! | Type | Mode byte | Payload |
//! |------|-----------|---------|
//! | UPC-A | 0x00 | 11-12 digits |
//! | UPC-E | 0x01 | 6-8 digits |
//! | JAN-13 / EAN-13 | 0x02 | 12-13 digits |
//! | JAN-8 / EAN-8 | 0x03 | 7-8 digits |
//! | Code39 | 0x04 | A-Z, 0-9, space, -.$/%+ |
//! | ITF | 0x05 | even number of digits |
//! | Codabar | 0x06 | 0-9, A-D, -$:/.+ |
//! | Code128 | 0x07 | full ASCII |
//!
//! ## Usage
//!
//! Barcodes are printed in a configure-then-print sequence:
//!
//! ```
//! use chispa::protocol::barcode::{self, Symbology, TextPosition};
//!
//! let mut data = Vec::new();
//! data.extend(barcode::width(3));
//! data.extend(barcode::height(160));
//! data.extend(barcode::text_position(TextPosition::Below));
//! data.extend(barcode::print(Symbology::Ean13, b"5000157024923"));
//! ```

use super::commands::GS;

// ============================================================================
// SYMBOLOGY AND TEXT POSITION
// ============================================================================

/// 1D barcode symbology codes
///
/// The discriminant is the mode byte sent in `GS k m`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Symbology {
    /// UPC-A (12 digits)
    UpcA = 0x00,
    /// UPC-E (compressed UPC-A)
    UpcE = 0x01,
    /// JAN-13 / EAN-13
    Ean13 = 0x02,
    /// JAN-8 / EAN-8
    Ean8 = 0x03,
    /// Code39 (A-Z, 0-9, space, -.$/%+)
    Code39 = 0x04,
    /// Interleaved 2 of 5 (numeric pairs)
    Itf = 0x05,
    /// Codabar
    Codabar = 0x06,
    /// Code128 (full ASCII)
    Code128 = 0x07,
}

/// Human-readable interpretation (HRI) text placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextPosition {
    /// No text
    None = 0x00,
    /// Text above the bars
    Above = 0x01,
    /// Text below the bars
    #[default]
    Below = 0x02,
    /// Text above and below
    Both = 0x03,
}

// ============================================================================
// CONFIGURATION COMMANDS
// ============================================================================

/// # Set Barcode Module Width (GS w n)
///
/// Sets the narrow-bar width in dots. The device accepts 2 (narrow),
/// 3 (medium, power-on default) or 4 (wide); out-of-range values are
/// clamped before transmission.
///
/// ## Protocol Details
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 77 n |
/// | Decimal | 29 119 n |
///
/// ## Example
///
/// ```
/// use chispa::protocol::barcode;
///
/// assert_eq!(barcode::width(3), vec![0x1D, 0x77, 3]);
/// assert_eq!(barcode::width(9), vec![0x1D, 0x77, 4]); // clamped
/// ```
pub fn width(n: u8) -> Vec<u8> {
    vec![GS, b'w', n.clamp(2, 4)]
}

/// # Set Barcode Height (GS h n)
///
/// Bar height in dots. Power-on default is 162.
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 68 n |
/// | Decimal | 29 104 n |
#[inline]
pub fn height(n: u8) -> Vec<u8> {
    vec![GS, b'h', n]
}

/// # Set HRI Text Position (GS H n)
///
/// | Format  | Bytes   |
/// |---------|---------|
/// | Hex     | 1D 48 n |
/// | Decimal | 29 72 n |
#[inline]
pub fn text_position(position: TextPosition) -> Vec<u8> {
    vec![GS, b'H', position as u8]
}

// ============================================================================
// PRINT COMMAND
// ============================================================================

/// # Print Barcode (GS k m data... NUL)
///
/// Sends the symbology mode byte followed by the raw ASCII payload and a
/// null terminator. The firmware validates the payload against the
/// symbology's character set; invalid payloads are silently dropped by the
/// device (no feedback channel exists).
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | GS k m d1...dk NUL |
/// | Hex     | 1D 6B m d1...dk 00 |
///
/// ## Example
///
/// ```
/// use chispa::protocol::barcode::{self, Symbology};
///
/// let cmd = barcode::print(Symbology::Code39, b"9913");
/// assert_eq!(cmd, vec![0x1D, 0x6B, 0x04, b'9', b'9', b'1', b'3', 0x00]);
/// ```
pub fn print(symbology: Symbology, payload: &[u8]) -> Vec<u8> {
    let mut cmd = Vec::with_capacity(4 + payload.len());
    cmd.push(GS);
    cmd.push(b'k');
    cmd.push(symbology as u8);
    cmd.extend_from_slice(payload);
    cmd.push(0x00);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_in_range() {
        assert_eq!(width(2), vec![0x1D, 0x77, 2]);
        assert_eq!(width(3), vec![0x1D, 0x77, 3]);
        assert_eq!(width(4), vec![0x1D, 0x77, 4]);
    }

    #[test]
    fn test_width_clamps() {
        assert_eq!(width(0), vec![0x1D, 0x77, 2]);
        assert_eq!(width(1), vec![0x1D, 0x77, 2]);
        assert_eq!(width(5), vec![0x1D, 0x77, 4]);
        assert_eq!(width(255), vec![0x1D, 0x77, 4]);
    }

    #[test]
    fn test_height() {
        assert_eq!(height(162), vec![0x1D, 0x68, 162]);
        assert_eq!(height(1), vec![0x1D, 0x68, 1]);
    }

    #[test]
    fn test_text_position() {
        assert_eq!(text_position(TextPosition::None), vec![0x1D, 0x48, 0x00]);
        assert_eq!(text_position(TextPosition::Above), vec![0x1D, 0x48, 0x01]);
        assert_eq!(text_position(TextPosition::Below), vec![0x1D, 0x48, 0x02]);
        assert_eq!(text_position(TextPosition::Both), vec![0x1D, 0x48, 0x03]);
    }

    #[test]
    fn test_print_frame() {
        let cmd = print(Symbology::Ean13, b"5000157024923");
        assert_eq!(&cmd[0..3], &[0x1D, 0x6B, 0x02]);
        assert_eq!(&cmd[3..16], b"5000157024923");
        assert_eq!(cmd[16], 0x00);
        assert_eq!(cmd.len(), 17);
    }

    #[test]
    fn test_print_empty_payload() {
        // Degenerate but well-formed: mode byte then immediate terminator
        assert_eq!(print(Symbology::Code128, b""), vec![0x1D, 0x6B, 0x07, 0x00]);
    }

    #[test]
    fn test_symbology_mode_bytes() {
        assert_eq!(Symbology::UpcA as u8, 0x00);
        assert_eq!(Symbology::UpcE as u8, 0x01);
        assert_eq!(Symbology::Ean13 as u8, 0x02);
        assert_eq!(Symbology::Ean8 as u8, 0x03);
        assert_eq!(Symbology::Code39 as u8, 0x04);
        assert_eq!(Symbology::Itf as u8, 0x05);
        assert_eq!(Symbology::Codabar as u8, 0x06);
        assert_eq!(Symbology::Code128 as u8, 0x07);
    }
}
