//! # Bit-Image Graphics Commands
//!
//! This module frames raster band data for the CBM1000's `ESC *` bit-image
//! command. The actual pixel packing lives in [`crate::raster`]; this module
//! only knows how to wrap an already-packed band in its wire header.
//!
//! ## Bit-Image Mode (ESC *)
//!
//! The printer prints one horizontal band per command. Data is organized
//! column by column: each dot-column is 1 byte (8-dot densities) or 3 bytes
//! (24-dot densities), most significant bit at the top.
//!
//! ```text
//! Byte value 0x80 = top dot only      █
//! Byte value 0xFF = full column       █ (x8)
//! Byte value 0x01 = bottom dot only   █
//! ```
//!
//! ## Densities
//!
//! | Sub-code | Vertical dots | Horizontal density |
//! |----------|---------------|--------------------|
//! | 0 | 8 | single |
//! | 1 | 8 | double |
//! | 32 | 24 | single |
//! | 33 | 24 | double |
//!
//! Only the two double-density sub-codes are used by the raster pipeline;
//! they are exposed as constants here.
//!
//! ## Page Geometry
//!
//! | Property | Value |
//! |----------|-------|
//! | Printable width | 576 dot-columns |
//! | 8-dot band data | 1 byte per dot-column |
//! | 24-dot band data | 3 bytes per dot-column |

use super::commands::{ESC, u16_le};

/// 8 vertical dots per column, double horizontal density
pub const DENSITY_8_DOUBLE: u8 = 1;

/// 24 vertical dots per column, double horizontal density
pub const DENSITY_24_DOUBLE: u8 = 33;

/// # Bit-Image Band (ESC * d nL nH data...)
///
/// Frames one packed band for transmission. `columns` is the dot-column
/// count, little-endian; `data` holds 1 byte per column at 8-dot densities
/// and 3 bytes per column at 24-dot densities.
///
/// The frame does not include a line terminator: the caller follows each
/// band with `CR LF` to advance the print head past it.
///
/// ## Protocol Details
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC * d nL nH d1...dk |
/// | Hex     | 1B 2A d nL nH d1...dk |
/// | Decimal | 27 42 d nL nH d1...dk |
///
/// ## Example
///
/// ```
/// use chispa::protocol::graphics::{self, DENSITY_24_DOUBLE};
///
/// // Two dot-columns at 24-dot density: 6 data bytes
/// let data = [0x80, 0x00, 0x00, 0x00, 0x00, 0x00];
/// let cmd = graphics::bit_image(DENSITY_24_DOUBLE, 2, &data);
///
/// assert_eq!(&cmd[0..5], &[0x1B, 0x2A, 33, 2, 0]);
/// assert_eq!(cmd.len(), 5 + 6);
/// ```
pub fn bit_image(density: u8, columns: u16, data: &[u8]) -> Vec<u8> {
    let bytes_per_column = if density >= 32 { 3 } else { 1 };
    debug_assert!(
        data.len() == columns as usize * bytes_per_column,
        "Band data must be exactly columns * {} bytes. Expected {}, got {}",
        bytes_per_column,
        columns as usize * bytes_per_column,
        data.len()
    );

    let [nl, nh] = u16_le(columns);

    let mut cmd = Vec::with_capacity(5 + data.len());
    cmd.push(ESC);
    cmd.push(b'*');
    cmd.push(density);
    cmd.push(nl);
    cmd.push(nh);
    cmd.extend_from_slice(data);
    cmd
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_image_header_8_dot() {
        // 8-dot density: 1 byte per column
        let data = vec![0xAA; 36];
        let cmd = bit_image(DENSITY_8_DOUBLE, 36, &data);

        assert_eq!(cmd[0], 0x1B); // ESC
        assert_eq!(cmd[1], 0x2A); // '*'
        assert_eq!(cmd[2], 1); // density
        assert_eq!(cmd[3], 36); // nL
        assert_eq!(cmd[4], 0); // nH
        assert_eq!(cmd.len(), 5 + 36);
    }

    #[test]
    fn test_bit_image_header_24_dot() {
        let data = vec![0xFF; 2 * 3];
        let cmd = bit_image(DENSITY_24_DOUBLE, 2, &data);

        assert_eq!(&cmd[0..5], &[0x1B, 0x2A, 33, 2, 0]);
        assert_eq!(cmd.len(), 5 + 6);
    }

    #[test]
    fn test_bit_image_wide_column_count() {
        // Column count > 255 exercises the little-endian split
        let columns: u16 = 576;
        let data = vec![0x00; columns as usize * 3];
        let cmd = bit_image(DENSITY_24_DOUBLE, columns, &data);

        // 576 = 0x0240 -> [0x40, 0x02]
        assert_eq!(cmd[3], 0x40);
        assert_eq!(cmd[4], 0x02);
    }

    #[test]
    fn test_bit_image_preserves_data() {
        let data: Vec<u8> = (0..72).map(|i| i as u8).collect();
        let cmd = bit_image(DENSITY_8_DOUBLE, 72, &data);

        assert_eq!(&cmd[5..], &data[..]);
    }
}
