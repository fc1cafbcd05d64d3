//! # Raster Encoding Pipeline
//!
//! This module converts an ASCII PBM bitmap into the printer's dot-column
//! wire format, band by band. It is the heart of the crate: everything else
//! is either a command builder or a byte sink.
//!
//! ## Band Tiling
//!
//! The `ESC *` bit-image command prints a fixed-height horizontal strip, so
//! the image is consumed in bands of 8 (low resolution) or 24 (high
//! resolution) source rows. The line pitch is pinned to 24/180" before the
//! first band so consecutive bands tile with no vertical gap, and restored
//! to the power-on default after the last one.
//!
//! ```text
//! y = 0   ┌────────────────┐
//!         │    band 0      │  ESC * ... CR LF
//! y = 24  ├────────────────┤
//!         │    band 1      │  ESC * ... CR LF
//! y = 48  ├────────────────┤
//!         │ band 2 (short) │  bottom rows padded with clear pixels
//!         └────────────────┘
//! ```
//!
//! ## Dot Packing
//!
//! Each dot-column byte carries 8 vertical dots, most significant bit at
//! the top: sub-row `i` of a band lands in bit `0x80 >> (i % 8)` of byte
//! `i / 8` of its column group. High resolution maps one source column to
//! one 3-byte device column; low resolution packs a single byte per column
//! and then replicates it into the two neighbouring device columns, which
//! triples the horizontal dot width.
//!
//! ## Justification
//!
//! A narrower-than-page image can be centered or right-justified. Padding
//! is emitted as literal space characters before each band, relying on the
//! default font's 12-dot space cell — an inherited approximation, not a
//! device guarantee (see [`PrinterConfig::char_width_dots`]).

use std::io::{BufRead, Write};

use log::debug;

use crate::error::ChispaError;
use crate::pbm::PbmReader;
use crate::printer::PrinterConfig;
use crate::protocol::commands::{self, CR, LF};
use crate::protocol::graphics::{self, DENSITY_8_DOUBLE, DENSITY_24_DOUBLE};

// ============================================================================
// SELECTORS
// ============================================================================

/// Raster density selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// 8 dot-rows per band, each source pixel tripled horizontally.
    /// Maximum image width: 192 source columns (576 device dot-columns).
    Low,
    /// 24 dot-rows per band, 1:1 horizontal mapping.
    /// Maximum image width: 576 source columns.
    High,
}

impl Resolution {
    /// Source rows consumed (and vertical dots printed) per band
    pub fn row_height(self) -> u32 {
        match self {
            Resolution::Low => 8,
            Resolution::High => 24,
        }
    }

    /// `ESC *` density sub-code
    pub fn density(self) -> u8 {
        match self {
            Resolution::Low => DENSITY_8_DOUBLE,
            Resolution::High => DENSITY_24_DOUBLE,
        }
    }

    /// Device dot-columns occupied by an image of the given source width
    pub fn device_width(self, width: u32) -> u32 {
        match self {
            Resolution::Low => width * 3,
            Resolution::High => width,
        }
    }

    /// Maximum supported image width in source columns
    pub fn max_width(self, config: &PrinterConfig) -> u16 {
        match self {
            Resolution::Low => config.low_res_max_width,
            Resolution::High => config.high_res_max_width,
        }
    }
}

/// Horizontal placement of a narrower-than-page image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Justify {
    #[default]
    Left,
    Center,
    Right,
}

impl Justify {
    /// Number of space characters to emit before each band.
    ///
    /// One space covers [`PrinterConfig::char_width_dots`] device
    /// dot-columns at the default font and size. The count depends only on
    /// the image's declared width and the resolution, so every band of one
    /// conversion gets the same padding.
    pub fn pad_spaces(
        self,
        config: &PrinterConfig,
        resolution: Resolution,
        width: u32,
    ) -> usize {
        let page = u32::from(config.width_dots);
        let dev = resolution.device_width(width).min(page);
        let slack = page - dev;
        let cell = u32::from(config.char_width_dots);
        let dots = match self {
            Justify::Left => 0,
            Justify::Center => slack / 2,
            Justify::Right => slack,
        };
        (dots / cell) as usize
    }
}

// ============================================================================
// ENCODER
// ============================================================================

/// Encode a parsed PBM and stream it to `out` as bit-image bands.
///
/// The image is checked against the resolution's width limit before any
/// byte is written; an oversize image fails with
/// [`ChispaError::WidthExceeded`] and leaves the channel untouched. After
/// the check, output proceeds band by band with a single reused band
/// buffer, so memory stays bounded regardless of image height.
///
/// ## Failure Semantics
///
/// Parse errors from the pixel stream and write errors on the channel stop
/// the conversion at the point of failure. Bands already sent are not
/// rolled back (the device has no undo), and the line pitch is only
/// restored on the normal completion path.
pub fn print_pbm<R: BufRead, W: Write>(
    out: &mut W,
    config: &PrinterConfig,
    pbm: &mut PbmReader<R>,
    resolution: Resolution,
    justify: Justify,
) -> Result<(), ChispaError> {
    let width = pbm.width();
    let height = pbm.height();

    let max = resolution.max_width(config);
    if width > u32::from(max) {
        return Err(ChispaError::WidthExceeded {
            width,
            max,
            resolution,
        });
    }

    let row_height = resolution.row_height();
    let columns = resolution.device_width(width) as u16;
    let pad = justify.pad_spaces(config, resolution, width);

    debug!(
        "rasterizing {}x{} at {:?}: {} columns, {} pad spaces, {} bands",
        width,
        height,
        resolution,
        columns,
        pad,
        height.div_ceil(row_height)
    );

    // One band buffer for the whole conversion: 3 bytes per source column
    // in both modes. Every byte is explicitly assigned each band.
    let mut band = vec![0u8; width as usize * 3];
    let spaces = vec![b' '; pad];

    // Pin the line pitch so bands tile without gaps.
    out.write_all(&commands::line_spacing(24))?;

    let mut y = 0;
    while y < height {
        for i in 0..row_height {
            let bit = 0x80 >> (i % 8);
            let offset = (i / 8) as usize;
            let in_image = y + i < height;

            for x in 0..width as usize {
                // Rows past the bottom edge pad the final band with clear
                // pixels so every band has the same byte length.
                let mark = in_image && pbm.next_pixel()?;

                let j = x * 3 + offset;
                if mark {
                    band[j] |= bit;
                } else {
                    band[j] &= !bit;
                }

                if resolution == Resolution::Low {
                    band[j + 1] = band[j];
                    band[j + 2] = band[j];
                }
            }
        }

        if pad > 0 {
            out.write_all(&spaces)?;
        }

        out.write_all(&graphics::bit_image(resolution.density(), columns, &band))?;
        out.write_all(&[CR, LF])?;

        debug!("band at y={} sent ({} data bytes)", y, band.len());
        y += row_height;
    }

    out.write_all(&commands::line_spacing_default())?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::CBM1000;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    /// Encode a PBM source string into an in-memory sink.
    fn encode(input: &str, resolution: Resolution, justify: Justify) -> Vec<u8> {
        let mut out = Vec::new();
        let mut pbm = PbmReader::new(Cursor::new(input.as_bytes())).expect("valid PBM");
        print_pbm(&mut out, &CBM1000, &mut pbm, resolution, justify).expect("encode");
        out
    }

    fn encode_err(input: &str, resolution: Resolution, justify: Justify) -> (ChispaError, usize) {
        let mut out = Vec::new();
        let mut pbm = PbmReader::new(Cursor::new(input.as_bytes())).expect("valid PBM");
        let err = print_pbm(&mut out, &CBM1000, &mut pbm, resolution, justify).unwrap_err();
        (err, out.len())
    }

    /// Build a PBM source with every pixel clear.
    fn blank_pbm(width: u32, height: u32) -> String {
        let mut s = format!("P1\n# blank\n{} {}\n", width, height);
        for _ in 0..height {
            for _ in 0..width {
                s.push('0');
            }
            s.push('\n');
        }
        s
    }

    /// Check the line-pitch bracket around the stream and return the band
    /// body between the two pitch commands.
    fn strip_pitch(stream: &[u8]) -> &[u8] {
        assert_eq!(&stream[0..3], &[0x1B, 0x33, 24], "line pitch prefix");
        assert_eq!(&stream[stream.len() - 2..], &[0x1B, 0x32], "pitch restore");
        &stream[3..stream.len() - 2]
    }

    // ---- Scenario 1: 2x2 image, High, Left ----

    #[test]
    fn test_two_by_two_high_left() {
        let out = encode("P1\n#\n2 2\n1 0\n0 1\n", Resolution::High, Justify::Left);

        let body = strip_pitch(&out);
        // One band: header, 6 data bytes, CR LF. No padding.
        assert_eq!(&body[0..5], &[0x1B, 0x2A, 33, 2, 0]);
        // Column 0: row 0 set. Column 1: row 1 set. Lower 16 dots clear.
        assert_eq!(&body[5..11], &[0x80, 0x00, 0x00, 0x40, 0x00, 0x00]);
        assert_eq!(&body[11..], &[0x0D, 0x0A]);
    }

    // ---- Scenario 2: 12x8 image, Low, Center ----

    #[test]
    fn test_twelve_by_eight_low_center() {
        let mut src = String::from("P1\n#\n12 8\n");
        for _ in 0..8 {
            src.push_str("101010101010\n");
        }
        let out = encode(&src, Resolution::Low, Justify::Center);

        let body = strip_pitch(&out);
        // Device width 36; pad = (576 - 36) / 2 / 12 = 22 spaces.
        assert_eq!(&body[0..22], &[b' '; 22][..]);
        assert_eq!(&body[22..27], &[0x1B, 0x2A, 1, 36, 0]);

        let band = &body[27..27 + 36];
        // Every triple-byte group is identical (3x horizontal replication).
        for x in 0..12 {
            assert_eq!(band[x * 3 + 1], band[x * 3]);
            assert_eq!(band[x * 3 + 2], band[x * 3]);
        }
        // Alternating columns: all 8 rows set, then all clear.
        assert_eq!(band[0], 0xFF);
        assert_eq!(band[3], 0x00);
        assert_eq!(&body[27 + 36..], &[0x0D, 0x0A]);
    }

    // ---- Scenario 3: oversize image rejected before any write ----

    #[test]
    fn test_width_limit_low() {
        let (err, written) = encode_err(&blank_pbm(600, 1), Resolution::Low, Justify::Left);
        match err {
            ChispaError::WidthExceeded { width, max, .. } => {
                assert_eq!(width, 600);
                assert_eq!(max, 192);
            }
            other => panic!("expected WidthExceeded, got {:?}", other),
        }
        assert_eq!(written, 0, "no bytes may reach the channel");
    }

    #[test]
    fn test_width_limit_high() {
        let (err, written) = encode_err(&blank_pbm(600, 1), Resolution::High, Justify::Left);
        assert!(matches!(err, ChispaError::WidthExceeded { max: 576, .. }));
        assert_eq!(written, 0);
    }

    #[test]
    fn test_width_at_limit_accepted() {
        // 192 columns is exactly the low-resolution limit
        let out = encode(&blank_pbm(192, 1), Resolution::Low, Justify::Right);
        // Right-justified full-width image: (576 - 576) / 12 = 0 pad spaces
        let body = strip_pitch(&out);
        assert_eq!(&body[0..2], &[0x1B, 0x2A]);
    }

    // ---- Round-trip: packed bits reproduce the source pixels ----

    #[test]
    fn test_band_round_trip_with_bottom_padding() {
        // 6x10 at High: one 24-row band, rows 10..24 synthesized clear.
        let width = 6usize;
        let height = 10usize;
        let mut src = format!("P1\n#\n{} {}\n", width, height);
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let set = (x + y) % 3 == 0;
                pixels.push(set);
                src.push(if set { '1' } else { '0' });
            }
            src.push('\n');
        }

        let out = encode(&src, Resolution::High, Justify::Left);
        let body = strip_pitch(&out);
        let band = &body[5..5 + width * 3];

        for i in 0..24 {
            let bit = 0x80u8 >> (i % 8);
            for x in 0..width {
                let expected = if i < height {
                    pixels[i * width + x]
                } else {
                    false // synthesized padding row
                };
                let actual = band[x * 3 + i / 8] & bit != 0;
                assert_eq!(actual, expected, "pixel ({}, {})", x, i);
            }
        }
    }

    // ---- Band length and padding are uniform across bands ----

    #[test]
    fn test_multi_band_uniform_shape() {
        // 24x20 at Low: 8-row bands, 3 bands, last one 4 rows short.
        let out = encode(&blank_pbm(24, 20), Resolution::Low, Justify::Center);
        let body = strip_pitch(&out);

        // pad = (576 - 72) / 2 / 12 = 21 spaces per band
        let band_stride = 21 + 5 + 72 + 2;
        assert_eq!(body.len(), band_stride * 3);

        for b in 0..3 {
            let band = &body[b * band_stride..(b + 1) * band_stride];
            assert_eq!(&band[0..21], &[b' '; 21][..], "band {} padding", b);
            assert_eq!(&band[21..26], &[0x1B, 0x2A, 1, 72, 0], "band {} header", b);
            assert_eq!(&band[band_stride - 2..], &[0x0D, 0x0A], "band {} CRLF", b);
        }
    }

    #[test]
    fn test_no_stale_bits_across_bands() {
        // First band all marks, second band all clear: the reused buffer
        // must not leak band 0's bits into band 1.
        let mut src = String::from("P1\n#\n4 16\n");
        for _ in 0..8 {
            src.push_str("1111\n");
        }
        for _ in 0..8 {
            src.push_str("0000\n");
        }
        let out = encode(&src, Resolution::Low, Justify::Left);
        let body = strip_pitch(&out);

        let stride = 5 + 12 + 2;
        let first = &body[5..5 + 12];
        let second = &body[stride + 5..stride + 5 + 12];
        assert_eq!(first, &[0xFF; 12][..]);
        assert_eq!(second, &[0x00; 12][..]);
    }

    // ---- Determinism ----

    #[test]
    fn test_idempotent_encoding() {
        let mut src = String::from("P1\n#\n8 30\n");
        for y in 0..30 {
            for x in 0..8 {
                src.push(if (x * y) % 5 < 2 { '1' } else { '0' });
            }
            src.push('\n');
        }
        let a = encode(&src, Resolution::High, Justify::Right);
        let b = encode(&src, Resolution::High, Justify::Right);
        assert_eq!(a, b);
    }

    // ---- Justification arithmetic ----

    #[test]
    fn test_pad_spaces_arithmetic() {
        assert_eq!(Justify::Left.pad_spaces(&CBM1000, Resolution::Low, 12), 0);
        assert_eq!(Justify::Center.pad_spaces(&CBM1000, Resolution::Low, 12), 22);
        assert_eq!(Justify::Right.pad_spaces(&CBM1000, Resolution::Low, 12), 45);
        assert_eq!(Justify::Center.pad_spaces(&CBM1000, Resolution::High, 576), 0);
        assert_eq!(Justify::Center.pad_spaces(&CBM1000, Resolution::High, 100), 19);
        assert_eq!(Justify::Right.pad_spaces(&CBM1000, Resolution::High, 100), 39);
    }

    // ---- Malformed source leaves the channel untouched ----

    #[test]
    fn test_truncated_source_fails_mid_stream() {
        // Header promises 4x4 but only one row of pixels is present; the
        // failure surfaces while the first band is being packed, before
        // its graphics frame is written.
        let mut out = Vec::new();
        let mut pbm =
            PbmReader::new(Cursor::new(&b"P1\n#\n4 4\n1111\n"[..])).expect("valid header");
        let err =
            print_pbm(&mut out, &CBM1000, &mut pbm, Resolution::High, Justify::Left).unwrap_err();
        assert!(matches!(err, ChispaError::Format(_)));
        // Only the line-pitch prefix was sent; no bit-image frame.
        assert_eq!(out, vec![0x1B, 0x33, 24]);
    }
}
