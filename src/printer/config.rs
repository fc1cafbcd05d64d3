//! # Printer Configuration
//!
//! This module defines hardware specifications for supported receipt
//! microprinters.
//!
//! ## Supported Printers
//!
//! | Model | Width (dots) | Low-res max | High-res max | Baud |
//! |-------|--------------|-------------|--------------|------|
//! | CBM1000 | 576 | 192 px | 576 px | 38400 |
//!
//! ## Usage
//!
//! ```
//! use chispa::printer::CBM1000;
//!
//! println!("Print width: {} dots ({} text columns)",
//!          CBM1000.width_dots,
//!          CBM1000.width_dots / u16::from(CBM1000.char_width_dots));
//! ```

/// # Printer Configuration
///
/// Defines the hardware characteristics of a receipt microprinter.
///
/// ## Geometry
///
/// - **width_dots**: printable page width in dot-columns
/// - **char_width_dots**: width of one Font A character cell, the unit the
///   raster pipeline's space-character justification padding is measured in
/// - **low_res_max_width / high_res_max_width**: per-resolution image width
///   limits in source pixels (the low-resolution limit is a third of the
///   page because each source pixel is tripled)
///
/// ## Caveat
///
/// `char_width_dots` describes the default font at 1x magnification. The
/// justification math assumes the device is in that state; a receipt that
/// changes font or size before printing an image will mis-place padding.
/// The 12-dot figure is a documented assumption about the default font,
/// not a value the device can confirm (it has no feedback channel).
#[derive(Debug, Clone, Copy)]
pub struct PrinterConfig {
    /// Printer model name
    pub name: &'static str,

    /// Printable page width in dot-columns
    pub width_dots: u16,

    /// Font A character cell width in dots (one space = one pad unit)
    pub char_width_dots: u8,

    /// Maximum image width in source pixels at low resolution
    pub low_res_max_width: u16,

    /// Maximum image width in source pixels at high resolution
    pub high_res_max_width: u16,

    /// Factory serial link speed
    pub default_baud: u32,
}

/// Citizen CBM1000 microprinter (80mm paper, RS-232).
pub const CBM1000: PrinterConfig = PrinterConfig {
    name: "CBM1000",
    width_dots: 576,
    char_width_dots: 12,
    low_res_max_width: 192,
    high_res_max_width: 576,
    default_baud: 38_400,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cbm1000_geometry() {
        // Low resolution triples pixels, so its limit is a third of the page
        assert_eq!(CBM1000.low_res_max_width * 3, CBM1000.width_dots);
        assert_eq!(CBM1000.high_res_max_width, CBM1000.width_dots);
        // 48 text columns at Font A
        assert_eq!(CBM1000.width_dots / u16::from(CBM1000.char_width_dots), 48);
    }
}
