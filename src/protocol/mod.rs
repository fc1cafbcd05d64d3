//! # CBM1000 Protocol Implementation
//!
//! This module provides low-level command builders for the ESC/GS command
//! set understood by Citizen CBM1000-class receipt microprinters.
//!
//! ## Module Structure
//!
//! - [`commands`]: Line pitch, buzzer, cutter, paper feed
//! - [`text`]: Character styling (underline, emphasis, fonts, sizing)
//! - [`barcode`]: Firmware-rendered 1D barcodes
//! - [`graphics`]: Bit-image band framing
//!
//! ## Usage Example
//!
//! ```
//! use chispa::protocol::{commands, text, barcode};
//!
//! // Build a simple print sequence
//! let mut data = Vec::new();
//!
//! data.extend(text::emphasis(true));
//! data.extend(b"RECEIPT\r\n");
//! data.extend(text::emphasis(false));
//!
//! data.extend(barcode::print(barcode::Symbology::Code39, b"9913"));
//!
//! data.extend(commands::feed(8));
//! data.extend(commands::cut_partial());
//!
//! // Send `data` to printer via transport...
//! ```
//!
//! ## Design Note
//!
//! Every builder returns one complete frame as a `Vec<u8>` and holds no
//! state between calls. Callers compose frames and hand each one to the
//! output channel as a single atomic write; no frame depends on a prior
//! frame having been seen by the device.

pub mod barcode;
pub mod commands;
pub mod graphics;
pub mod text;
