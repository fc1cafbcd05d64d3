//! # Chispa - Receipt Microprinter Driver
//!
//! Chispa is a Rust library for driving Citizen CBM1000-class receipt
//! microprinters over a serial link. It provides:
//!
//! - **Protocol implementation**: ESC/GS command builders
//! - **Raster pipeline**: ASCII PBM bitmaps re-encoded into dot-column
//!   bit-image bands at two resolutions, with justification
//! - **Transport**: raw-mode serial communication
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::{BufReader, Write};
//!
//! use chispa::{
//!     pbm::PbmReader,
//!     printer::CBM1000,
//!     protocol::commands,
//!     raster::{self, Justify, Resolution},
//!     transport::SerialTransport,
//! };
//!
//! // Open connection to printer
//! let mut transport = SerialTransport::open("/dev/ttyUSB1", CBM1000.default_baud)?;
//!
//! // Print a banner line
//! transport.write_all(b"FUN WITH PEN PLOTTERS\r\n")?;
//!
//! // Print a bitmap, centered, at low resolution
//! let mut pbm = PbmReader::new(BufReader::new(File::open("qr_sample.pbm")?))?;
//! raster::print_pbm(
//!     &mut transport,
//!     &CBM1000,
//!     &mut pbm,
//!     Resolution::Low,
//!     Justify::Center,
//! )?;
//!
//! // Feed past the tear bar and cut
//! transport.write_all(&commands::feed(8))?;
//! transport.write_all(&commands::cut_partial())?;
//!
//! # Ok::<(), chispa::error::ChispaError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`protocol`] | ESC/GS command builders |
//! | [`pbm`] | ASCII PBM bitmap parsing |
//! | [`raster`] | Band packing and justification |
//! | [`transport`] | Serial communication |
//! | [`printer`] | Printer hardware profiles |
//! | [`error`] | Error types |
//!
//! ## Design
//!
//! The device is treated as a pure byte sink: no status is read back, and
//! every operation is a one-shot command frame. The encoder is generic
//! over `std::io::Write`, so any buffer can stand in for the printer.

pub mod error;
pub mod pbm;
pub mod printer;
pub mod protocol;
pub mod raster;
pub mod transport;

// Re-exports for convenience
pub use error::ChispaError;
pub use pbm::PbmReader;
pub use printer::{CBM1000, PrinterConfig};
pub use raster::{Justify, Resolution};
pub use transport::SerialTransport;
