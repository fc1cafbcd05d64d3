//! # Printer Configurations
//!
//! Hardware profiles for supported microprinter models.

pub mod config;

pub use config::{CBM1000, PrinterConfig};
