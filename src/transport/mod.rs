//! # Printer Transport Layer
//!
//! This module provides the byte sink the encoder writes to.
//!
//! ## Available Transports
//!
//! - [`serial`]: RS-232 / USB-serial link in raw mode
//!
//! Anything implementing `std::io::Write` works as a channel — the raster
//! pipeline and command builders never assume a real device, which is how
//! the tests drive them against in-memory buffers.

pub mod serial;

pub use serial::SerialTransport;
