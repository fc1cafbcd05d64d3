//! # Serial Port Transport
//!
//! This module provides communication with the microprinter over an RS-232
//! (or USB-serial) link.
//!
//! ## TTY Configuration
//!
//! The port is opened read/write and switched to raw mode so binary command
//! data passes through unmodified:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR,
//!   ICRNL disabled
//! - **No flow control**: IXON/IXOFF/IXANY disabled — 0x11 (XON/DC1) and
//!   0x13 (XOFF/DC3) can appear in raster band data
//! - **No output processing**: OPOST disabled (the driver sends CR LF
//!   itself; the tty must not translate line endings)
//! - **8-bit characters**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN disabled
//!
//! Both directions are set to the same baud rate (factory default 38400).
//!
//! ## Write Semantics
//!
//! Writes are plain blocking `write_all` calls with no chunking, retry or
//! timeout: the printer asserts hardware flow control when its buffer
//! fills, and a write either completes or fails the conversion.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[cfg(unix)]
use std::os::unix::io::AsRawFd;

use log::debug;

use crate::error::ChispaError;

/// Default serial device path
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB1";

/// # Serial Printer Transport
///
/// Owns the open port. Exactly one transport should exist per device:
/// interleaving writers would corrupt the command stream, and the printer
/// has no framing recovery.
///
/// ## Example
///
/// ```no_run
/// use chispa::transport::serial::SerialTransport;
/// use chispa::protocol::commands;
/// use std::io::Write;
///
/// let mut transport = SerialTransport::open("/dev/ttyUSB1", 38_400)?;
/// transport.write_all(&commands::buzzer())?;
/// # Ok::<(), chispa::error::ChispaError>(())
/// ```
#[derive(Debug)]
pub struct SerialTransport {
    file: File,
}

impl SerialTransport {
    /// Open a serial connection to the printer.
    ///
    /// ## Parameters
    ///
    /// - `device`: path to the tty (e.g. "/dev/ttyUSB1", "/dev/ttyACM0")
    /// - `baud`: line speed; supported rates are 9600, 19200, 38400,
    ///   57600 and 115200
    ///
    /// ## Errors
    ///
    /// Returns [`ChispaError::Transport`] if the device can't be opened
    /// (missing, or needs the dialout group), if the baud rate is
    /// unsupported, or if TTY configuration fails.
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self, ChispaError> {
        let path = device.as_ref();

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| {
                ChispaError::Transport(format!("Failed to open {}: {}", path.display(), e))
            })?;

        configure_tty_raw(&file, baud)?;
        debug!("opened {} at {} baud, raw mode", path.display(), baud);

        Ok(Self { file })
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Map a numeric baud rate to its termios speed constant.
#[cfg(unix)]
fn speed_constant(baud: u32) -> Result<libc::speed_t, ChispaError> {
    match baud {
        9_600 => Ok(libc::B9600),
        19_200 => Ok(libc::B19200),
        38_400 => Ok(libc::B38400),
        57_600 => Ok(libc::B57600),
        115_200 => Ok(libc::B115200),
        other => Err(ChispaError::Transport(format!(
            "Unsupported baud rate: {}",
            other
        ))),
    }
}

/// Configure the port for raw binary transmission at the given speed.
#[cfg(unix)]
fn configure_tty_raw(file: &File, baud: u32) -> Result<(), ChispaError> {
    use std::mem::MaybeUninit;

    let fd = file.as_raw_fd();
    let speed = speed_constant(baud)?;

    // Get current terminal attributes
    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(ChispaError::Transport(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    // Input flags: disable all processing, including XON/XOFF flow control
    // (0x11/0x13 occur in binary raster data)
    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);

    // Output flags: disable post-processing
    termios.c_oflag &= !libc::OPOST;

    // Local flags: disable echo, canonical mode, signals
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);

    // Control flags: 8-bit characters, no parity
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    unsafe {
        libc::cfsetispeed(&mut termios, speed);
        libc::cfsetospeed(&mut termios, speed);
    }

    // Apply settings after pending output drains
    let result = unsafe { libc::tcsetattr(fd, libc::TCSAFLUSH, &termios) };
    if result != 0 {
        return Err(ChispaError::Transport(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &File, _baud: u32) -> Result<(), ChispaError> {
    // On non-Unix platforms, skip TTY configuration
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_device_path() {
        assert_eq!(DEFAULT_DEVICE, "/dev/ttyUSB1");
    }

    #[cfg(unix)]
    #[test]
    fn test_supported_baud_rates() {
        for baud in [9_600u32, 19_200, 38_400, 57_600, 115_200] {
            assert!(speed_constant(baud).is_ok(), "{} should map", baud);
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_unsupported_baud_rate() {
        let err = speed_constant(31_337).unwrap_err();
        assert!(matches!(err, ChispaError::Transport(_)));
    }

    #[test]
    fn test_open_missing_device() {
        let err = SerialTransport::open("/dev/does-not-exist-chispa", 38_400).unwrap_err();
        assert!(matches!(err, ChispaError::Transport(_)));
    }

    // Note: raw-mode configuration requires a real tty.
    // Integration tests should be run manually with a connected printer.
}
