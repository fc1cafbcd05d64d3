//! # Chispa CLI
//!
//! Command-line interface for the receipt microprinter.
//!
//! ## Usage
//!
//! ```bash
//! # Print the styled-text and barcode demo receipt
//! chispa demo
//!
//! # Print an ASCII PBM image, centered, at low resolution
//! chispa image qr_sample.pbm --resolution low --justify center
//!
//! # Print a line of text
//! chispa text "FUN WITH PEN PLOTTERS"
//!
//! # Print a barcode
//! chispa barcode 5000157024923 --symbology ean13
//!
//! # Use a different port or speed
//! chispa --device /dev/ttyACM0 --baud 19200 demo
//! ```

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use chispa::{
    ChispaError,
    pbm::PbmReader,
    printer::CBM1000,
    protocol::{barcode, commands, text},
    raster::{self, Justify, Resolution},
    transport::{SerialTransport, serial::DEFAULT_DEVICE},
};

/// Chispa - receipt microprinter utility
#[derive(Parser, Debug)]
#[command(name = "chispa")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer device path
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: String,

    /// Serial baud rate
    #[arg(long, global = true, default_value_t = CBM1000.default_baud)]
    baud: u32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a demo receipt exercising every text style and a barcode
    Demo,

    /// Print an ASCII PBM (P1) bitmap
    Image {
        /// Path to the PBM file
        file: PathBuf,

        /// Raster density
        #[arg(long, value_enum, default_value_t = ResolutionArg::High)]
        resolution: ResolutionArg,

        /// Horizontal placement on the page
        #[arg(long, value_enum, default_value_t = JustifyArg::Left)]
        justify: JustifyArg,
    },

    /// Print a line of text
    Text {
        /// The text to print
        message: String,
    },

    /// Print a 1D barcode
    Barcode {
        /// Barcode payload (ASCII)
        data: String,

        /// Symbology
        #[arg(long, value_enum, default_value_t = SymbologyArg::Code39)]
        symbology: SymbologyArg,

        /// Narrow-bar width in dots (2-4)
        #[arg(long, default_value_t = 3)]
        width: u8,

        /// Bar height in dots
        #[arg(long, default_value_t = 162)]
        height: u8,

        /// Human-readable text placement
        #[arg(long, value_enum, default_value_t = TextPositionArg::Below)]
        text_position: TextPositionArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ResolutionArg {
    Low,
    High,
}

impl From<ResolutionArg> for Resolution {
    fn from(arg: ResolutionArg) -> Self {
        match arg {
            ResolutionArg::Low => Resolution::Low,
            ResolutionArg::High => Resolution::High,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum JustifyArg {
    Left,
    Center,
    Right,
}

impl From<JustifyArg> for Justify {
    fn from(arg: JustifyArg) -> Self {
        match arg {
            JustifyArg::Left => Justify::Left,
            JustifyArg::Center => Justify::Center,
            JustifyArg::Right => Justify::Right,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SymbologyArg {
    UpcA,
    UpcE,
    Ean13,
    Ean8,
    Code39,
    Itf,
    Codabar,
    Code128,
}

impl From<SymbologyArg> for barcode::Symbology {
    fn from(arg: SymbologyArg) -> Self {
        match arg {
            SymbologyArg::UpcA => barcode::Symbology::UpcA,
            SymbologyArg::UpcE => barcode::Symbology::UpcE,
            SymbologyArg::Ean13 => barcode::Symbology::Ean13,
            SymbologyArg::Ean8 => barcode::Symbology::Ean8,
            SymbologyArg::Code39 => barcode::Symbology::Code39,
            SymbologyArg::Itf => barcode::Symbology::Itf,
            SymbologyArg::Codabar => barcode::Symbology::Codabar,
            SymbologyArg::Code128 => barcode::Symbology::Code128,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TextPositionArg {
    None,
    Above,
    Below,
    Both,
}

impl From<TextPositionArg> for barcode::TextPosition {
    fn from(arg: TextPositionArg) -> Self {
        match arg {
            TextPositionArg::None => barcode::TextPosition::None,
            TextPositionArg::Above => barcode::TextPosition::Above,
            TextPositionArg::Below => barcode::TextPosition::Below,
            TextPositionArg::Both => barcode::TextPosition::Both,
        }
    }
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ChispaError> {
    let cli = Cli::parse();

    let mut port = SerialTransport::open(&cli.device, cli.baud)?;

    match cli.command {
        Commands::Demo => print_demo(&mut port)?,

        Commands::Image {
            file,
            resolution,
            justify,
        } => {
            let mut pbm = PbmReader::new(BufReader::new(File::open(&file)?))?;
            raster::print_pbm(
                &mut port,
                &CBM1000,
                &mut pbm,
                resolution.into(),
                justify.into(),
            )?;
            port.write_all(&commands::feed(8))?;
            port.write_all(&commands::cut_partial())?;
        }

        Commands::Text { message } => {
            port.write_all(message.as_bytes())?;
            port.write_all(b"\r\n")?;
        }

        Commands::Barcode {
            data,
            symbology,
            width,
            height,
            text_position,
        } => {
            port.write_all(&barcode::width(width))?;
            port.write_all(&barcode::height(height))?;
            port.write_all(&barcode::text_position(text_position.into()))?;
            port.write_all(&barcode::print(symbology.into(), data.as_bytes()))?;
            port.write_all(&commands::feed(8))?;
            port.write_all(&commands::cut_partial())?;
        }
    }

    port.flush()?;
    Ok(())
}

/// Walk through every text style, then a barcode, then feed and cut.
fn print_demo<W: Write>(port: &mut W) -> Result<(), ChispaError> {
    port.write_all(b"Hello from the CBM1000 microprinter\r\n")?;
    port.write_all(&commands::buzzer())?;

    port.write_all(&text::font(text::Font::B))?;
    port.write_all(b"Hello, world (font B, condensed)\r\n")?;
    port.write_all(&text::font(text::Font::A))?;

    port.write_all(&text::underline(text::Underline::Single))?;
    port.write_all(b"Hello, world (single underline)\r\n")?;
    port.write_all(&text::underline(text::Underline::Double))?;
    port.write_all(b"Hello, world (double underline)\r\n")?;
    port.write_all(&text::underline(text::Underline::None))?;

    port.write_all(&text::double_print(true))?;
    port.write_all(b"Hello, world (double print)\r\n")?;
    port.write_all(&text::double_print(false))?;

    port.write_all(&text::emphasis(true))?;
    port.write_all(b"Hello, world (emphasis)\r\n")?;
    port.write_all(&text::emphasis(false))?;

    port.write_all(&text::upside_down(true))?;
    port.write_all(b"Hello, world (upside down)\r\n")?;
    port.write_all(&text::upside_down(false))?;

    port.write_all(&text::inverse(true))?;
    port.write_all(b"Hello, world (inverse black/white)\r\n")?;
    port.write_all(&text::inverse(false))?;

    port.write_all(&text::rotate(true))?;
    port.write_all(b"Hello, world (rotated)\r\n")?;
    port.write_all(&text::rotate(false))?;

    port.write_all(&text::char_size_double())?;
    port.write_all(b"Hello, world\r\n(double size)\r\n")?;
    port.write_all(&text::char_size(2, 1))?;
    port.write_all(b"Hello, world\r\n(double width)\r\n")?;
    port.write_all(&text::char_size(1, 2))?;
    port.write_all(b"Hello, world (double height)\r\n")?;
    port.write_all(&text::char_size_normal())?;

    port.write_all(&barcode::width(3))?;
    port.write_all(&barcode::height(160))?;
    port.write_all(&barcode::text_position(barcode::TextPosition::Below))?;
    port.write_all(&barcode::print(barcode::Symbology::Ean13, b"5000157024923"))?;

    port.write_all(&commands::feed(8))?;
    port.write_all(&commands::cut_partial())?;
    Ok(())
}
