//! # as289r2 CLI
//!
//! Command-line interface for the AS-289R2 thermal printer.
//!
//! ## Usage
//!
//! ```bash
//! # Print the demo page (fonts, sizes, QR, barcode, bitmap)
//! as289r2 --variant selector-byte demo
//!
//! # Print a line of text, double width
//! as289r2 --variant selector-byte text --double-width "AS-289R2"
//!
//! # Print a QR code
//! as289r2 --variant selector-byte qr --level H "https://example.com"
//!
//! # Print an image
//! as289r2 --variant nul-terminated image logo.png --dither threshold
//!
//! # Replay a JSON job, showing the bytes instead of printing
//! as289r2 --variant selector-byte --dry-run job receipt.json
//!
//! # Slow link: 256-byte writes with a 50 ms pause between them
//! as289r2 --variant selector-byte --chunk-size 256 --chunk-delay-ms 50 image logo.png
//! ```
//!
//! Set `RUST_LOG=as289r2=trace` to log every encoded command.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use as289r2::{
    PrinterError,
    job::Job,
    printer::{Printer, PrinterConfig},
    protocol::{
        ProtocolVariant,
        barcode::{BarcodeKind, QrErrorLevel},
        graphics::BitmapMode,
        text::{AnkFont, KanjiFont, ScriptMode},
    },
    render::{bitmap::Bitmap, dither::DitheringAlgorithm},
    transport::{RecordingTransport, SerialTransport, Transport, serial},
};

/// as289r2 - AS-289R2 thermal printer utility
#[derive(Parser, Debug)]
#[command(name = "as289r2")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Protocol framing of the target firmware (selector-byte or nul-terminated)
    #[arg(long, global = true)]
    variant: Option<ProtocolVariant>,

    /// Serial device path
    #[arg(long, global = true, default_value = serial::DEFAULT_DEVICE)]
    device: PathBuf,

    /// Serial baud rate
    #[arg(long, global = true, default_value_t = PrinterConfig::AS289R2.baud)]
    baud: u32,

    /// Largest single write to the serial device, in bytes
    #[arg(long, global = true, default_value_t = serial::CHUNK_SIZE)]
    chunk_size: usize,

    /// Pause between serial chunks, for links that drop bytes under load
    #[arg(long, global = true, default_value_t = 0)]
    chunk_delay_ms: u64,

    /// Print the encoded bytes as hex instead of sending them
    #[arg(long, global = true)]
    dry_run: bool,

    /// Skip the initialize command sent before every run
    #[arg(long, global = true)]
    no_init: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a demo page exercising fonts, sizes, barcodes and a bitmap
    Demo,

    /// Print a line of text
    Text {
        text: String,

        /// Double width characters
        #[arg(long)]
        double_width: bool,

        /// Double height characters
        #[arg(long)]
        double_height: bool,

        /// Use the 8x16 ANK font
        #[arg(long)]
        small: bool,

        /// Line feeds after the text
        #[arg(long, default_value_t = 1)]
        feed: u32,
    },

    /// Print a QR code
    Qr {
        data: String,

        /// Error correction level: L, M, Q or H
        #[arg(long, default_value = "M")]
        level: String,
    },

    /// Print a 1D barcode
    Barcode {
        data: String,

        /// Symbology: upc-a, jan13, jan8, code39, itf, codabar
        #[arg(long, default_value = "code39")]
        kind: String,
    },

    /// Print an image file, scaled to 384 dots
    Image {
        path: PathBuf,

        /// Dithering: bayer or threshold
        #[arg(long, default_value = "bayer")]
        dither: DitheringAlgorithm,
    },

    /// Replay a JSON job file
    Job { path: PathBuf },

    /// List protocol variants and exit
    Variants,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), PrinterError> {
    let cli = Cli::parse();

    if let Commands::Variants = cli.command {
        for v in ProtocolVariant::ALL {
            println!("{}", v);
        }
        return Ok(());
    }

    let variant = cli.variant.ok_or_else(|| {
        PrinterError::ContractViolation(
            "--variant is required (selector-byte or nul-terminated); run `as289r2 variants`"
                .to_string(),
        )
    })?;

    if cli.dry_run {
        let mut printer = Printer::new(RecordingTransport::new(), variant);
        execute(&mut printer, &cli)?;
        for chunk in printer.transport().writes() {
            println!("{}", hex(chunk));
        }
    } else {
        let mut transport = SerialTransport::open(&cli.device, cli.baud)?;
        transport.set_chunk_size(cli.chunk_size);
        transport.set_chunk_delay(Duration::from_millis(cli.chunk_delay_ms));
        let mut printer = Printer::new(transport, variant);
        execute(&mut printer, &cli)?;
        info!(device = %cli.device.display(), "sent");
        println!("Printed successfully!");
    }

    Ok(())
}

fn execute<T: Transport>(printer: &mut Printer<T>, cli: &Cli) -> Result<(), PrinterError> {
    if !cli.no_init {
        printer.initialize()?;
    }

    match &cli.command {
        Commands::Demo => demo(printer)?,
        Commands::Text {
            text,
            double_width,
            double_height,
            small,
            feed,
        } => {
            if *small {
                printer.set_ank_font(AnkFont::Size8x16)?;
            }
            if *double_width {
                printer.set_double_size_width()?;
            }
            if *double_height {
                printer.set_double_size_height()?;
            }
            printer.print_text(text)?;
            printer.put_line_feed(*feed)?;
            if *double_height {
                printer.clear_double_size_height()?;
            }
            if *double_width {
                printer.clear_double_size_width()?;
            }
            if *small {
                printer.set_ank_font(AnkFont::default())?;
            }
        }
        Commands::Qr { data, level } => {
            printer.print_qr_code(parse_qr_level(level)?, data.as_bytes())?;
            printer.put_line_feed(2)?;
        }
        Commands::Barcode { data, kind } => {
            printer.print_barcode(parse_barcode_kind(kind)?, data.as_bytes())?;
            printer.put_line_feed(2)?;
        }
        Commands::Image { path, dither } => {
            let bitmap = Bitmap::open(path, *dither)?;
            printer.print_bitmap_image(BitmapMode::LinePrint, bitmap.lines, &bitmap.data)?;
        }
        Commands::Job { path } => {
            let text = fs::read_to_string(path)?;
            Job::from_json(&text)?.run(printer)?;
        }
        Commands::Variants => {}
    }

    Ok(())
}

/// Demo page modelled on the shield's sample sketch
fn demo<T: Transport>(printer: &mut Printer<T>) -> Result<(), PrinterError> {
    printer.put_line_feed(2)?;
    printer.print_text("** Thermal Printer Shield **\r\r")?;

    printer.set_double_size_width()?;
    printer.print_text("  AS-289R2\r\r")?;
    printer.clear_double_size_width()?;

    printer.print_text("日本語文字列の印字テスト:24x24\r")?;
    printer.set_kanji_font(KanjiFont::Size16x16)?;
    printer.set_ank_font(AnkFont::Size8x16)?;
    printer.print_text("日本語文字列の印字テスト:16x16\r\r")?;
    printer.set_kanji_font(KanjiFont::default())?;
    printer.set_ank_font(AnkFont::default())?;

    printer.set_double_size_width()?;
    printer.print_text("ABCDEFG 0123456789\r")?;
    printer.clear_double_size_width()?;

    printer.set_double_size_height()?;
    printer.print_text("ABCDEFG 0123456789\r")?;
    printer.clear_double_size_height()?;

    printer.print_text("H")?;
    printer.set_script(ScriptMode::Sub)?;
    printer.print_text("2")?;
    printer.clear_script()?;
    printer.print_text("O\r\r")?;

    printer.print_qr_code(QrErrorLevel::M, b"AS-289R2 thermal printer")?;
    printer.put_line_feed(2)?;

    printer.set_barcode_height(60)?;
    printer.print_barcode(BarcodeKind::Code39, b"AS289R2")?;
    printer.default_barcode_height()?;
    printer.put_line_feed(2)?;

    let gradient = Bitmap::from_fn(48, |x, _y| {
        x as f32 / PrinterConfig::AS289R2.width_dots as f32
    });
    printer.print_bitmap_image(BitmapMode::LinePrint, gradient.lines, &gradient.data)?;
    printer.put_line_feed(4)?;

    Ok(())
}

fn parse_qr_level(s: &str) -> Result<QrErrorLevel, PrinterError> {
    match s.to_uppercase().as_str() {
        "L" => Ok(QrErrorLevel::L),
        "M" => Ok(QrErrorLevel::M),
        "Q" => Ok(QrErrorLevel::Q),
        "H" => Ok(QrErrorLevel::H),
        other => Err(PrinterError::ContractViolation(format!(
            "Unknown QR level '{}'. Use L, M, Q or H",
            other
        ))),
    }
}

fn parse_barcode_kind(s: &str) -> Result<BarcodeKind, PrinterError> {
    match s.to_lowercase().replace('_', "-").as_str() {
        "upc-a" | "upca" => Ok(BarcodeKind::UpcA),
        "jan13" | "ean13" => Ok(BarcodeKind::Jan13),
        "jan8" | "ean8" => Ok(BarcodeKind::Jan8),
        "code39" => Ok(BarcodeKind::Code39),
        "itf" => Ok(BarcodeKind::Itf),
        "codabar" | "nw7" => Ok(BarcodeKind::Codabar),
        other => Err(PrinterError::ContractViolation(format!(
            "Unknown barcode kind '{}'",
            other
        ))),
    }
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
