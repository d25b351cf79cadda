//! # Print Jobs
//!
//! A print job is a JSON list of operations replayed in order through a
//! [`Printer`]. It lets scripts and other programs drive the printer
//! without linking the library.
//!
//! ```json
//! {
//!   "ops": [
//!     { "op": "initialize" },
//!     { "op": "set_double_size_width" },
//!     { "op": "text", "text": "AS-289R2\r" },
//!     { "op": "clear_double_size_width" },
//!     { "op": "qr_code", "level": "M", "data": "https://example.com" },
//!     { "op": "line_feed", "lines": 3 }
//!   ]
//! }
//! ```
//!
//! Execution stops at the first failing operation; operations before it
//! have already been sent.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PrinterError, Result};
use crate::printer::Printer;
use crate::protocol::barcode::{BarcodeKind, QrErrorLevel};
use crate::protocol::commands::PrintDirection;
use crate::protocol::graphics::BitmapMode;
use crate::protocol::text::{AnkFont, KanjiFont, ScriptMode};
use crate::protocol::variant::ProtocolVariant;
use crate::render::bitmap::Bitmap;
use crate::render::dither::DitheringAlgorithm;
use crate::transport::Transport;

/// One operation in a job file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum JobOp {
    Initialize,
    ClearBuffer,
    LineFeed { lines: u32 },
    PaperFeed { dots: u32 },
    PrintPosition { position: u32 },
    PrintDirection { direction: PrintDirection },
    LineSpacing { dots: u32 },
    DefaultLineSpacing,
    InterCharacterSpace { dots: u32 },
    DefaultInterCharacterSpace,
    AnkFont { font: AnkFont },
    KanjiFont { font: KanjiFont },
    SetDoubleSizeHeight,
    ClearDoubleSizeHeight,
    SetDoubleSizeWidth,
    ClearDoubleSizeWidth,
    SetLargeFont,
    ClearLargeFont,
    SetQuadrupleSize,
    ClearQuadrupleSize,
    Enlargement { width: u32, height: u32 },
    ClearEnlargement,
    Script { mode: ScriptMode },
    ClearScript,
    QrCode {
        #[serde(default)]
        level: QrErrorLevel,
        data: String,
    },
    Barcode { kind: BarcodeKind, data: String },
    BarcodeHeight { dots: u32 },
    DefaultBarcodeHeight,
    BarcodeBarSize { narrow: u32, wide: u32 },
    DefaultBarcodeBarSize,
    /// Load, scale and dither an image file
    Image {
        path: PathBuf,
        #[serde(default)]
        mode: BitmapMode,
        #[serde(default)]
        dither: Option<String>,
    },
    /// Print what is already in the printer's image buffer
    PrintBuffer { lines: u16 },
    Text { text: String },
    Byte { value: u8 },
}

/// A sequence of operations, optionally pinned to a protocol variant
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Job {
    /// Framing the job was written for. Checked against the printer.
    #[serde(default)]
    pub variant: Option<ProtocolVariant>,
    pub ops: Vec<JobOp>,
}

impl Job {
    /// Parse a job from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| PrinterError::Job(format!("Invalid job: {}", e)))
    }

    /// Execute every operation in order.
    ///
    /// ## Errors
    ///
    /// [`PrinterError::Job`] if the job names a variant different from the
    /// printer's; otherwise the first operation error, tagged with its index.
    pub fn run<T: Transport>(&self, printer: &mut Printer<T>) -> Result<()> {
        if let Some(variant) = self.variant
            && variant != printer.variant()
        {
            return Err(PrinterError::Job(format!(
                "job targets {} framing but printer uses {}",
                variant,
                printer.variant()
            )));
        }

        for (index, op) in self.ops.iter().enumerate() {
            debug!(index, ?op, "job op");
            apply(printer, op).map_err(|e| match e {
                PrinterError::ContractViolation(msg) => {
                    PrinterError::ContractViolation(format!("op {}: {}", index, msg))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

fn apply<T: Transport>(printer: &mut Printer<T>, op: &JobOp) -> Result<()> {
    match op {
        JobOp::Initialize => printer.initialize(),
        JobOp::ClearBuffer => printer.clear_buffer(),
        JobOp::LineFeed { lines } => printer.put_line_feed(*lines),
        JobOp::PaperFeed { dots } => printer.put_paper_feed(*dots),
        JobOp::PrintPosition { position } => printer.put_print_position(*position),
        JobOp::PrintDirection { direction } => printer.set_print_direction(*direction),
        JobOp::LineSpacing { dots } => printer.set_line_spacing(*dots),
        JobOp::DefaultLineSpacing => printer.default_line_spacing(),
        JobOp::InterCharacterSpace { dots } => printer.set_inter_character_space(*dots),
        JobOp::DefaultInterCharacterSpace => printer.default_inter_character_space(),
        JobOp::AnkFont { font } => printer.set_ank_font(*font),
        JobOp::KanjiFont { font } => printer.set_kanji_font(*font),
        JobOp::SetDoubleSizeHeight => printer.set_double_size_height(),
        JobOp::ClearDoubleSizeHeight => printer.clear_double_size_height(),
        JobOp::SetDoubleSizeWidth => printer.set_double_size_width(),
        JobOp::ClearDoubleSizeWidth => printer.clear_double_size_width(),
        JobOp::SetLargeFont => printer.set_large_font(),
        JobOp::ClearLargeFont => printer.clear_large_font(),
        JobOp::SetQuadrupleSize => printer.set_quadruple_size(),
        JobOp::ClearQuadrupleSize => printer.clear_quadruple_size(),
        JobOp::Enlargement { width, height } => printer.set_enlargement(*width, *height),
        JobOp::ClearEnlargement => printer.clear_enlargement(),
        JobOp::Script { mode } => printer.set_script(*mode),
        JobOp::ClearScript => printer.clear_script(),
        JobOp::QrCode { level, data } => printer.print_qr_code(*level, data.as_bytes()),
        JobOp::Barcode { kind, data } => printer.print_barcode(*kind, data.as_bytes()),
        JobOp::BarcodeHeight { dots } => printer.set_barcode_height(*dots),
        JobOp::DefaultBarcodeHeight => printer.default_barcode_height(),
        JobOp::BarcodeBarSize { narrow, wide } => printer.set_barcode_bar_size(*narrow, *wide),
        JobOp::DefaultBarcodeBarSize => printer.default_barcode_bar_size(),
        JobOp::Image { path, mode, dither } => {
            let algorithm = match dither {
                Some(name) => name.parse::<DitheringAlgorithm>().map_err(PrinterError::Job)?,
                None => DitheringAlgorithm::default(),
            };
            let bitmap = Bitmap::open(path, algorithm)?;
            printer.print_bitmap_image(*mode, bitmap.lines, &bitmap.data)
        }
        JobOp::PrintBuffer { lines } => {
            printer.print_bitmap_image(BitmapMode::PrintBuffer, *lines, &[])
        }
        JobOp::Text { text } => printer.print_text(text),
        JobOp::Byte { value } => printer.put_byte(*value),
    }
}
