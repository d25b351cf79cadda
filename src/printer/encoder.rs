//! # AS-289R2 Command Encoder
//!
//! [`Printer`] binds the pure command builders in [`crate::protocol`] to a
//! [`Transport`]. Each method validates its arguments, serializes exactly
//! one command and hands it to the transport before returning.
//!
//! ## Write Boundaries
//!
//! Every operation is a single `Transport::write` call, with one
//! exception: bitmap images are sent as a 5-byte header write followed by
//! a payload write. If the payload write fails the header has already
//! been sent; nothing is retried or rolled back.
//!
//! Validation happens before the first write, so a
//! [`PrinterError::ContractViolation`] never leaves partial output behind.
//!
//! ## Example
//!
//! ```
//! use as289r2::printer::Printer;
//! use as289r2::protocol::ProtocolVariant;
//! use as289r2::protocol::text::AnkFont;
//! use as289r2::transport::RecordingTransport;
//!
//! let mut printer = Printer::new(RecordingTransport::new(), ProtocolVariant::SelectorByte);
//! printer.initialize()?;
//! printer.set_ank_font(AnkFont::Size8x16)?;
//! printer.print_text("Hello\r")?;
//! printer.put_line_feed(2)?;
//!
//! assert_eq!(printer.transport().writes().len(), 4);
//! # Ok::<(), as289r2::error::PrinterError>(())
//! ```

use tracing::trace;

use crate::error::Result;
use crate::protocol::barcode::{self, BarcodeKind, QrErrorLevel};
use crate::protocol::commands::{self, PrintDirection, byte_param};
use crate::protocol::graphics::{self, BitmapMode};
use crate::protocol::sjis;
use crate::protocol::text::{self, AnkFont, KanjiFont, ScriptMode};
use crate::protocol::variant::ProtocolVariant;
use crate::transport::Transport;

/// Encoder for one AS-289R2 printer.
///
/// Owns its transport for its whole lifetime (pass `&mut T` to borrow
/// instead). Holds no printer-side state: fonts, sizes and modes are not
/// tracked, only written.
#[derive(Debug)]
pub struct Printer<T: Transport> {
    transport: T,
    variant: ProtocolVariant,
}

impl<T: Transport> Printer<T> {
    /// Bind a transport without writing anything.
    pub fn new(transport: T, variant: ProtocolVariant) -> Self {
        Self { transport, variant }
    }

    /// Bind a transport and send `ESC @` so the printer starts from its
    /// power-on defaults.
    pub fn connect(transport: T, variant: ProtocolVariant) -> Result<Self> {
        let mut printer = Self::new(transport, variant);
        printer.initialize()?;
        Ok(printer)
    }

    /// Protocol framing in use
    pub fn variant(&self) -> ProtocolVariant {
        self.variant
    }

    /// Borrow the underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Release the underlying transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    fn send(&mut self, op: &'static str, bytes: &[u8]) -> Result<()> {
        trace!(op, len = bytes.len(), "encode");
        if bytes.is_empty() {
            return Ok(());
        }
        self.transport.write(bytes)
    }

    // ------------------------------------------------------------------------
    // Initialization and buffer control
    // ------------------------------------------------------------------------

    /// `ESC @`
    pub fn initialize(&mut self) -> Result<()> {
        self.send("initialize", &commands::init())
    }

    /// `EM` or `CAN`, depending on the protocol variant
    pub fn clear_buffer(&mut self) -> Result<()> {
        self.send("clear_buffer", &commands::clear_buffer(self.variant))
    }

    // ------------------------------------------------------------------------
    // Paper movement
    // ------------------------------------------------------------------------

    /// `CR` repeated `lines` times, in a single write. Zero lines writes
    /// nothing; more than [`commands::MAX_LINE_FEEDS`] is rejected.
    pub fn put_line_feed(&mut self, lines: u32) -> Result<()> {
        let cmd = commands::line_feeds(lines)?;
        self.send("put_line_feed", &cmd)
    }

    /// `ESC J n`
    pub fn put_paper_feed(&mut self, space: u32) -> Result<()> {
        let n = byte_param("paper feed", space)?;
        self.send("put_paper_feed", &commands::paper_feed(n))
    }

    /// `ESC l n`
    pub fn put_print_position(&mut self, position: u32) -> Result<()> {
        let n = byte_param("print position", position)?;
        self.send("put_print_position", &commands::print_position(n))
    }

    /// `ESC I n`
    pub fn set_print_direction(&mut self, direction: PrintDirection) -> Result<()> {
        self.send("set_print_direction", &commands::print_direction(direction))
    }

    // ------------------------------------------------------------------------
    // Spacing
    // ------------------------------------------------------------------------

    /// `ESC 3 n`
    pub fn set_line_spacing(&mut self, space: u32) -> Result<()> {
        let n = byte_param("line spacing", space)?;
        self.send("set_line_spacing", &commands::line_spacing(n))
    }

    /// `ESC 3 4`
    pub fn default_line_spacing(&mut self) -> Result<()> {
        self.send("default_line_spacing", &commands::default_line_spacing())
    }

    /// `ESC SP n`
    pub fn set_inter_character_space(&mut self, space: u32) -> Result<()> {
        let n = byte_param("inter-character space", space)?;
        self.send(
            "set_inter_character_space",
            &commands::inter_character_space(n),
        )
    }

    /// `ESC SP 1`
    pub fn default_inter_character_space(&mut self) -> Result<()> {
        self.send(
            "default_inter_character_space",
            &commands::default_inter_character_space(),
        )
    }

    // ------------------------------------------------------------------------
    // Fonts and character size
    // ------------------------------------------------------------------------

    /// `ESC h n`
    pub fn set_ank_font(&mut self, font: AnkFont) -> Result<()> {
        self.send("set_ank_font", &text::ank_font(font))
    }

    /// `DC2 S n`
    pub fn set_kanji_font(&mut self, font: KanjiFont) -> Result<()> {
        self.send("set_kanji_font", &text::kanji_font(font))
    }

    pub fn set_double_size_height(&mut self) -> Result<()> {
        self.send("set_double_size_height", &text::double_height_on())
    }

    pub fn clear_double_size_height(&mut self) -> Result<()> {
        self.send("clear_double_size_height", &text::double_height_off())
    }

    pub fn set_double_size_width(&mut self) -> Result<()> {
        self.send("set_double_size_width", &text::double_width_on())
    }

    pub fn clear_double_size_width(&mut self) -> Result<()> {
        self.send("clear_double_size_width", &text::double_width_off())
    }

    /// 48×96 dot font
    pub fn set_large_font(&mut self) -> Result<()> {
        self.send("set_large_font", &text::large_font_on())
    }

    pub fn clear_large_font(&mut self) -> Result<()> {
        self.send("clear_large_font", &text::large_font_off())
    }

    pub fn set_quadruple_size(&mut self) -> Result<()> {
        self.send("set_quadruple_size", &text::quadruple_on())
    }

    pub fn clear_quadruple_size(&mut self) -> Result<()> {
        self.send("clear_quadruple_size", &text::quadruple_off())
    }

    /// `FS e w h`
    pub fn set_enlargement(&mut self, width: u32, height: u32) -> Result<()> {
        let w = byte_param("enlargement width", width)?;
        let h = byte_param("enlargement height", height)?;
        self.send("set_enlargement", &text::enlargement(w, h))
    }

    /// `FS e 1 1`
    pub fn clear_enlargement(&mut self) -> Result<()> {
        self.send("clear_enlargement", &text::enlargement_off())
    }

    /// `ESC s n`
    pub fn set_script(&mut self, mode: ScriptMode) -> Result<()> {
        self.send("set_script", &text::script(mode))
    }

    pub fn clear_script(&mut self) -> Result<()> {
        self.send("clear_script", &text::script_off())
    }

    // ------------------------------------------------------------------------
    // Barcodes
    // ------------------------------------------------------------------------

    /// `GS x e n data`. Payloads over 255 bytes are rejected.
    pub fn print_qr_code(&mut self, level: QrErrorLevel, data: &[u8]) -> Result<()> {
        let cmd = barcode::qr_code(level, data)?;
        self.send("print_qr_code", &cmd)
    }

    /// `GS k m ...`, framed according to the protocol variant.
    pub fn print_barcode(&mut self, kind: BarcodeKind, data: &[u8]) -> Result<()> {
        let cmd = barcode::barcode(self.variant, kind, data)?;
        self.send("print_barcode", &cmd)
    }

    /// `GS h n`
    pub fn set_barcode_height(&mut self, height: u32) -> Result<()> {
        let n = byte_param("barcode height", height)?;
        self.send("set_barcode_height", &barcode::bar_height(n))
    }

    pub fn default_barcode_height(&mut self) -> Result<()> {
        self.send("default_barcode_height", &barcode::default_bar_height())
    }

    /// `GS w n w`
    pub fn set_barcode_bar_size(&mut self, narrow: u32, wide: u32) -> Result<()> {
        let n = byte_param("narrow bar width", narrow)?;
        let w = byte_param("wide bar width", wide)?;
        self.send("set_barcode_bar_size", &barcode::bar_size(n, w))
    }

    pub fn default_barcode_bar_size(&mut self) -> Result<()> {
        self.send("default_barcode_bar_size", &barcode::default_bar_size())
    }

    // ------------------------------------------------------------------------
    // Bitmap images
    // ------------------------------------------------------------------------

    /// `FS * m nH nL data`
    ///
    /// `image` must hold at least `48 × lines` bytes unless `mode` is
    /// [`BitmapMode::PrintBuffer`], in which case it is never read.
    /// Header and payload are written separately.
    pub fn print_bitmap_image(&mut self, mode: BitmapMode, lines: u16, image: &[u8]) -> Result<()> {
        let body = graphics::payload(mode, lines, image)?;
        self.send("print_bitmap_image", &graphics::header(mode, lines))?;
        self.send("print_bitmap_image.payload", body)
    }

    // ------------------------------------------------------------------------
    // Raw passthrough
    // ------------------------------------------------------------------------

    /// Write one raw byte, outside any command framing.
    pub fn put_byte(&mut self, byte: u8) -> Result<()> {
        self.send("put_byte", &[byte])
    }

    /// Write free text, encoded as Shift-JIS, in one write.
    ///
    /// Characters outside Shift-JIS are a
    /// [`PrinterError::ContractViolation`](crate::error::PrinterError::ContractViolation)
    /// and nothing is written.
    pub fn print_text(&mut self, text: &str) -> Result<()> {
        let bytes = sjis::encode(text)?;
        self.send("print_text", &bytes)
    }

    /// The link is write-only; there is never data to read.
    pub fn get_byte(&mut self) -> Option<u8> {
        None
    }
}
