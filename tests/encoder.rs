//! # Encoder Tests
//!
//! Drives [`Printer`] against a [`RecordingTransport`] and checks the exact
//! bytes and write boundaries of every operation.

use as289r2::PrinterError;
use as289r2::printer::Printer;
use as289r2::protocol::ProtocolVariant;
use as289r2::protocol::barcode::{BarcodeKind, QrErrorLevel};
use as289r2::protocol::commands::{MAX_LINE_FEEDS, PrintDirection};
use as289r2::protocol::graphics::BitmapMode;
use as289r2::protocol::text::{AnkFont, KanjiFont, ScriptMode};
use as289r2::transport::{RecordingTransport, WriterTransport};
use pretty_assertions::assert_eq;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

type Op = fn(&mut Printer<RecordingTransport>) -> Result<(), PrinterError>;

fn printer(variant: ProtocolVariant) -> Printer<RecordingTransport> {
    Printer::new(RecordingTransport::new(), variant)
}

fn case(name: &'static str, op: Op, expected: Vec<u8>) -> (&'static str, Op, Vec<u8>) {
    (name, op, expected)
}

/// Run one operation and return its single write.
fn encode(variant: ProtocolVariant, op: Op) -> Vec<u8> {
    let mut p = printer(variant);
    op(&mut p).unwrap();
    let writes = p.transport().writes();
    assert_eq!(writes.len(), 1, "expected exactly one write");
    writes[0].clone()
}

// ============================================================================
// FIXED-LAYOUT OPERATIONS
// ============================================================================

#[test]
fn fixed_layouts_match_reference_table() {
    let table = vec![
        case("initialize", |p| p.initialize(), vec![0x1B, 0x40]),
        case("set_double_size_height", |p| p.set_double_size_height(), vec![0x1B, 0x4E, 0x31]),
        case("clear_double_size_height", |p| p.clear_double_size_height(), vec![0x1B, 0x4E, 0x30]),
        case("set_double_size_width", |p| p.set_double_size_width(), vec![0x1B, 0x57, 0x31]),
        case("clear_double_size_width", |p| p.clear_double_size_width(), vec![0x1B, 0x57, 0x30]),
        case("set_large_font", |p| p.set_large_font(), vec![0x1B, 0x4C, 0x31]),
        case("clear_large_font", |p| p.clear_large_font(), vec![0x1B, 0x4C, 0x30]),
        case("set_ank_font", |p| p.set_ank_font(AnkFont::Size24x24), vec![0x1B, 0x68, 0x33]),
        case("set_kanji_font", |p| p.set_kanji_font(KanjiFont::Size16x16), vec![0x12, 0x53, 0x31]),
        case("set_line_spacing", |p| p.set_line_spacing(10), vec![0x1B, 0x33, 0x0A]),
        case("default_line_spacing", |p| p.default_line_spacing(), vec![0x1B, 0x33, 0x04]),
        case(
            "set_print_direction",
            |p| p.set_print_direction(PrintDirection::Texter),
            vec![0x1B, 0x49, 0x01],
        ),
        case("put_paper_feed", |p| p.put_paper_feed(200), vec![0x1B, 0x4A, 0xC8]),
        case("set_inter_character_space", |p| p.set_inter_character_space(2), vec![0x1B, 0x20, 0x02]),
        case(
            "default_inter_character_space",
            |p| p.default_inter_character_space(),
            vec![0x1B, 0x20, 0x01],
        ),
        case("put_print_position", |p| p.put_print_position(7), vec![0x1B, 0x6C, 0x07]),
        case("set_script", |p| p.set_script(ScriptMode::Super), vec![0x1B, 0x73, 0x01]),
        case("clear_script", |p| p.clear_script(), vec![0x1B, 0x73, 0x30]),
        case("set_enlargement", |p| p.set_enlargement(3, 2), vec![0x1C, 0x65, 0x03, 0x02]),
        case("clear_enlargement", |p| p.clear_enlargement(), vec![0x1C, 0x65, 0x31, 0x31]),
        case("set_barcode_height", |p| p.set_barcode_height(100), vec![0x1D, 0x68, 0x64]),
        case("default_barcode_height", |p| p.default_barcode_height(), vec![0x1D, 0x68, 0x50]),
        case("set_barcode_bar_size", |p| p.set_barcode_bar_size(1, 4), vec![0x1D, 0x77, 0x01, 0x04]),
        case("default_barcode_bar_size", |p| p.default_barcode_bar_size(), vec![0x1D, 0x77, 0x02, 0x05]),
        case("set_quadruple_size", |p| p.set_quadruple_size(), vec![0x1C, 0x57, 0x31]),
        case("clear_quadruple_size", |p| p.clear_quadruple_size(), vec![0x1C, 0x57, 0x30]),
        case("put_byte", |p| p.put_byte(0x41), vec![0x41]),
    ];

    for variant in ProtocolVariant::ALL {
        for (name, op, expected) in &table {
            assert_eq!(&encode(variant, *op), expected, "{} under {}", name, variant);
        }
    }
}

#[test]
fn parameters_cover_full_byte_range() {
    for value in [0u32, 1, 127, 128, 254, 255] {
        let mut p = printer(ProtocolVariant::SelectorByte);
        p.put_paper_feed(value).unwrap();
        p.set_line_spacing(value).unwrap();
        p.set_barcode_bar_size(value, value).unwrap();
        let b = value as u8;
        assert_eq!(
            p.transport().bytes(),
            vec![0x1B, 0x4A, b, 0x1B, 0x33, b, 0x1D, 0x77, b, b]
        );
    }
}

#[test]
fn out_of_range_parameters_are_rejected() {
    let ops: [Op; 7] = [
        |p| p.put_paper_feed(256),
        |p| p.set_line_spacing(1000),
        |p| p.set_inter_character_space(u32::MAX),
        |p| p.put_print_position(300),
        |p| p.set_enlargement(256, 1),
        |p| p.set_barcode_height(512),
        |p| p.set_barcode_bar_size(2, 256),
    ];

    for op in ops {
        let mut p = printer(ProtocolVariant::SelectorByte);
        let err = op(&mut p).unwrap_err();
        assert!(matches!(err, PrinterError::ContractViolation(_)), "{:?}", err);
        assert_eq!(p.transport().attempts(), 0);
    }
}

#[test]
fn clear_buffer_follows_variant() {
    assert_eq!(encode(ProtocolVariant::SelectorByte, |p| p.clear_buffer()), vec![0x19]);
    assert_eq!(encode(ProtocolVariant::NulTerminated, |p| p.clear_buffer()), vec![0x18]);
}

#[test]
fn line_feed_counts() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.put_line_feed(0).unwrap();
    assert!(p.transport().bytes().is_empty());

    p.put_line_feed(3).unwrap();
    assert_eq!(p.transport().bytes(), vec![0x0D, 0x0D, 0x0D]);
}

#[test]
fn huge_line_feed_count_is_rejected() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    let err = p.put_line_feed(u32::MAX).unwrap_err();
    assert!(matches!(err, PrinterError::ContractViolation(_)));
    assert_eq!(p.transport().attempts(), 0);

    p.put_line_feed(MAX_LINE_FEEDS).unwrap();
    assert_eq!(p.transport().bytes().len(), MAX_LINE_FEEDS as usize);
}

#[test]
fn kanji_text_is_sent_as_shift_jis() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.set_kanji_font(KanjiFont::Size16x16).unwrap();
    p.print_text("日本\r").unwrap();
    assert_eq!(
        p.transport().writes(),
        &[vec![0x12, 0x53, 0x31], vec![0x93, 0xFA, 0x96, 0x7B, 0x0D]]
    );
}

// ============================================================================
// VARIABLE-PAYLOAD OPERATIONS
// ============================================================================

#[test]
fn qr_code_at_length_boundary() {
    let data = vec![b'Q'; 255];
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.print_qr_code(QrErrorLevel::Q, &data).unwrap();
    let bytes = p.transport().bytes();
    assert_eq!(&bytes[..4], &[0x1D, 0x78, 0x51, 0xFF]);
    assert_eq!(&bytes[4..], data.as_slice());

    let data = vec![b'Q'; 256];
    let mut p = printer(ProtocolVariant::SelectorByte);
    let err = p.print_qr_code(QrErrorLevel::Q, &data).unwrap_err();
    assert!(matches!(err, PrinterError::ContractViolation(_)));
    assert_eq!(p.transport().attempts(), 0);
}

#[test]
fn barcode_framing_per_variant() {
    let selector = encode(ProtocolVariant::SelectorByte, |p| {
        p.print_barcode(BarcodeKind::UpcA, b"01234567890")
    });
    let mut expected = vec![0x1D, 0x6B, 0x30, 0x00];
    expected.extend(b"01234567890");
    assert_eq!(selector, expected);

    let terminated = encode(ProtocolVariant::NulTerminated, |p| {
        p.print_barcode(BarcodeKind::Codabar, b"A123B")
    });
    assert_eq!(terminated, vec![0x1D, 0x6B, 0x36, b'A', b'1', b'2', b'3', b'B', 0x00]);
}

#[test]
fn bitmap_payload_modes_write_header_and_lines() {
    let lines = 4u16;
    let image: Vec<u8> = (0..48 * lines as usize).map(|i| i as u8).collect();

    for mode in [
        BitmapMode::Register,
        BitmapMode::RegisterThenPrint,
        BitmapMode::PrintThenRegister,
        BitmapMode::LinePrint,
    ] {
        let mut p = printer(ProtocolVariant::SelectorByte);
        p.print_bitmap_image(mode, lines, &image).unwrap();
        let bytes = p.transport().bytes();
        assert_eq!(bytes.len(), 3 + 2 + 48 * lines as usize);
        assert_eq!(&bytes[..5], &[0x1C, 0x2A, mode as u8, 0x00, 0x04]);
        assert_eq!(&bytes[5..], image.as_slice());
    }
}

#[test]
fn bitmap_uses_only_required_prefix_of_image() {
    let image = vec![0xFF; 48 * 3];
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.print_bitmap_image(BitmapMode::LinePrint, 2, &image).unwrap();
    assert_eq!(p.transport().bytes().len(), 5 + 96);
}

#[test]
fn bitmap_print_buffer_writes_five_bytes() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.print_bitmap_image(BitmapMode::PrintBuffer, 1000, &[]).unwrap();
    assert_eq!(p.transport().bytes(), vec![0x1C, 0x2A, 0x61, 0x03, 0xE8]);
}

#[test]
fn bitmap_short_image_rejected_before_writing() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    let err = p
        .print_bitmap_image(BitmapMode::LinePrint, 10, &vec![0u8; 479])
        .unwrap_err();
    assert!(matches!(err, PrinterError::ContractViolation(_)));
    assert_eq!(p.transport().attempts(), 0);
}

// ============================================================================
// ORDERING AND FAILURE
// ============================================================================

#[test]
fn sequential_operations_keep_call_order() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.set_double_size_width().unwrap();
    p.put_byte(b'A').unwrap();
    p.clear_double_size_width().unwrap();

    assert_eq!(
        p.transport().writes(),
        &[vec![0x1B, 0x57, 0x31], vec![b'A'], vec![0x1B, 0x57, 0x30]]
    );
    assert_eq!(
        p.transport().bytes(),
        vec![0x1B, 0x57, 0x31, 0x41, 0x1B, 0x57, 0x30]
    );
}

#[test]
fn bitmap_payload_failure_does_not_resend_header() {
    let image = vec![0xAA; 48];
    let mut p = Printer::new(RecordingTransport::failing_on(1), ProtocolVariant::SelectorByte);

    let err = p.print_bitmap_image(BitmapMode::LinePrint, 1, &image).unwrap_err();
    assert!(matches!(err, PrinterError::Transport(_)));
    assert_eq!(p.transport().attempts(), 2);
    assert_eq!(p.transport().writes(), &[vec![0x1C, 0x2A, 0x65, 0x00, 0x01]]);
}

#[test]
fn transport_failure_does_not_poison_encoder() {
    let mut p = Printer::new(RecordingTransport::failing_on(0), ProtocolVariant::NulTerminated);
    assert!(matches!(p.initialize(), Err(PrinterError::Transport(_))));

    p.initialize().unwrap();
    p.clear_buffer().unwrap();
    assert_eq!(p.transport().bytes(), vec![0x1B, 0x40, 0x18]);
}

#[test]
fn writer_transport_receives_stream() {
    let mut p = Printer::connect(WriterTransport::new(Vec::new()), ProtocolVariant::SelectorByte)
        .unwrap();
    p.print_text("Hi\r").unwrap();
    p.put_line_feed(1).unwrap();

    let sink = p.into_inner().into_inner();
    assert_eq!(sink, vec![0x1B, 0x40, b'H', b'i', 0x0D, 0x0D]);
}

#[test]
fn get_byte_reports_no_data() {
    let mut p = printer(ProtocolVariant::SelectorByte);
    p.print_text("ignored").unwrap();
    assert_eq!(p.get_byte(), None);
}
