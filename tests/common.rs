//! Integration tests for bolt-common crate.

use bolt_common::{BytePos, Location, SourceFile, Span};

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_pos_offset() {
    let pos = BytePos(10);
    assert_eq!(pos.offset(5), BytePos(15));
}

#[test]
fn test_location_start_and_display() {
    let loc = Location::start("main.bl");
    assert_eq!((loc.line, loc.column, loc.offset), (1, 1, BytePos::ZERO));
    assert_eq!(loc.to_string(), "main.bl(1:1)");
}

#[test]
fn test_source_file_slice() {
    let source = SourceFile::from_text("main.bl", "func main");
    assert_eq!(source.name(), "main.bl");
    assert_eq!(source.len(), 9);
    assert_eq!(source.slice(Span::from_usize(5, 9)), b"main");
    assert_eq!(source.start_location(), Location::start("main.bl"));
}

#[test]
fn test_source_file_ends_at_nul() {
    let source = SourceFile::new("main.bl", b"abc\0garbage");
    assert_eq!(source.text(), b"abc");
    assert!(!source.is_empty());
    assert!(SourceFile::new("empty.bl", b"\0abc").is_empty());
}
