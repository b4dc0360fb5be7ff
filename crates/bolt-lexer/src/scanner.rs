//! Byte cursor over a source buffer.
//! 源码缓冲区上的字节游标。

use bolt_common::{BytePos, Location, SourceFile, Span};

/// Whitespace as classified by C's `isspace`.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// A read position within a `SourceFile`.
///
/// Copying a scanner copies only its position; the buffer is shared. The
/// lexer relies on this to scan ahead speculatively and throw the copy away.
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'src> {
    source: SourceFile<'src>,
    location: Location<'src>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: SourceFile<'src>) -> Self {
        Self {
            source,
            location: source.start_location(),
        }
    }

    pub fn source(&self) -> SourceFile<'src> {
        self.source
    }

    /// Position of the next unconsumed byte.
    pub fn location(&self) -> Location<'src> {
        self.location
    }

    pub fn offset(&self) -> usize {
        usize::from(self.location.offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.offset() >= self.source.len()
    }

    /// The byte `n` positions past the cursor, or `None` past the end.
    pub fn peek_char(&self, n: usize) -> Option<u8> {
        self.source.text().get(self.offset() + n).copied()
    }

    /// Consume one byte, keeping line and column in step.
    ///
    /// At end of input this returns `None` and leaves the position alone.
    pub fn consume_char(&mut self) -> Option<u8> {
        let byte = self.peek_char(0)?;
        self.location.offset = self.location.offset.offset(1);
        if byte == b'\n' {
            self.location.line += 1;
            self.location.column = 0;
        }
        self.location.column += 1;
        Some(byte)
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek_char(0).is_some_and(is_whitespace) {
            self.consume_char();
        }
    }

    /// Bytes from `start` up to the cursor.
    pub fn slice_from(&self, start: BytePos) -> (Span, &'src [u8]) {
        let span = Span::new(start, self.location.offset);
        (span, self.source.slice(span))
    }

    pub(crate) fn reset_to(&mut self, location: Location<'src>) {
        self.location = location;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(text: &'static str) -> Scanner<'static> {
        Scanner::new(SourceFile::from_text("test.bl", text))
    }

    #[test]
    fn test_column_tracking_across_newline() {
        let mut s = scanner("ab\ncd");
        for expected in *b"ab\ncd" {
            assert_eq!(s.consume_char(), Some(expected));
        }
        let loc = s.location();
        assert_eq!((loc.line, loc.column, loc.offset), (2, 3, BytePos(5)));
    }

    #[test]
    fn test_consume_past_end_is_stable() {
        let mut s = scanner("x");
        assert_eq!(s.consume_char(), Some(b'x'));
        assert_eq!(s.consume_char(), None);
        assert_eq!(s.consume_char(), None);
        let loc = s.location();
        assert_eq!((loc.line, loc.column, loc.offset), (1, 2, BytePos(1)));
        assert!(s.is_at_end());
    }

    #[test]
    fn test_peek_does_not_move() {
        let s = scanner("xyz");
        assert_eq!(s.peek_char(0), Some(b'x'));
        assert_eq!(s.peek_char(2), Some(b'z'));
        assert_eq!(s.peek_char(3), None);
        assert_eq!(s.location().column, 1);
    }

    #[test]
    fn test_skip_whitespace() {
        let mut s = scanner(" \t\r\n\x0b\x0cfoo");
        s.skip_whitespace();
        assert_eq!(s.peek_char(0), Some(b'f'));
        assert_eq!(s.location().line, 2);
        assert_eq!(s.location().column, 3);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut s = scanner("ab");
        let mut ahead = s;
        ahead.consume_char();
        assert_eq!(s.peek_char(0), Some(b'a'));
        assert_eq!(s.consume_char(), Some(b'a'));
        assert_eq!(ahead.consume_char(), Some(b'b'));
    }

    #[test]
    fn test_slice_from() {
        let mut s = scanner("hello world");
        let start = s.location().offset;
        for _ in 0..5 {
            s.consume_char();
        }
        let (span, bytes) = s.slice_from(start);
        assert_eq!(span, Span::from_usize(0, 5));
        assert_eq!(bytes, b"hello");
    }
}
