//! The classic caret renderer.
//!
//! ```text
//! main.bl(2:9): unknown type hint
//!     let x = 12q
//! ~~~~~~~~~~~~~^
//!     valid suffixes are ...
//! ```

use crate::Diagnostic;
use std::borrow::Cow;

/// Display width of a tab character.
pub const TAB_WIDTH: usize = 4;

/// Render `diagnostic` against the buffer it was raised for.
///
/// The source line is located by counting newlines from the start of
/// `source`. When the displayed line is empty only the header is written.
pub fn render(source: &[u8], diagnostic: &Diagnostic<'_>) -> String {
    let location = &diagnostic.location;
    let mut out = format!("{}: {}\n", location, diagnostic.header);

    let line = find_line(source, location.line);
    let display = expand_tabs(line);
    let width = display.chars().count();
    if width == 0 {
        return out;
    }
    out.push_str(&display);
    out.push('\n');

    let caret = caret_column(line, location.column);
    let mut underline = vec!['~'; width.max(caret + 1)];
    underline[caret] = '^';
    out.extend(underline);
    out.push('\n');

    if let Some(footer) = &diagnostic.footer {
        out.push('\t');
        out.push_str(footer);
        out.push('\n');
    }
    out
}

/// The bytes of 1-based `line`, without its terminator.
///
/// A line past the end of the buffer is empty.
fn find_line(source: &[u8], line: u32) -> &[u8] {
    let mut rest = source;
    for _ in 1..line {
        match rest.iter().position(|&b| b == b'\n') {
            Some(newline) => rest = &rest[newline + 1..],
            None => return &[],
        }
    }
    let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
    let line = &rest[..end];
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn expand_tabs(bytes: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(bytes);
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        text
    }
}

/// 0-based display column of the 1-based byte `column` within `line`.
fn caret_column(line: &[u8], column: u32) -> usize {
    let before = (column.max(1) - 1) as usize;
    let within = before.min(line.len());
    expand_tabs(&line[..within]).chars().count() + (before - within)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_common::{BytePos, Location};

    fn at(line: u32, column: u32) -> Location<'static> {
        Location {
            line,
            column,
            offset: BytePos::ZERO,
            source_name: "main.bl",
        }
    }

    #[test]
    fn test_find_line() {
        let src = b"first\nsecond\r\nthird";
        assert_eq!(find_line(src, 1), b"first");
        assert_eq!(find_line(src, 2), b"second");
        assert_eq!(find_line(src, 3), b"third");
        assert_eq!(find_line(src, 4), b"");
    }

    #[test]
    fn test_caret_under_plain_line() {
        let diag = Diagnostic::error(at(1, 3), "unknown type hint");
        assert_eq!(
            render(b"12q", &diag),
            "main.bl(1:3): unknown type hint\n12q\n~~^\n"
        );
    }

    #[test]
    fn test_tabs_shift_the_caret() {
        let diag = Diagnostic::error(at(1, 2), "unexpected character");
        assert_eq!(
            render(b"\t$", &diag),
            "main.bl(1:2): unexpected character\n    $\n~~~~^\n"
        );
    }

    #[test]
    fn test_caret_past_end_extends_underline() {
        let diag = Diagnostic::error(at(1, 5), "unterminated string literal");
        assert_eq!(
            render(b"\"abc", &diag),
            "main.bl(1:5): unterminated string literal\n\"abc\n~~~~^\n"
        );
    }

    #[test]
    fn test_footer_is_tab_indented() {
        let diag = Diagnostic::error(at(2, 1), "unexpected character").with_footer("remove it");
        assert_eq!(
            render(b"ok\n$", &diag),
            "main.bl(2:1): unexpected character\n$\n^\n\tremove it\n"
        );
    }

    #[test]
    fn test_empty_line_stops_after_header() {
        let diag = Diagnostic::error(at(2, 1), "unterminated char literal").with_footer("ignored");
        assert_eq!(
            render(b"'\n", &diag),
            "main.bl(2:1): unterminated char literal\n"
        );
    }
}
