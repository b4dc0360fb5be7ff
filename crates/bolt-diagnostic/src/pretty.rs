//! Ariadne-backed rendering.

use crate::Diagnostic;
use ariadne::{Config, Label, Report, ReportKind, Source};
use std::io;

/// Render `diagnostic` as an ariadne report.
///
/// The footer becomes a note and the error code, if any, the report code.
/// Ariadne indexes by character, so the byte offset of the location is
/// converted first; a location at end of input points at the last character.
pub fn render_pretty(source: &[u8], diagnostic: &Diagnostic<'_>, color: bool) -> io::Result<String> {
    let text = String::from_utf8_lossy(source);
    let name = diagnostic.location.source_name;
    let byte_offset = usize::from(diagnostic.location.offset);

    let char_len = text.chars().count();
    let offset = text
        .char_indices()
        .take_while(|&(i, _)| i < byte_offset)
        .count()
        .min(char_len.saturating_sub(1));

    let mut report = Report::build(ReportKind::Error, name, offset)
        .with_config(Config::default().with_color(color))
        .with_message(&diagnostic.header);

    if let Some(code) = &diagnostic.code {
        report = report.with_code(code.as_str());
    }

    if char_len > 0 {
        let message = diagnostic
            .code
            .map(|code| code.description())
            .unwrap_or("here");
        report = report.with_label(Label::new((name, offset..offset + 1)).with_message(message));
    }

    if let Some(footer) = &diagnostic.footer {
        report = report.with_note(footer);
    }

    let mut out = Vec::new();
    report
        .finish()
        .write((name, Source::from(text.as_ref())), &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use bolt_common::{BytePos, Location};

    #[test]
    fn test_pretty_mentions_header_code_and_note() {
        let location = Location {
            line: 1,
            column: 3,
            offset: BytePos(2),
            source_name: "main.bl",
        };
        let diag = Diagnostic::error(location, "unknown type hint")
            .with_code(ErrorCode::UnknownTypeHint)
            .with_footer("valid suffixes are `f`, `u`, `l`, `lu`, `ll` and `llu`");

        let out = render_pretty(b"12q", &diag, false).unwrap();
        assert!(out.contains("unknown type hint"));
        assert!(out.contains("E0005"));
        assert!(out.contains("main.bl"));
        assert!(out.contains("valid suffixes"));
    }

    #[test]
    fn test_pretty_on_empty_source() {
        let diag = Diagnostic::error(Location::start("empty.bl"), "unexpected character");
        let out = render_pretty(b"", &diag, false).unwrap();
        assert!(out.contains("unexpected character"));
    }
}
