//! Integration tests for bolt-diagnostic crate, driven by real lex errors.

use bolt_common::SourceFile;
use bolt_diagnostic::{Diagnostic, ErrorCode, render};
use bolt_lexer::{LexError, Lexer};

fn first_error(text: &'static str) -> LexError<'static> {
    Lexer::new(SourceFile::from_text("main.bl", text))
        .tokenize()
        .expect_err("source should not lex")
}

fn render_error(text: &'static str) -> String {
    render(text.as_bytes(), &first_error(text).to_diagnostic())
}

#[test]
fn test_unknown_type_hint_report() {
    assert_eq!(
        render_error("func\n\tx 12q"),
        "main.bl(2:6): unknown type hint\n    x 12q\n~~~~~~~~^\n\tvalid suffixes are `f`, `u`, `l`, `lu`, `ll` and `llu`\n"
    );
}

#[test]
fn test_unterminated_string_points_past_end() {
    assert_eq!(
        render_error("\"abc"),
        "main.bl(1:5): unterminated string literal\n\"abc\n~~~~^\n\tadd a closing quote `\"` to terminate the string\n"
    );
}

#[test]
fn test_newline_in_string_points_at_opening_quote() {
    assert_eq!(
        render_error("x \"ab\ncd\""),
        "main.bl(1:3): string contains newline\nx \"ab\n~~^~~\n\tclose the string before the end of the line\n"
    );
}

#[test]
fn test_multiple_dots_has_no_footer() {
    assert_eq!(
        render_error("1.2.3"),
        "main.bl(1:4): multiple dots in numeric literal\n1.2.3\n~~~^~\n"
    );
}

#[test]
fn test_unexpected_character_report() {
    assert_eq!(
        render_error("a $ b"),
        "main.bl(1:3): unexpected character\na $ b\n~~^~~\n"
    );
}

#[test]
fn test_diagnostic_carries_code() {
    let diagnostic = first_error("..").to_diagnostic();
    assert_eq!(diagnostic.code, Some(ErrorCode::ExtraneousPeriod));
    assert_eq!(diagnostic.header, "unexpected extraneous period");
    assert_eq!(diagnostic.location.column, 3);
    assert_eq!(ErrorCode::ExtraneousPeriod.as_str(), "E0006");
}

#[test]
fn test_hand_built_diagnostic() {
    let source = SourceFile::from_text("lib.bl", "using\tstd");
    let mut location = source.start_location();
    location.column = 7;
    let diagnostic = Diagnostic::error(location, "custom").with_footer("see here");
    assert_eq!(
        render(source.text(), &diagnostic),
        "lib.bl(1:7): custom\nusing    std\n~~~~~~~~~^~~\n\tsee here\n"
    );
}
