//! Lexical errors.

use bolt_common::Location;
use bolt_diagnostic::{Diagnostic, ErrorCode};
use thiserror::Error;

/// Every way a lexeme can be malformed. All of them are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unterminated string literal")]
    UnterminatedString,

    #[error("string contains newline")]
    StringContainsNewline,

    #[error("unterminated char literal")]
    UnterminatedChar,

    #[error("multiple dots in numeric literal")]
    MultipleDots,

    #[error("unknown type hint")]
    UnknownTypeHint,

    #[error("unexpected extraneous period")]
    ExtraneousPeriod,

    #[error("unexpected character")]
    UnexpectedCharacter,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::UnterminatedString,
            LexErrorKind::StringContainsNewline => ErrorCode::StringContainsNewline,
            LexErrorKind::UnterminatedChar => ErrorCode::UnterminatedChar,
            LexErrorKind::MultipleDots => ErrorCode::MultipleDots,
            LexErrorKind::UnknownTypeHint => ErrorCode::UnknownTypeHint,
            LexErrorKind::ExtraneousPeriod => ErrorCode::ExtraneousPeriod,
            LexErrorKind::UnexpectedCharacter => ErrorCode::UnexpectedCharacter,
        }
    }
}

/// A fatal lexical error and the exact position of the malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{location}: {kind}")]
pub struct LexError<'src> {
    pub kind: LexErrorKind,
    pub location: Location<'src>,
}

impl<'src> LexError<'src> {
    pub fn new(kind: LexErrorKind, location: Location<'src>) -> Self {
        Self { kind, location }
    }

    /// The diagnostic to show for this error.
    pub fn to_diagnostic(&self) -> Diagnostic<'src> {
        let code = self.kind.code();
        let diagnostic = Diagnostic::error(self.location, self.kind.to_string()).with_code(code);
        match code.suggestion() {
            Some(help) => diagnostic.with_footer(help),
            None => diagnostic,
        }
    }
}
