//! Error codes for Bolt diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnterminatedString,
    StringContainsNewline,
    UnterminatedChar,
    MultipleDots,
    UnknownTypeHint,
    ExtraneousPeriod,
    UnexpectedCharacter,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "E0001",
            ErrorCode::StringContainsNewline => "E0002",
            ErrorCode::UnterminatedChar => "E0003",
            ErrorCode::MultipleDots => "E0004",
            ErrorCode::UnknownTypeHint => "E0005",
            ErrorCode::ExtraneousPeriod => "E0006",
            ErrorCode::UnexpectedCharacter => "E0007",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "string literal is not terminated",
            ErrorCode::StringContainsNewline => "string literal spans more than one line",
            ErrorCode::UnterminatedChar => "character literal is not terminated",
            ErrorCode::MultipleDots => "numeric literal has more than one decimal point",
            ErrorCode::UnknownTypeHint => "numeric literal has an unknown suffix",
            ErrorCode::ExtraneousPeriod => "two periods are neither `.` nor `...`",
            ErrorCode::UnexpectedCharacter => "unexpected character in input",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::StringContainsNewline => Some("close the string before the end of the line"),
            ErrorCode::UnterminatedChar => {
                Some("a character literal holds exactly one byte, e.g. `'a'`")
            }
            ErrorCode::UnknownTypeHint => {
                Some("valid suffixes are `f`, `u`, `l`, `lu`, `ll` and `llu`")
            }
            ErrorCode::ExtraneousPeriod => Some("use `.` for member access or `...` for an ellipsis"),
            ErrorCode::MultipleDots | ErrorCode::UnexpectedCharacter => None,
        }
    }
}
