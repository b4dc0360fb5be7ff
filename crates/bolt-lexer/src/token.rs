//! Token definitions for Bolt.

use bolt_common::{Location, Span};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// The kind of a token.
///
/// Every opening bracket is immediately followed by its closer, so the
/// closer's discriminant is always the opener's plus one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[repr(u8)]
pub enum TokenKind {
    EndOfInput,

    // Literals and names
    Identifier,
    StringLiteral,
    NumberLiteral,
    CharLiteral,

    // Paired brackets
    LeftSquare,  // [
    RightSquare, // ]
    LeftAngle,   // <
    RightAngle,  // >
    LeftCurly,   // {
    RightCurly,  // }
    LeftParen,   // (
    RightParen,  // )

    // Punctuation
    Dot,             // .
    Exclamation,     // !
    Comma,           // ,
    Colon,           // :
    Ellipsis,        // ...
    StaticSeparator, // ::

    // Reserved words
    Func,
    For,
    Using,
}

impl TokenKind {
    /// Returns the reserved word spelled by `text`, if any.
    pub fn keyword(text: &[u8]) -> Option<TokenKind> {
        match text {
            b"func" => Some(TokenKind::Func),
            b"for" => Some(TokenKind::For),
            b"using" => Some(TokenKind::Using),
            _ => None,
        }
    }

    /// Returns true if this token is a reserved word.
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::Func | TokenKind::For | TokenKind::Using)
    }

    /// Returns the bracket kind for a single byte, if it is one.
    pub fn bracket(byte: u8) -> Option<TokenKind> {
        match byte {
            b'[' => Some(TokenKind::LeftSquare),
            b']' => Some(TokenKind::RightSquare),
            b'<' => Some(TokenKind::LeftAngle),
            b'>' => Some(TokenKind::RightAngle),
            b'{' => Some(TokenKind::LeftCurly),
            b'}' => Some(TokenKind::RightCurly),
            b'(' => Some(TokenKind::LeftParen),
            b')' => Some(TokenKind::RightParen),
            _ => None,
        }
    }

    pub fn is_open_bracket(&self) -> bool {
        matches!(
            self,
            TokenKind::LeftSquare | TokenKind::LeftAngle | TokenKind::LeftCurly | TokenKind::LeftParen
        )
    }

    /// The closer matching an opening bracket.
    pub fn closing(&self) -> Option<TokenKind> {
        match self {
            TokenKind::LeftSquare => Some(TokenKind::RightSquare),
            TokenKind::LeftAngle => Some(TokenKind::RightAngle),
            TokenKind::LeftCurly => Some(TokenKind::RightCurly),
            TokenKind::LeftParen => Some(TokenKind::RightParen),
            _ => None,
        }
    }

    /// Short display name used by token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "NAME",
            TokenKind::StringLiteral => "STR",
            TokenKind::NumberLiteral => "NUM",
            TokenKind::CharLiteral => "CHR",
            TokenKind::LeftSquare => "[",
            TokenKind::RightSquare => "]",
            TokenKind::LeftAngle => "<",
            TokenKind::RightAngle => ">",
            TokenKind::LeftCurly => "{",
            TokenKind::RightCurly => "}",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::Dot => ".",
            TokenKind::Exclamation => "!",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Ellipsis => "...",
            TokenKind::StaticSeparator => "::",
            TokenKind::Func => "func",
            TokenKind::For => "for",
            TokenKind::Using => "using",
        }
    }
}

/// The source text of a token, borrowed from the buffer it was lexed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'src> {
    span: Span,
    bytes: &'src [u8],
}

impl<'src> Lexeme<'src> {
    pub fn new(span: Span, bytes: &'src [u8]) -> Self {
        Self { span, bytes }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn as_bytes(&self) -> &'src [u8] {
        self.bytes
    }

    /// The text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&'src str> {
        std::str::from_utf8(self.bytes).ok()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for Lexeme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.bytes))
    }
}

impl Serialize for Lexeme<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Lexeme", 2)?;
        state.serialize_field("span", &self.span)?;
        state.serialize_field("text", &String::from_utf8_lossy(self.bytes))?;
        state.end()
    }
}

/// A token with its kind, lexeme and location.
///
/// Punctuation and `EndOfInput` carry no lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: Option<Lexeme<'src>>,
    pub location: Location<'src>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: Option<Lexeme<'src>>, location: Location<'src>) -> Self {
        Self {
            kind,
            lexeme,
            location,
        }
    }

    pub fn text(&self) -> Option<&'src [u8]> {
        self.lexeme.map(|lexeme| lexeme.as_bytes())
    }
}

/// Dump format: `NAME{id=3(foo)} @ main.bl(1:1)`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lexeme {
            Some(lexeme) if !lexeme.is_empty() => write!(
                f,
                "{}{{id={}({})}} @ {}",
                self.kind.name(),
                lexeme.len(),
                lexeme,
                self.location
            ),
            _ => write!(f, "{} @ {}", self.kind.name(), self.location),
        }
    }
}
