//! The Bolt lexer.
//! Bolt 词法分析器。

use crate::error::{LexError, LexErrorKind};
use crate::scanner::Scanner;
use crate::token::{Lexeme, Token, TokenKind};
use bolt_common::{BytePos, Location, SourceFile};
use tracing::{debug, trace};

type LexResult<'src, T> = Result<T, LexError<'src>>;

/// A token scanned ahead by `peek(0)` and the position just past it.
#[derive(Debug, Clone, Copy)]
struct Lookahead<'src> {
    token: Token<'src>,
    resume: Location<'src>,
}

/// The Bolt lexer.
/// Bolt 词法分析器。
///
/// Produces tokens on demand. `next_token` consumes, `peek(n)` looks `n`
/// tokens past the consumption point without consuming anything. Only the
/// immediate next token is remembered between calls; deeper peeks rescan.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    scanner: Scanner<'src>,
    lookahead: Option<Lookahead<'src>>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source buffer.
    /// 为给定的源码缓冲区创建新的词法分析器。
    pub fn new(source: SourceFile<'src>) -> Self {
        Self {
            scanner: Scanner::new(source),
            lookahead: None,
        }
    }

    pub fn source(&self) -> SourceFile<'src> {
        self.scanner.source()
    }

    /// Consume and return the next token.
    /// 消耗并返回下一个 token。
    ///
    /// Once the input is exhausted every call returns `EndOfInput`.
    pub fn next_token(&mut self) -> LexResult<'src, Token<'src>> {
        if let Some(cached) = self.lookahead.take() {
            self.scanner.reset_to(cached.resume);
            return Ok(cached.token);
        }

        let token = self.scan_token().inspect_err(|err| {
            debug!(kind = ?err.kind, line = err.location.line, column = err.location.column, "lex error");
        })?;
        trace!(
            kind = token.kind.name(),
            lexeme = %token.lexeme.map(|l| l.to_string()).unwrap_or_default(),
            line = token.location.line,
            column = token.location.column,
            "token"
        );
        Ok(token)
    }

    /// Return the token `n` positions ahead without consuming it.
    /// 返回前方第 n 个 token，但不消耗它。
    pub fn peek(&mut self, n: usize) -> LexResult<'src, Token<'src>> {
        if n == 0 {
            if let Some(cached) = &self.lookahead {
                return Ok(cached.token);
            }
        }
        trace!(n, "peek");

        let mut ahead = self.clone();
        let first = ahead.next_token()?;
        if self.lookahead.is_none() {
            self.lookahead = Some(Lookahead {
                token: first,
                resume: ahead.scanner.location(),
            });
        }

        let mut token = first;
        for _ in 0..n {
            token = ahead.next_token()?;
        }
        Ok(token)
    }

    /// Tokenize the rest of the input, up to and including `EndOfInput`.
    /// 对剩余输入进行词法分析，直到并包括 `EndOfInput`。
    pub fn tokenize(mut self) -> LexResult<'src, Vec<Token<'src>>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_end = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if is_end {
                break;
            }
        }

        Ok(tokens)
    }

    /// Scan one token starting at the cursor.
    fn scan_token(&mut self) -> LexResult<'src, Token<'src>> {
        self.skip_trivia();

        let location = self.scanner.location();
        let Some(first) = self.scanner.peek_char(0) else {
            return Ok(Token::new(TokenKind::EndOfInput, None, location));
        };

        let (kind, lexeme) = match first {
            b if b.is_ascii_alphabetic() => self.identifier(location.offset),
            b'"' => self.string_literal(location)?,
            b'\'' => self.char_literal()?,
            b if b.is_ascii_digit() => self.number_literal(location.offset)?,
            _ => (self.punctuation(first, location)?, None),
        };

        self.scanner.skip_whitespace();
        Ok(Token::new(kind, lexeme, location))
    }

    /// Skip whitespace, `;` separators and `//` line comments, in any order.
    fn skip_trivia(&mut self) {
        loop {
            self.scanner.skip_whitespace();
            match (self.scanner.peek_char(0), self.scanner.peek_char(1)) {
                (Some(b';'), _) => {
                    self.scanner.consume_char();
                }
                (Some(b'/'), Some(b'/')) => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// Skip everything up to and including the next newline.
    fn skip_line_comment(&mut self) {
        while let Some(byte) = self.scanner.consume_char() {
            if byte == b'\n' {
                break;
            }
        }
    }

    /// Letter followed by letters and digits; reserved words get their own kind.
    fn identifier(&mut self, start: BytePos) -> (TokenKind, Option<Lexeme<'src>>) {
        while self
            .scanner
            .peek_char(0)
            .is_some_and(|b| b.is_ascii_alphanumeric())
        {
            self.scanner.consume_char();
        }

        let lexeme = self.lexeme_from(start);
        let kind = TokenKind::keyword(lexeme.as_bytes()).unwrap_or(TokenKind::Identifier);
        (kind, Some(lexeme))
    }

    /// `"..."` on a single line, no escapes. The lexeme excludes the quotes.
    fn string_literal(
        &mut self,
        opening: Location<'src>,
    ) -> LexResult<'src, (TokenKind, Option<Lexeme<'src>>)> {
        self.scanner.consume_char();
        let start = self.scanner.location().offset;

        loop {
            match self.scanner.peek_char(0) {
                Some(b'"') => break,
                Some(b'\n') => {
                    return Err(LexError::new(LexErrorKind::StringContainsNewline, opening));
                }
                Some(_) => {
                    self.scanner.consume_char();
                }
                None => return Err(self.error_here(LexErrorKind::UnterminatedString)),
            }
        }

        let lexeme = self.lexeme_from(start);
        self.scanner.consume_char();
        Ok((TokenKind::StringLiteral, Some(lexeme)))
    }

    /// `'x'`: exactly one byte between the quotes, no escapes.
    fn char_literal(&mut self) -> LexResult<'src, (TokenKind, Option<Lexeme<'src>>)> {
        self.scanner.consume_char();
        let start = self.scanner.location().offset;

        if self.scanner.consume_char().is_none() {
            return Err(self.error_here(LexErrorKind::UnterminatedChar));
        }
        let lexeme = self.lexeme_from(start);

        if self.scanner.consume_char() != Some(b'\'') {
            return Err(self.error_here(LexErrorKind::UnterminatedChar));
        }
        Ok((TokenKind::CharLiteral, Some(lexeme)))
    }

    /// Digits with at most one `.`, then an optional type hint suffix.
    fn number_literal(
        &mut self,
        start: BytePos,
    ) -> LexResult<'src, (TokenKind, Option<Lexeme<'src>>)> {
        let mut seen_dot = false;

        loop {
            match self.scanner.peek_char(0) {
                Some(b'0'..=b'9') => {}
                Some(b'.') if seen_dot => {
                    return Err(self.error_here(LexErrorKind::MultipleDots));
                }
                Some(b'.') => seen_dot = true,
                Some(b) if b.is_ascii_alphabetic() => {
                    self.type_hint(b)?;
                    break;
                }
                _ => break,
            }
            self.scanner.consume_char();
        }

        Ok((TokenKind::NumberLiteral, Some(self.lexeme_from(start))))
    }

    /// One of `f`, `u`, `l`, `lu`, `ll`, `llu`.
    fn type_hint(&mut self, first: u8) -> LexResult<'src, ()> {
        match first {
            b'f' | b'u' => {
                self.scanner.consume_char();
            }
            b'l' => {
                self.scanner.consume_char();
                if self.scanner.peek_char(0) == Some(b'l') {
                    self.scanner.consume_char();
                }
                if self.scanner.peek_char(0) == Some(b'u') {
                    self.scanner.consume_char();
                }
            }
            _ => return Err(self.error_here(LexErrorKind::UnknownTypeHint)),
        }
        Ok(())
    }

    /// Brackets and the remaining one-, two- and three-byte punctuation.
    fn punctuation(&mut self, first: u8, location: Location<'src>) -> LexResult<'src, TokenKind> {
        if let Some(bracket) = TokenKind::bracket(first) {
            self.scanner.consume_char();
            return Ok(bracket);
        }

        let kind = match first {
            b':' => {
                self.scanner.consume_char();
                if self.scanner.peek_char(0) == Some(b':') {
                    self.scanner.consume_char();
                    TokenKind::StaticSeparator
                } else {
                    TokenKind::Colon
                }
            }
            b'.' => {
                self.scanner.consume_char();
                if self.scanner.peek_char(0) == Some(b'.') {
                    self.scanner.consume_char();
                    if self.scanner.peek_char(0) != Some(b'.') {
                        return Err(self.error_here(LexErrorKind::ExtraneousPeriod));
                    }
                    self.scanner.consume_char();
                    TokenKind::Ellipsis
                } else {
                    TokenKind::Dot
                }
            }
            b'!' => {
                self.scanner.consume_char();
                TokenKind::Exclamation
            }
            b',' => {
                self.scanner.consume_char();
                TokenKind::Comma
            }
            _ => return Err(LexError::new(LexErrorKind::UnexpectedCharacter, location)),
        };
        Ok(kind)
    }

    fn lexeme_from(&self, start: BytePos) -> Lexeme<'src> {
        let (span, bytes) = self.scanner.slice_from(start);
        Lexeme::new(span, bytes)
    }

    fn error_here(&self, kind: LexErrorKind) -> LexError<'src> {
        LexError::new(kind, self.scanner.location())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexer(text: &'static str) -> Lexer<'static> {
        Lexer::new(SourceFile::from_text("test.bl", text))
    }

    #[test]
    fn test_peek_zero_is_cached_until_next() {
        let mut lex = lexer("a b");
        let peeked = lex.peek(0).unwrap();
        assert!(lex.lookahead.is_some());
        assert_eq!(lex.scanner.location().column, 1);

        let next = lex.next_token().unwrap();
        assert_eq!(peeked, next);
        assert!(lex.lookahead.is_none());
        assert_eq!(lex.scanner.location().column, 3);
    }

    #[test]
    fn test_deep_peek_caches_only_the_first() {
        let mut lex = lexer("a b c");
        let third = lex.peek(2).unwrap();
        assert_eq!(third.text(), Some(&b"c"[..]));
        let cached = lex.lookahead.unwrap();
        assert_eq!(cached.token.text(), Some(&b"a"[..]));
        assert_eq!(lex.scanner.location().column, 1);
    }

    #[test]
    fn test_failed_peek_leaves_state_untouched() {
        let mut lex = lexer("a ..");
        assert!(lex.peek(1).is_err());
        assert_eq!(lex.next_token().unwrap().text(), Some(&b"a"[..]));
        assert_eq!(
            lex.next_token().unwrap_err().kind,
            LexErrorKind::ExtraneousPeriod
        );
    }
}
