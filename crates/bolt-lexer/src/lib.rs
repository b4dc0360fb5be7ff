//! Lexical analysis for Bolt.
//! Bolt 词法分析模块。
//!
//! `Scanner` is a byte cursor over a `SourceFile`; `Lexer` classifies the
//! bytes it yields into `Token`s on demand, with `next_token` and `peek`.
//! Tokens borrow their lexemes from the source buffer.
//! `Scanner` 是源码上的字节游标；`Lexer` 按需将字节分类为 `Token`。

mod error;
mod lexer;
mod scanner;
mod token;

pub use error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use scanner::{Scanner, is_whitespace};
pub use token::{Lexeme, Token, TokenKind};
