//! Line/column positions.

use crate::BytePos;
use serde::Serialize;
use std::fmt;

/// A position in a named source buffer.
///
/// `line` and `column` are 1-based and name the next unconsumed byte.
/// The live cursor advances a `Location` in place; tokens keep a copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Location<'src> {
    pub line: u32,
    pub column: u32,
    pub offset: BytePos,
    pub source_name: &'src str,
}

impl<'src> Location<'src> {
    /// The location of the first byte of `source_name`.
    pub fn start(source_name: &'src str) -> Self {
        Self {
            line: 1,
            column: 1,
            offset: BytePos::ZERO,
            source_name,
        }
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}:{})", self.source_name, self.line, self.column)
    }
}
