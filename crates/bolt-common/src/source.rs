//! Source buffers.
//! 源码缓冲区。

use crate::{Location, Span};

/// A read-only, named view of one source buffer.
/// 单个源码缓冲区的只读命名视图。
///
/// The buffer is null-free: content ends at the first NUL byte, if any.
/// Tokens borrow from `text`, so a `SourceFile` must outlive every token
/// produced from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFile<'src> {
    name: &'src str,
    text: &'src [u8],
}

impl<'src> SourceFile<'src> {
    pub fn new(name: &'src str, text: &'src [u8]) -> Self {
        let end = text.iter().position(|&b| b == 0).unwrap_or(text.len());
        Self {
            name,
            text: &text[..end],
        }
    }

    pub fn from_text(name: &'src str, text: &'src str) -> Self {
        Self::new(name, text.as_bytes())
    }

    /// Display name used in diagnostics.
    pub fn name(&self) -> &'src str {
        self.name
    }

    pub fn text(&self) -> &'src [u8] {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bytes covered by `span`.
    pub fn slice(&self, span: Span) -> &'src [u8] {
        &self.text[span.range()]
    }

    /// Location of the first byte of this buffer.
    pub fn start_location(&self) -> Location<'src> {
        Location::start(self.name)
    }
}
