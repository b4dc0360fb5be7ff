//! Diagnostic types and builders.

use crate::ErrorCode;
use bolt_common::Location;

/// A fatal diagnostic: a location, a one-line header and an optional footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<'src> {
    pub code: Option<ErrorCode>,
    pub location: Location<'src>,
    pub header: String,
    pub footer: Option<String>,
}

impl<'src> Diagnostic<'src> {
    pub fn error(location: Location<'src>, header: impl Into<String>) -> Self {
        Self {
            code: None,
            location,
            header: header.into(),
            footer: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}
