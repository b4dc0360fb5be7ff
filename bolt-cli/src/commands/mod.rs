//! CLI command implementations.

pub mod check;
pub mod lex;

use bolt_diagnostic::{emit, emit_pretty};
use bolt_lexer::LexError;
use clap::ValueEnum;
use std::{fs, io};
use thiserror::Error;

/// How lexical errors are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DiagnosticFormat {
    /// Header, source line and `~~^` underline.
    Classic,
    /// Ariadne report.
    Pretty,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read file '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("aborting due to a lexical error")]
    Lex,

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Load a whole source file into memory.
pub fn read_source(path: &str) -> Result<Vec<u8>, CliError> {
    fs::read(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Show `err` against `text` and turn it into the fatal CLI error.
pub fn report(text: &[u8], err: &LexError<'_>, format: DiagnosticFormat) -> CliError {
    let diagnostic = err.to_diagnostic();
    let emitted = match format {
        DiagnosticFormat::Classic => emit(text, &diagnostic),
        DiagnosticFormat::Pretty => emit_pretty(text, &diagnostic),
    };
    match emitted {
        Ok(()) => CliError::Lex,
        Err(e) => CliError::Io(e),
    }
}
