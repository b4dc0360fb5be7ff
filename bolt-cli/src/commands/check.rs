//! The `bolt check` command.

use super::{CliError, DiagnosticFormat, read_source, report};
use crate::output;
use bolt_common::SourceFile;
use bolt_lexer::Lexer;

/// Lex the whole of `file` and report whether it is well formed.
pub fn run(file: &str, verbose: bool, quiet: bool, format: DiagnosticFormat) -> Result<(), CliError> {
    let text = read_source(file)?;
    let source = SourceFile::new(file, &text);

    let tokens = Lexer::new(source)
        .tokenize()
        .map_err(|err| report(source.text(), &err, format))?;

    if verbose {
        output::info(&format!("Read {} bytes from '{}'", source.len(), file));
    }

    if !quiet {
        output::success(&format!("OK - {} tokens", tokens.len() - 1));
    }
    Ok(())
}
