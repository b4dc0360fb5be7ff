//! The `bolt lex` command.

use super::{CliError, DiagnosticFormat, read_source, report};
use bolt_common::SourceFile;
use bolt_lexer::{Lexer, TokenKind};
use std::io::{self, Write};
use tracing::debug;

/// Print the token stream of `file`, one token per line or as JSON.
pub fn run(file: &str, json: bool, format: DiagnosticFormat) -> Result<(), CliError> {
    let text = read_source(file)?;
    let source = SourceFile::new(file, &text);
    let mut lexer = Lexer::new(source);
    let mut stdout = io::stdout().lock();

    if json {
        let tokens = lexer
            .tokenize()
            .map_err(|err| report(source.text(), &err, format))?;
        serde_json::to_writer_pretty(&mut stdout, &tokens)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let mut count = 0usize;
    loop {
        let token = match lexer.next_token() {
            Ok(token) => token,
            Err(err) => {
                stdout.flush()?;
                return Err(report(source.text(), &err, format));
            }
        };
        writeln!(stdout, "{token}")?;
        count += 1;
        if token.kind == TokenKind::EndOfInput {
            break;
        }
    }

    debug!(file, count, "lexed");
    Ok(())
}
