//! Diagnostic and error reporting for Bolt.
//! Bolt 的诊断和错误报告。
//!
//! Diagnostics are rendered in one of two shapes:
//! - the classic caret form (`render`), a header line followed by the
//!   offending source line and a `~~~^~~` underline;
//! - a pretty form built on ariadne (`render_pretty`).
//!
//! Rendering never terminates the process. Callers decide what a fatal
//! diagnostic means for them.

mod codes;
mod diagnostic;
mod pretty;
mod render;

pub use codes::ErrorCode;
pub use diagnostic::Diagnostic;
pub use pretty::render_pretty;
pub use render::{TAB_WIDTH, render};

use std::io::{self, Write};

/// Render a diagnostic in the classic form to stderr.
/// 以经典形式将诊断信息渲染到标准错误输出。
pub fn emit(source: &[u8], diagnostic: &Diagnostic<'_>) -> io::Result<()> {
    let mut stderr = io::stderr().lock();
    stderr.write_all(render(source, diagnostic).as_bytes())?;
    stderr.flush()
}

/// Render a diagnostic through ariadne to stderr.
/// 通过 ariadne 将诊断信息渲染到标准错误输出。
pub fn emit_pretty(source: &[u8], diagnostic: &Diagnostic<'_>) -> io::Result<()> {
    let rendered = render_pretty(source, diagnostic, true)?;
    let mut stderr = io::stderr().lock();
    stderr.write_all(rendered.as_bytes())?;
    stderr.flush()
}
