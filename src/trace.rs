use std::{
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
};

use crate::{ast::BinaryOperator, compiler::lexer::Token};

/// Append-only, line-oriented debug sink.
///
/// The sink records one line per token the parser pulls and one line per
/// binary-operation lowering event. It is purely diagnostic: a capability
/// handed to the parser and the lowering backend, whose absence never changes
/// any result. Writes are synchronous and unbuffered; the first failed write
/// emits a warning to stderr and disables the sink for the rest of the run.
pub struct Trace {
    sink:   File,
    failed: bool,
}

impl Trace {
    /// Opens `path` in append mode, creating the file if it does not exist.
    ///
    /// # Errors
    /// Propagates the I/O error when the file cannot be opened; callers are
    /// expected to warn and continue without tracing.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        let sink = OpenOptions::new().append(true).create(true).open(path)?;
        Ok(Self { sink, failed: false })
    }

    /// Records one lexed token and its byte offset.
    pub fn token(&mut self, token: Token, offset: usize) {
        self.write_line(format_args!("token {token} at offset {offset}"));
    }

    /// Records one binary-operation lowering event.
    pub fn lowered(&mut self, op: BinaryOperator) {
        self.write_line(format_args!("lower '{op}'"));
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.failed {
            return;
        }
        if let Err(e) = writeln!(self.sink, "{line}") {
            eprintln!("warning: trace sink failed, tracing disabled: {e}");
            self.failed = true;
        }
    }
}
