//! JSON Emitter
//!
//! Machine-readable diagnostic output: one array of flat objects.

use std::io::Write;

use crate::Diagnostic;

use super::{escape_json, DiagnosticEmitter};

/// JSON emitter for machine-readable output.
///
/// Call [`begin`](Self::begin) before the first diagnostic and
/// [`end`](Self::end) after the last one.
pub struct JsonEmitter<W: Write> {
    writer: W,
    first: bool,
}

impl<W: Write> JsonEmitter<W> {
    /// Create a new JSON emitter.
    pub fn new(writer: W) -> Self {
        JsonEmitter {
            writer,
            first: true,
        }
    }

    /// Begin the JSON array output.
    pub fn begin(&mut self) {
        let _ = write!(self.writer, "[");
    }

    /// End the JSON array output.
    pub fn end(&mut self) {
        if self.first {
            let _ = writeln!(self.writer, "]");
        } else {
            let _ = writeln!(self.writer, "\n]");
        }
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        if !self.first {
            let _ = write!(self.writer, ",");
        }
        self.first = false;

        // Build JSON manually (to avoid serde dependency)
        let location = match &diagnostic.location {
            Some(location) => format!("\"{}\"", escape_json(location)),
            None => "null".to_string(),
        };
        let _ = write!(
            self.writer,
            "\n  {{\"code\": \"{}\", \"phase\": \"{}\", \"line\": {}, \"location\": {}, \"message\": \"{}\"}}",
            diagnostic.code.as_str(),
            diagnostic.phase,
            diagnostic.line,
            location,
            escape_json(&diagnostic.message)
        );
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, _error_count: usize) {
        // The array length is the count.
    }
}
