//! Terminal alert sink.

use super::Notifier;
use std::io::Write;

/// Writes alerts to a terminal stream (stderr by default)
pub struct TerminalNotifier<W: Write + Send> {
    writer: W,
}

impl TerminalNotifier<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self {
            writer: std::io::stderr(),
        }
    }
}

impl<W: Write + Send> TerminalNotifier<W> {
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Notifier for TerminalNotifier<W> {
    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.writer, "{message}") {
            tracing::warn!("Failed to write alert: {e}");
        }
    }
}
