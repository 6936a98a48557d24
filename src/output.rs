use std::io::Write;

use crate::domain::{Outcome, Output};

/// Writes one line per outcome. Write failures are dropped: there is nowhere
/// left to report them.
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl ConsoleOutput<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Output for ConsoleOutput<W> {
    fn report(&mut self, outcome: &Outcome) {
        if let Err(e) = writeln!(self.writer, "{}", outcome) {
            tracing::warn!(error = %e, "failed to write outcome");
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.writer.flush() {
            tracing::warn!(error = %e, "failed to flush output");
        }
    }
}
