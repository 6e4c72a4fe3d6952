//! Informational notes for the user, kept out of redirected output.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

use log::debug;

/// A sink for human-readable notes that is silent unless attached to a terminal.
pub struct Diagnostics<W: Write> {
    sink: Option<W>,
}

impl Diagnostics<io::Stderr> {
    /// Notes go to stderr only when stderr is an interactive terminal.
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        let attached = stderr.is_terminal();
        Self::new(attached.then_some(stderr))
    }
}

impl<W: Write> Diagnostics<W> {
    pub fn new(sink: Option<W>) -> Self {
        Self { sink }
    }

    /// A sink that drops every note.
    pub fn silent() -> Self {
        Self { sink: None }
    }

    /// Writes one line. Failures to write a note are logged and otherwise ignored.
    pub fn note(&mut self, message: impl Display) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(sink, "{message}") {
            debug!("dropped diagnostic note: {err}");
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attached_sink_receives_notes() {
        let mut diag = Diagnostics::new(Some(Vec::new()));
        diag.note("Read 3 bytes of input");
        diag.note(format_args!("QR code saved to: {}", "out.png"));
        let text = String::from_utf8(diag.into_inner().unwrap()).unwrap();
        assert_eq!(text, "Read 3 bytes of input\nQR code saved to: out.png\n");
    }

    #[test]
    fn test_silent_sink_drops_notes() {
        let mut diag = Diagnostics::<Vec<u8>>::silent();
        diag.note("nothing");
        assert!(diag.into_inner().is_none());
    }
}
