//! The single-shot pipeline: read, prepare, generate, then deliver to one sink.

use std::fs;
use std::io::{self, BufWriter, IsTerminal, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::config::Config;
use crate::content::Payload;
use crate::diagnostics::Diagnostics;
use crate::error::{DisplayError, Error};
use crate::render::Render;
use crate::scratch;
use crate::sink::save_png;
use crate::symbol::Symbol;

/// The stream terminal output goes to, and whether it is an interactive terminal.
pub struct Terminal<W: Write> {
    pub out: W,
    pub is_terminal: bool,
}

/// Runs one invocation against the real process streams.
pub fn run(config: &Config) -> Result<(), Error> {
    let input = read_input(config.input.as_deref())?;
    let stdout = io::stdout();
    let terminal = Terminal {
        is_terminal: stdout.is_terminal(),
        out: BufWriter::new(stdout.lock()),
    };
    execute(config, &input, terminal, &mut Diagnostics::stderr())
}

/// Reads the whole input file, or standard input to end-of-stream when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>, Error> {
    let data = match path {
        Some(path) => fs::read(path).map_err(|source| Error::ReadFile {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            let mut data = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut data)
                .map_err(Error::ReadStdin)?;
            data
        }
    };
    debug!("read {} input bytes", data.len());
    Ok(data)
}

/// Encodes `input` and delivers the symbol to the PNG sink when an output path
/// is configured, or to `terminal` otherwise.
///
/// # Errors
///
/// - [`Error::Capacity`] when the payload does not fit in a symbol.
/// - [`Error::Save`] when the PNG cannot be written.
/// - [`Error::NotATerminal`] when terminal output is needed but `terminal` is not one.
/// - [`Error::Display`] when the terminal round trip or drawing fails.
pub fn execute<W: Write, D: Write>(
    config: &Config,
    input: &[u8],
    mut terminal: Terminal<W>,
    diagnostics: &mut Diagnostics<D>,
) -> Result<(), Error> {
    if let Some(token) = &config.rejected_recovery {
        diagnostics.note(format_args!("Unrecognized recovery level {token:?}, using medium"));
    }
    let payload = Payload::prepare(input, config.base64);
    for note in payload.diagnostics() {
        diagnostics.note(note);
    }

    let symbol = Symbol::generate(&payload, config.recovery).map_err(|source| Error::Capacity {
        payload_len: payload.len(),
        source,
    })?;

    match &config.output {
        Some(path) => {
            save_png(&symbol, config.file_size, path)?;
            info!("wrote {}", path.display());
            diagnostics.note(format_args!("QR code saved to: {}", path.display()));
        }
        None => {
            if !terminal.is_terminal {
                return Err(Error::NotATerminal);
            }
            let renderer = config.style.renderer();
            display(&symbol, config.term_size, renderer.as_ref(), &mut terminal.out)?;
        }
    }
    Ok(())
}

/// Draws `symbol` at `size` pixels through a scratch PNG round trip.
pub fn display(
    symbol: &Symbol,
    size: u32,
    renderer: &dyn Render,
    out: &mut dyn Write,
) -> Result<(), DisplayError> {
    let bitmap = scratch::round_trip(&symbol.terminal_bitmap(size))?;
    debug!("rendering {}x{} bitmap", bitmap.width(), bitmap.height());
    renderer.render(&bitmap, out).map_err(DisplayError::Terminal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recovery::RecoveryLevel;
    use crate::render::RenderStyle;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_read_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = read_input(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, Error::ReadFile { ref path, .. } if path == &missing));
        assert!(err.to_string().starts_with("Error reading file: "));
    }

    #[test]
    fn test_read_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.bin");
        fs::write(&path, [0u8, 1, 2, 255]).unwrap();
        assert_eq!(read_input(Some(path.as_path())).unwrap(), vec![0, 1, 2, 255]);
    }

    #[test]
    fn test_render_write_failure_is_display_error() {
        let config = Config::default();
        let terminal = Terminal {
            out: BrokenPipe,
            is_terminal: true,
        };
        let err = execute(&config, b"abc", terminal, &mut Diagnostics::<Vec<u8>>::silent()).unwrap_err();
        assert!(matches!(err, Error::Display(DisplayError::Terminal(_))));
    }

    #[test]
    fn test_glyph_style_in_pipeline() {
        let config = Config {
            style: RenderStyle::Glyph,
            recovery: RecoveryLevel::Low,
            ..Config::default()
        };
        let mut diagnostics = Diagnostics::new(Some(Vec::new()));
        let mut out = Vec::new();
        let terminal = Terminal {
            out: &mut out,
            is_terminal: true,
        };
        execute(&config, b"glyphs", terminal, &mut diagnostics).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains('\x1b'));
        // term size 40 -> 40x40 bitmap -> 20 rows of 40 cells plus margins
        assert_eq!(text.lines().count(), 20);
        assert!(text.lines().all(|line| line.chars().count() == 44));
        assert!(text.contains('\u{2588}'));

        let notes = String::from_utf8(diagnostics.into_inner().unwrap()).unwrap();
        assert_eq!(notes, "Read 6 bytes of input\n");
    }

    #[test]
    fn test_recovery_fallback_is_a_diagnostic_note() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            output: Some(dir.path().join("qr.png")),
            rejected_recovery: Some("bogus".to_string()),
            ..Config::default()
        };
        let terminal = Terminal {
            out: Vec::new(),
            is_terminal: false,
        };

        let mut attached = Diagnostics::new(Some(Vec::new()));
        execute(&config, b"hi", terminal, &mut attached).unwrap();
        let notes = String::from_utf8(attached.into_inner().unwrap()).unwrap();
        assert!(notes.starts_with("Unrecognized recovery level \"bogus\", using medium\n"));

        // Redirected stderr gets nothing, and the run still succeeds.
        let terminal = Terminal {
            out: Vec::new(),
            is_terminal: false,
        };
        let mut silent = Diagnostics::<Vec<u8>>::silent();
        execute(&config, b"hi", terminal, &mut silent).unwrap();
        assert!(silent.into_inner().is_none());
    }
}
