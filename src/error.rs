//! Error types for every stage of the pipeline.
//!
//! None of these are recovered from: the binary prints the message (and any
//! [`Error::hints`]) to stderr and exits with status 1.

use std::io;
use std::path::PathBuf;

use image::ImageError;
use qrcode::types::QrError;
use thiserror::Error;

use crate::symbol::CAPACITY_HINT_THRESHOLD;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading file: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error reading from stdin: {0}")]
    ReadStdin(#[source] io::Error),

    /// Symbol generation failed, almost always because the payload is too
    /// large for the chosen recovery level.
    #[error("Error generating QR code: {source}")]
    Capacity {
        payload_len: usize,
        #[source]
        source: QrError,
    },

    #[error("Error saving QR code to file: {0}")]
    Save(#[source] ImageError),

    #[error("Error: Output is not a terminal. Use -o/--output to specify an output file.")]
    NotATerminal,

    #[error("Error displaying QR code: {0}")]
    Display(#[source] DisplayError),
}

impl Error {
    /// Follow-up lines suggesting how to get past the failure, if any apply.
    pub fn hints(&self) -> Vec<String> {
        match self {
            Self::Capacity { payload_len, .. } if *payload_len > CAPACITY_HINT_THRESHOLD => vec![
                format!("Content size ({payload_len} bytes) might be too large for a QR code."),
                "Try reducing file size or using the -b/--base64 option for binary files.".to_string(),
            ],
            _ => Vec::new(),
        }
    }
}

/// Failures while drawing a symbol in the terminal.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("failed to create temporary file: {0}")]
    TempFile(#[source] io::Error),

    #[error("failed to write QR code to temporary file: {0}")]
    WriteTemp(#[source] ImageError),

    #[error("failed to decode QR code image: {0}")]
    Decode(#[source] ImageError),

    #[error("failed to write to terminal: {0}")]
    Terminal(#[source] io::Error),
}

impl From<DisplayError> for Error {
    fn from(err: DisplayError) -> Self {
        Self::Display(err)
    }
}
