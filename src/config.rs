//! The immutable run configuration.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::recovery::RecoveryLevel;
use crate::render::RenderStyle;

/// Everything a single invocation needs, resolved once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Input file; `None` reads standard input. Of several FILE arguments the last wins.
    pub input: Option<PathBuf>,
    /// PNG destination; `None` renders to the terminal instead.
    pub output: Option<PathBuf>,
    /// Pixel size of the PNG file.
    pub file_size: u32,
    /// Pixel size of the bitmap drawn in the terminal.
    pub term_size: u32,
    pub recovery: RecoveryLevel,
    /// The `-r` token when it was not recognized and `recovery` fell back to Medium.
    pub rejected_recovery: Option<String>,
    pub base64: bool,
    pub style: RenderStyle,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            file_size: 256,
            term_size: 40,
            recovery: RecoveryLevel::Medium,
            rejected_recovery: None,
            base64: false,
            style: RenderStyle::Truecolor,
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let rejected_recovery = RecoveryLevel::parse(&cli.recovery)
            .is_none()
            .then(|| cli.recovery.clone());
        Self {
            input: cli.inputs.into_iter().last(),
            output: cli.output,
            file_size: cli.size,
            term_size: cli.term_size,
            recovery: RecoveryLevel::from_token(&cli.recovery),
            rejected_recovery,
            base64: cli.base64,
            style: cli.style,
        }
    }
}
