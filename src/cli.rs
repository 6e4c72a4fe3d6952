//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::render::RenderStyle;

const AFTER_HELP: &str = "\
If FILE is not specified, file2qr reads from standard input.
If -o/--output is not specified, displays QR code in terminal.";

// clap prefixes this with the program name.
const VERSION_TEXT: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nCopyright (C) 2025 file2qr contributors",
    "\nLicense GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.",
    "\nThis is free software: you are free to change and redistribute it.",
    "\nThere is NO WARRANTY, to the extent permitted by law.",
);

/// Convert files to QR codes.
#[derive(Debug, Parser)]
#[command(name = "file2qr", version = VERSION_TEXT, disable_version_flag = true, after_help = AFTER_HELP)]
pub struct Cli {
    /// Input files; only the last one is read (standard input when none)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Output QR code file path (PNG format)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// QR code size in pixels
    #[arg(short, long, default_value_t = 256)]
    pub size: u32,

    /// Size of QR code when displayed in terminal
    #[arg(short, long = "term-size", default_value_t = 40)]
    pub term_size: u32,

    /// QR code recovery level: low, medium, high, highest
    #[arg(short, long, default_value = "medium", value_name = "LEVEL")]
    pub recovery: String,

    /// Base64 encode content (recommended for binary files)
    #[arg(short, long)]
    pub base64: bool,

    /// Terminal rendering style
    #[arg(long, value_enum, default_value_t = RenderStyle::Truecolor)]
    pub style: RenderStyle,

    /// Display version information and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}
