//! Terminal rendering of QR bitmaps.
//!
//! A terminal cell is roughly twice as tall as it is wide, so every strategy
//! here packs two vertically adjacent pixels into one cell. Rows are consumed
//! in pairs `(y, y + 1)` for `y = 0, 2, 4, ...` while `y + 1 < height`; when the
//! height is odd the last row has no partner and is not drawn.
//!
//! Two strategies are available:
//!
//! - [`Truecolor`] sets the foreground to the top pixel and the background to
//!   the bottom pixel and prints an upper half block. It reproduces any colors
//!   but needs 24-bit color support.
//! - [`Glyph`] treats any pixel with non-zero alpha as ink and picks one of four
//!   block glyphs. It needs no color support at all.

use std::io::{self, Write};

use clap::ValueEnum;
use image::DynamicImage;

mod glyph;
mod truecolor;

pub use glyph::Glyph;
pub use truecolor::Truecolor;

/// Upper half block, U+2580.
pub const UPPER_HALF: char = '\u{2580}';
/// Lower half block, U+2584.
pub const LOWER_HALF: char = '\u{2584}';
/// Full block, U+2588.
pub const FULL_BLOCK: char = '\u{2588}';

/// Left margin printed before every row.
pub const MARGIN: &str = "  ";

/// Draws a bitmap onto a terminal stream.
pub trait Render {
    /// Writes the whole bitmap to `out`. Only I/O errors from `out` are reported.
    fn render(&self, bitmap: &DynamicImage, out: &mut dyn Write) -> io::Result<()>;
}

/// Which rendering strategy to use.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RenderStyle {
    /// ANSI 24-bit foreground/background colors with upper half blocks.
    #[default]
    Truecolor,
    /// Colorless block glyphs chosen from pixel alpha.
    Glyph,
}

impl RenderStyle {
    pub fn renderer(self) -> Box<dyn Render> {
        match self {
            Self::Truecolor => Box::new(Truecolor),
            Self::Glyph => Box::new(Glyph),
        }
    }
}

/// Top rows of every drawable row pair.
pub(crate) fn row_pairs(height: u32) -> impl Iterator<Item = u32> {
    (0..height.saturating_sub(1)).step_by(2)
}
