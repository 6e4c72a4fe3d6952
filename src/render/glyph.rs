use std::io::{self, Write};

use image::{DynamicImage, GenericImageView};

use super::{row_pairs, Render, FULL_BLOCK, LOWER_HALF, MARGIN, UPPER_HALF};

/// Colorless renderer that picks a block glyph per pixel pair.
///
/// A pixel is ink when its alpha is non-zero. Rows are padded on both sides
/// and no framing lines are added, so the output has exactly one line per
/// row pair.
#[derive(Copy, Clone, Debug, Default)]
pub struct Glyph;

impl Glyph {
    /// The glyph for a (top, bottom) ink pair.
    pub fn cell(top: bool, bottom: bool) -> char {
        match (top, bottom) {
            (true, true) => FULL_BLOCK,
            (true, false) => UPPER_HALF,
            (false, true) => LOWER_HALF,
            (false, false) => ' ',
        }
    }
}

impl Render for Glyph {
    fn render(&self, bitmap: &DynamicImage, out: &mut dyn Write) -> io::Result<()> {
        let (width, height) = bitmap.dimensions();
        let is_ink = |x, y| bitmap.get_pixel(x, y)[3] > 0;

        let mut line = String::new();
        for y in row_pairs(height) {
            line.clear();
            line.push_str(MARGIN);
            for x in 0..width {
                line.push(Self::cell(is_ink(x, y), is_ink(x, y + 1)));
            }
            line.push_str(MARGIN);
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }
}
