use std::io::{self, Write};

use image::DynamicImage;

use super::{row_pairs, Render, MARGIN, UPPER_HALF};

/// Truecolor half-block renderer.
///
/// Each cell is `ESC[38;2;R;G;Bm ESC[48;2;R;G;Bm ▀` with the top pixel as
/// foreground and the bottom pixel as background. Every row ends with a color
/// reset, and the block is framed by an empty line above and below.
#[derive(Copy, Clone, Debug, Default)]
pub struct Truecolor;

impl Render for Truecolor {
    fn render(&self, bitmap: &DynamicImage, out: &mut dyn Write) -> io::Result<()> {
        let pixels = bitmap.to_rgba16();
        let (width, height) = pixels.dimensions();

        writeln!(out)?;
        for y in row_pairs(height) {
            out.write_all(MARGIN.as_bytes())?;
            for x in 0..width {
                let [r1, g1, b1] = rgb8(pixels.get_pixel(x, y).0);
                let [r2, g2, b2] = rgb8(pixels.get_pixel(x, y + 1).0);
                write!(
                    out,
                    "\x1b[38;2;{r1};{g1};{b1}m\x1b[48;2;{r2};{g2};{b2}m{UPPER_HALF}"
                )?;
            }
            out.write_all(b"\x1b[0m\n")?;
        }
        writeln!(out)?;
        out.flush()
    }
}

// 16-bit channels down to 8-bit; alpha is ignored.
fn rgb8([r, g, b, _]: [u16; 4]) -> [u8; 3] {
    [(r >> 8) as u8, (g >> 8) as u8, (b >> 8) as u8]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn render(img: RgbaImage) -> String {
        let mut out = Vec::new();
        Truecolor.render(&DynamicImage::ImageRgba8(img), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_white_over_black_cell() {
        let mut img = RgbaImage::new(1, 2);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 1, Rgba([0, 0, 0, 255]));
        assert_eq!(
            render(img),
            "\n  \x1b[38;2;255;255;255m\x1b[48;2;0;0;0m\u{2580}\x1b[0m\n\n"
        );
    }

    #[test]
    fn test_colors_pass_through_and_alpha_is_ignored() {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(1, 0, Rgba([10, 20, 30, 0]));
        img.put_pixel(1, 1, Rgba([200, 100, 50, 128]));
        let text = render(img);
        assert!(text.contains("\x1b[38;2;10;20;30m\x1b[48;2;200;100;50m\u{2580}"));
        assert!(text.contains("\x1b[38;2;0;0;0m\x1b[48;2;0;0;0m\u{2580}"));
    }

    #[test]
    fn test_odd_height_drops_last_row() {
        let mut img = RgbaImage::from_pixel(3, 5, Rgba([0, 0, 0, 255]));
        for x in 0..3 {
            img.put_pixel(x, 4, Rgba([9, 9, 9, 255]));
        }
        let text = render(img);
        let lines: Vec<&str> = text.split('\n').collect();
        // leading blank, two rows, trailing blank, and the empty tail after the final newline
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "");
        assert_eq!(lines[3], "");
        assert_eq!(text.matches(UPPER_HALF).count(), 6);
        assert!(!text.contains("9;9;9"));
        assert!(lines[1].starts_with("  \x1b[38;2;"));
        assert!(lines[1].ends_with("\x1b[0m"));
    }
}
