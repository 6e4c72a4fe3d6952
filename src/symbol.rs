//! The symbol generator boundary.
//!
//! Encoding itself (mode selection, Reed-Solomon blocks, masking) is done by the
//! `qrcode` crate. This module only wraps the result and rasterizes it on demand
//! at whatever pixel size the caller asks for.

use image::{ImageBuffer, Luma, Pixel, Rgba, RgbaImage};
use log::debug;
use qrcode::types::QrError;
use qrcode::{Color, QrCode};

use crate::content::Payload;
use crate::recovery::RecoveryLevel;

/// Light modules drawn around the symbol on every side.
pub const QUIET_ZONE: u32 = 4;

/// Payload length past which a generation failure is probably a capacity problem.
pub const CAPACITY_HINT_THRESHOLD: usize = 2900;

/// Opaque black, used for dark modules in terminal bitmaps.
pub const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Transparent white, used for light modules in terminal bitmaps.
pub const PAPER: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// A generated QR symbol that has not been rasterized yet.
pub struct Symbol {
    code: QrCode,
}

impl Symbol {
    /// Encodes `payload` at the given recovery level.
    ///
    /// # Errors
    ///
    /// Returns the `qrcode` error unchanged, most commonly
    /// [`QrError::DataTooLong`] when the payload exceeds the capacity of the
    /// largest symbol at this level.
    pub fn generate(payload: &Payload, level: RecoveryLevel) -> Result<Self, QrError> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), level.ec_level())?;
        debug!(
            "generated {:?} symbol at {:?}: {} modules wide",
            code.version(),
            code.error_correction_level(),
            code.width()
        );
        Ok(Self { code })
    }

    /// Width of the symbol in modules, without the quiet zone.
    pub fn modules(&self) -> u32 {
        self.code.width() as u32
    }

    /// Whether the module at (`x`, `y`) is dark. Coordinates outside the symbol
    /// (including the quiet zone) are light.
    pub fn is_dark(&self, x: i64, y: i64) -> bool {
        let width = self.code.width() as i64;
        if x < 0 || y < 0 || x >= width || y >= width {
            return false;
        }
        self.code[(x as usize, y as usize)] == Color::Dark
    }

    /// Rasterizes the symbol onto a square canvas of `size` pixels.
    ///
    /// The canvas is grown to the symbol's natural size (one pixel per module,
    /// quiet zone included) when `size` is smaller than that. Modules are drawn
    /// at the largest whole-pixel scale that fits and the result is centered,
    /// leaving any remainder as extra light margin.
    pub fn to_image<P: Pixel>(&self, size: u32, dark: P, light: P) -> ImageBuffer<P, Vec<P::Subpixel>> {
        let natural = self.modules() + 2 * QUIET_ZONE;
        let size = size.max(natural);
        let scale = size / natural;
        let offset = (size - natural * scale) / 2;

        let mut img = ImageBuffer::from_pixel(size, size, light);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if x < offset || y < offset {
                continue;
            }
            let module_x = ((x - offset) / scale) as i64 - QUIET_ZONE as i64;
            let module_y = ((y - offset) / scale) as i64 - QUIET_ZONE as i64;
            if self.is_dark(module_x, module_y) {
                *pixel = dark;
            }
        }
        img
    }

    /// The bitmap shown in the terminal: opaque ink on transparent paper.
    pub fn terminal_bitmap(&self, size: u32) -> RgbaImage {
        self.to_image(size, INK, PAPER)
    }

    /// The bitmap written to disk: black on white grayscale.
    pub fn file_bitmap(&self, size: u32) -> ImageBuffer<Luma<u8>, Vec<u8>> {
        self.to_image(size, Luma([0u8]), Luma([255u8]))
    }
}
