//! PNG file output.

use std::path::Path;

use image::ImageFormat;
use log::debug;

use crate::error::Error;
use crate::symbol::Symbol;

/// Rasterizes `symbol` at `size` pixels and saves it as a PNG at `path`.
///
/// The image is black on white grayscale. The file is always PNG, whatever
/// extension `path` has. `size` is raised to the symbol's natural size if it
/// is too small to hold one pixel per module.
///
/// # Errors
///
/// Returns [`Error::Save`] if the file cannot be created or written.
///
/// # Example
///
/// ```rust,no_run
/// use file2qr::content::Payload;
/// use file2qr::recovery::RecoveryLevel;
/// use file2qr::sink::save_png;
/// use file2qr::symbol::Symbol;
///
/// let payload = Payload::prepare(b"Hello, World!", false);
/// let symbol = Symbol::generate(&payload, RecoveryLevel::Medium).unwrap();
/// save_png(&symbol, 256, "qr_code.png").unwrap();
/// ```
pub fn save_png(symbol: &Symbol, size: u32, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    let img = symbol.file_bitmap(size);
    debug!("saving {}x{} PNG to {}", img.width(), img.height(), path.display());
    img.save_with_format(path, ImageFormat::Png).map_err(Error::Save)
}
