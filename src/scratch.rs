//! Round-tripping a bitmap through a temporary PNG file.
//!
//! The terminal path draws from a decoded PNG rather than from the in-memory
//! raster, so what is shown is exactly what a file consumer would read back.
//! The temporary file lives in a [`NamedTempFile`] and is removed when it is
//! dropped, whichever way this function returns.

use image::{DynamicImage, ImageFormat, RgbaImage};
use log::trace;
use tempfile::{Builder, NamedTempFile};

use crate::error::DisplayError;

/// Writes `bitmap` to a `file2qr-*.png` temp file and decodes it again.
pub fn round_trip(bitmap: &RgbaImage) -> Result<DynamicImage, DisplayError> {
    let scratch = create()?;
    trace!("scratch image at {}", scratch.path().display());

    bitmap
        .save_with_format(scratch.path(), ImageFormat::Png)
        .map_err(DisplayError::WriteTemp)?;
    decode(scratch)
}

// Takes ownership so the file is gone by the time this returns.
fn decode(scratch: NamedTempFile) -> Result<DynamicImage, DisplayError> {
    image::open(scratch.path()).map_err(DisplayError::Decode)
}

fn create() -> Result<NamedTempFile, DisplayError> {
    Builder::new()
        .prefix("file2qr-")
        .suffix(".png")
        .tempfile()
        .map_err(DisplayError::TempFile)
}
