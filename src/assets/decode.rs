use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, RgbaImage};

use crate::foundation::error::{SignscaleError, SignscaleResult};

/// Decode an uploaded photo (JPEG or PNG) into straight-alpha RGBA8.
pub fn decode_photo(bytes: &[u8]) -> SignscaleResult<RgbaImage> {
    let format = image::guess_format(bytes)
        .map_err(|e| SignscaleError::unreadable_image(format!("unknown image format: {e}")))?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        return Err(SignscaleError::unreadable_image(format!(
            "unsupported image format {format:?} (expected JPEG or PNG)"
        )));
    }
    let dyn_img = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| SignscaleError::unreadable_image(format!("decode {format:?}: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode a photo from disk.
pub fn read_photo(path: &Path) -> SignscaleResult<RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
    decode_photo(&bytes)
}

/// Encode an RGBA8 bitmap as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> SignscaleResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
