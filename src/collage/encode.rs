use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ExtendedColorType, ImageEncoder, ImageError, RgbaImage, codecs::png::PngEncoder};

/// Encodes the canvas as an RGBA PNG, alpha channel included.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
