//! PNG encoding and image decoding for texture buffers

use super::TextureBuffer;
use crate::error::{ForgeError, Result};
use std::fs;
use std::path::Path;

/// Channel layout written to the PNG
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PngColor {
    /// Full RGBA (sprites, sheets, atlases)
    #[default]
    Rgba,
    /// Alpha dropped (normal and emissive maps)
    Rgb,
    /// Red channel as 8-bit grayscale (roughness maps)
    Luma,
}

/// Encode a texture buffer as PNG bytes
pub fn encode_png(texture: &TextureBuffer, color: PngColor) -> Result<Vec<u8>> {
    let (color_type, data) = match color {
        PngColor::Rgba => (png::ColorType::Rgba, texture.pixels.clone()),
        PngColor::Rgb => (
            png::ColorType::Rgb,
            texture.pixels.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect(),
        ),
        PngColor::Luma => (
            png::ColorType::Grayscale,
            texture.pixels.chunks_exact(4).map(|p| p[0]).collect(),
        ),
    };

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, texture.width, texture.height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;
        writer.finish()?;
    }
    Ok(out)
}

/// Encode and write a PNG file
pub fn write_png(texture: &TextureBuffer, color: PngColor, path: &Path) -> Result<()> {
    fs::write(path, encode_png(texture, color)?)?;
    Ok(())
}

/// Decode PNG or JPEG bytes into an RGBA buffer
pub fn decode_image(bytes: &[u8]) -> Result<TextureBuffer> {
    if bytes.is_empty() {
        return Err(ForgeError::MissingInput("image data"));
    }
    let decoded = image::load_from_memory(bytes).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected image payload");
    })?;
    Ok(TextureBuffer::from_image(&decoded.to_rgba8()))
}
