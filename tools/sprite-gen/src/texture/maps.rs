//! Derived maps: normal, emissive, roughness, plus the pixel-art upscaler
//!
//! All maps are returned as opaque RGBA buffers. Normal and emissive maps
//! are meant to be encoded as RGB and roughness as grayscale.

use super::resample::{Plane, blur_texture, gaussian_blur, resize_nearest};
use super::TextureBuffer;
use crate::error::{ForgeError, Result};
use crate::palette::Rgb;

/// Height-map smoothing before differentiation
pub const NORMAL_SIGMA: f64 = 1.5;
/// Gradient scale applied to the tangent-space x/y components
pub const NORMAL_STRENGTH: f64 = 4.0;
/// L1 RGB distance under which a pixel counts as emissive
pub const EMISSIVE_THRESHOLD: u32 = 80;
/// Glow blur applied to the emissive mask
pub const EMISSIVE_SIGMA: f64 = 2.0;
/// Luminance smoothing for the roughness map
pub const ROUGHNESS_SIGMA: f64 = 2.0;

/// Central differences inside, one-sided differences at the edges
fn gradient(plane: &Plane) -> (Plane, Plane) {
    let (w, h) = (plane.width, plane.height);
    let diff = |a: f64, b: f64, span: f64| (a - b) / span;

    let dx = Plane::from_fn(w, h, |x, y| match w {
        0 | 1 => 0.0,
        _ if x == 0 => diff(plane.get(1, y), plane.get(0, y), 1.0),
        _ if x == w - 1 => diff(plane.get(x, y), plane.get(x - 1, y), 1.0),
        _ => diff(plane.get(x + 1, y), plane.get(x - 1, y), 2.0),
    });
    let dy = Plane::from_fn(w, h, |x, y| match h {
        0 | 1 => 0.0,
        _ if y == 0 => diff(plane.get(x, 1), plane.get(x, 0), 1.0),
        _ if y == h - 1 => diff(plane.get(x, y), plane.get(x, y - 1), 1.0),
        _ => diff(plane.get(x, y + 1), plane.get(x, y - 1), 2.0),
    });
    (dx, dy)
}

/// Tangent-space normal map (+X right, +Y up, +Z out) from image luminance
pub fn normal_map(image: &TextureBuffer) -> TextureBuffer {
    let height = Plane::from_fn(image.width, image.height, |x, y| {
        super::luma(image.get_pixel(x, y)) as f64 / 255.0
    });
    let smoothed = gaussian_blur(&height, NORMAL_SIGMA);
    let (dx, dy) = gradient(&smoothed);

    let mut out = TextureBuffer::new(image.width, image.height);
    for y in 0..image.height {
        for x in 0..image.width {
            let nx = -dx.get(x, y) * NORMAL_STRENGTH;
            let ny = dy.get(x, y) * NORMAL_STRENGTH;
            let nz = 1.0;
            let len = (nx * nx + ny * ny + nz * nz).sqrt() + 1e-8;
            let (nx, ny, nz) = (nx / len, ny / len, nz / len);

            let r = ((nx + 1.0) / 2.0 * 255.0) as u8;
            let g = ((ny + 1.0) / 2.0 * 255.0) as u8;
            let b = (nz * 255.0) as u8;
            out.set_pixel(x, y, [r, g, b, 255]);
        }
    }
    out
}

/// Emissive map: pixels near the first two palette colors, painted on black and blurred
pub fn emissive_map(image: &TextureBuffer, palette: &[Rgb]) -> TextureBuffer {
    let mut mask = TextureBuffer::filled(image.width, image.height, [0, 0, 0, 255]);
    for color in palette.iter().take(2) {
        for y in 0..image.height {
            for x in 0..image.width {
                let p = image.get_pixel(x, y);
                let distance: u32 = (0..3).map(|c| p[c].abs_diff(color[c]) as u32).sum();
                if distance < EMISSIVE_THRESHOLD {
                    mask.set_pixel(x, y, [color[0], color[1], color[2], 255]);
                }
            }
        }
    }
    blur_texture(&mask, EMISSIVE_SIGMA)
}

/// Roughness map: blurred luminance stretched to the full 8-bit range
pub fn roughness_map(image: &TextureBuffer) -> TextureBuffer {
    let blurred = gaussian_blur(&Plane::luma(image), ROUGHNESS_SIGMA);
    let (lo, hi) = blurred.min_max();

    let mut out = TextureBuffer::new(image.width, image.height);
    for (px, v) in out.pixels.chunks_exact_mut(4).zip(blurred.data.iter()) {
        let level = ((v - lo) / (hi - lo + 1e-8) * 255.0) as u8;
        px.copy_from_slice(&[level, level, level, 255]);
    }
    out
}

/// Integer nearest-neighbor magnification
pub fn upscale(image: &TextureBuffer, factor: u32) -> Result<TextureBuffer> {
    if factor == 0 {
        return Err(ForgeError::invalid("factor", "must be at least 1"));
    }
    let (width, height) = image
        .width
        .checked_mul(factor)
        .zip(image.height.checked_mul(factor))
        .ok_or_else(|| ForgeError::invalid("factor", format!("{factor}x overflows the image size")))?;
    Ok(resize_nearest(image, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::draw;

    #[test]
    fn test_normal_map_flat_points_up() {
        let tex = TextureBuffer::filled(16, 16, [90, 90, 90, 255]);
        let normal = normal_map(&tex);
        for p in normal.pixels() {
            assert_eq!(p, [127, 127, 254, 255]);
        }
    }

    #[test]
    fn test_normal_map_slope_direction() {
        // Brightness increases to the right, so the normal leans left (-X)
        let mut tex = TextureBuffer::new(32, 8);
        for y in 0..8 {
            for x in 0..32 {
                let v = (x * 8) as u8;
                tex.set_pixel(x, y, [v, v, v, 255]);
            }
        }
        let normal = normal_map(&tex);
        let p = normal.get_pixel(16, 4);
        assert!(p[0] < 127);
        assert_eq!(p[1], 127);
    }

    #[test]
    fn test_emissive_masks_palette_colors() {
        let palette = [[255, 60, 0], [255, 120, 0]];
        let mut tex = TextureBuffer::filled(32, 32, [0, 0, 255, 255]);
        draw::fill_rect(&mut tex, 8, 8, 23, 23, [250, 70, 5, 255]);
        let emissive = emissive_map(&tex, &palette);
        let center = emissive.get_pixel(16, 16);
        assert!(center[0] > 200);
        assert_eq!(emissive.get_pixel(0, 0), [0, 0, 0, 255]);
    }

    #[test]
    fn test_roughness_full_range() {
        let mut tex = TextureBuffer::filled(32, 32, [0, 0, 0, 255]);
        draw::fill_rect(&mut tex, 0, 0, 15, 31, [255, 255, 255, 255]);
        let rough = roughness_map(&tex);
        let levels: Vec<u8> = rough.pixels().map(|p| p[0]).collect();
        assert_eq!(*levels.iter().max().unwrap(), 254);
        assert_eq!(*levels.iter().min().unwrap(), 0);
    }

    #[test]
    fn test_roughness_flat_is_black() {
        let tex = TextureBuffer::filled(8, 8, [77, 77, 77, 255]);
        assert!(roughness_map(&tex).pixels().all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_upscale() {
        let mut tex = TextureBuffer::new(2, 2);
        tex.set_pixel(1, 0, [1, 2, 3, 4]);
        let big = upscale(&tex, 4).unwrap();
        assert_eq!((big.width, big.height), (8, 8));
        assert_eq!(big.get_pixel(7, 3), [1, 2, 3, 4]);
        assert_eq!(big.get_pixel(3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_upscale_rejects_zero() {
        let tex = TextureBuffer::new(2, 2);
        assert!(matches!(
            upscale(&tex, 0),
            Err(ForgeError::InvalidParameter { name: "factor", .. })
        ));
    }
}
