//! Style filters for finished sprites
//!
//! Each filter is a small struct implementing [`TextureModifier`], applied
//! through [`TextureApply`].

use super::resample::{blur_texture, resize_nearest};
use super::{TextureBuffer, luma};
use crate::prompt::Style;

/// Trait for texture modifiers
pub trait TextureModifier {
    /// Apply the modification to the texture buffer
    fn apply(&self, buffer: &mut TextureBuffer);
}

/// Extension trait for fluent modifier application
pub trait TextureApply {
    /// Apply a modifier and return self for chaining
    fn apply<M: TextureModifier>(&mut self, modifier: M) -> &mut Self;
}

impl TextureApply for TextureBuffer {
    fn apply<M: TextureModifier>(&mut self, modifier: M) -> &mut Self {
        modifier.apply(self);
        self
    }
}

#[inline]
fn clip8(v: f64) -> u8 {
    // Truncate toward zero, then saturate
    (v as i64).clamp(0, 255) as u8
}

/// Nearest-neighbor downsample then upsample back to the original size
#[derive(Clone, Copy, Debug)]
pub struct Pixelize {
    pub factor: u32,
}

impl Pixelize {
    /// Factor used for a sprite of the given edge length
    pub fn for_size(size: u32) -> Self {
        Self {
            factor: (size / 16).max(2),
        }
    }
}

impl TextureModifier for Pixelize {
    fn apply(&self, buffer: &mut TextureBuffer) {
        let factor = self.factor.max(1);
        let small_w = (buffer.width / factor).max(1);
        let small_h = (buffer.height / factor).max(1);
        let small = resize_nearest(buffer, small_w, small_h);
        *buffer = resize_nearest(&small, buffer.width, buffer.height);
    }
}

/// Neon glow: blurred, brightened copy mixed under the original
#[derive(Clone, Copy, Debug)]
pub struct Glow {
    pub sigma: f64,
    pub brightness: f64,
    /// Weight of the original image in the final mix
    pub mix: f64,
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            sigma: 6.0,
            brightness: 1.8,
            mix: 0.55,
        }
    }
}

impl TextureModifier for Glow {
    fn apply(&self, buffer: &mut TextureBuffer) {
        let glow = blur_texture(buffer, self.sigma);
        for (dst, g) in buffer.pixels.iter_mut().zip(glow.pixels.iter()) {
            // Brightness scales every channel, alpha included
            let bright = clip8(*g as f64 * self.brightness) as f64;
            *dst = clip8(bright + self.mix * (*dst as f64 - bright));
        }
    }
}

/// 5x5 smoothing kernel; the two-pixel border is left untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct Smooth;

const SMOOTH_MORE: [[f64; 5]; 5] = [
    [1.0, 1.0, 1.0, 1.0, 1.0],
    [1.0, 5.0, 5.0, 5.0, 1.0],
    [1.0, 5.0, 44.0, 5.0, 1.0],
    [1.0, 5.0, 5.0, 5.0, 1.0],
    [1.0, 1.0, 1.0, 1.0, 1.0],
];

impl TextureModifier for Smooth {
    fn apply(&self, buffer: &mut TextureBuffer) {
        if buffer.width < 5 || buffer.height < 5 {
            return;
        }
        let src = buffer.clone();
        for y in 2..buffer.height - 2 {
            for x in 2..buffer.width - 2 {
                let mut acc = [0.0f64; 4];
                for (ky, row) in SMOOTH_MORE.iter().enumerate() {
                    for (kx, weight) in row.iter().enumerate() {
                        let p = src.get_pixel(x + kx as u32 - 2, y + ky as u32 - 2);
                        for c in 0..4 {
                            acc[c] += p[c] as f64 * weight;
                        }
                    }
                }
                let px = acc.map(|v| (v / 100.0).round().clamp(0.0, 255.0) as u8);
                buffer.set_pixel(x, y, px);
            }
        }
    }
}

/// Saturation boost by extrapolating away from an opaque grayscale copy
#[derive(Clone, Copy, Debug)]
pub struct Saturation {
    pub factor: f64,
}

impl TextureModifier for Saturation {
    fn apply(&self, buffer: &mut TextureBuffer) {
        for px in buffer.pixels.chunks_exact_mut(4) {
            let gray = luma([px[0], px[1], px[2], px[3]]) as f64;
            let reference = [gray, gray, gray, 255.0];
            for c in 0..4 {
                px[c] = clip8(reference[c] + self.factor * (px[c] as f64 - reference[c]));
            }
        }
    }
}

/// Apply the post-processing filter chain for a style
pub fn apply_style(buffer: &mut TextureBuffer, style: Style) {
    match style {
        Style::Pixel => {
            buffer.apply(Pixelize::for_size(buffer.width));
        }
        Style::Neon => {
            buffer.apply(Glow::default());
        }
        Style::Cartoon => {
            buffer.apply(Smooth).apply(Saturation { factor: 1.5 });
        }
        Style::Realistic | Style::Minimalist | Style::Fantasy | Style::SciFi => return,
    }
    tracing::debug!(style = %style, "applied style filter");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::draw;

    fn sample() -> TextureBuffer {
        let mut tex = TextureBuffer::new(64, 64);
        draw::fill_ellipse(&mut tex, 5, 9, 50, 40, [200, 40, 10, 255]);
        draw::fill_rect(&mut tex, 30, 30, 60, 33, [10, 200, 90, 180]);
        tex
    }

    #[test]
    fn test_pixelize_factor() {
        assert_eq!(Pixelize::for_size(16).factor, 2);
        assert_eq!(Pixelize::for_size(64).factor, 4);
        assert_eq!(Pixelize::for_size(512).factor, 32);
    }

    #[test]
    fn test_pixelize_idempotent() {
        let mut once = sample();
        once.apply(Pixelize::for_size(64));
        let mut twice = once.clone();
        twice.apply(Pixelize::for_size(64));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pixelize_makes_blocks() {
        let mut tex = sample();
        tex.apply(Pixelize { factor: 4 });
        for by in 0..16 {
            for bx in 0..16 {
                let first = tex.get_pixel(bx * 4, by * 4);
                for dy in 0..4 {
                    for dx in 0..4 {
                        assert_eq!(tex.get_pixel(bx * 4 + dx, by * 4 + dy), first);
                    }
                }
            }
        }
    }

    #[test]
    fn test_glow_on_transparent_is_noop() {
        let mut tex = TextureBuffer::new(16, 16);
        tex.apply(Glow::default());
        assert!(tex.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_glow_spreads_outside_shape() {
        let mut tex = TextureBuffer::new(32, 32);
        draw::fill_rect(&mut tex, 12, 12, 19, 19, [255, 0, 200, 255]);
        tex.apply(Glow::default());
        assert!(tex.get_pixel(8, 15)[3] > 0);
    }

    #[test]
    fn test_smooth_keeps_border_and_flat_areas() {
        let mut tex = TextureBuffer::filled(10, 10, [100, 100, 100, 255]);
        tex.set_pixel(0, 0, [0, 0, 0, 0]);
        tex.apply(Smooth);
        assert_eq!(tex.get_pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(tex.get_pixel(5, 5), [100, 100, 100, 255]);
    }

    #[test]
    fn test_saturation_gray_unchanged() {
        let mut tex = TextureBuffer::filled(4, 4, [128, 128, 128, 255]);
        tex.apply(Saturation { factor: 1.5 });
        assert_eq!(tex.get_pixel(0, 0), [128, 128, 128, 255]);
    }

    #[test]
    fn test_saturation_boosts_color() {
        let mut tex = TextureBuffer::filled(2, 2, [200, 100, 100, 255]);
        tex.apply(Saturation { factor: 1.5 });
        let p = tex.get_pixel(0, 0);
        assert!(p[0] > 200);
        assert!(p[1] < 100);
    }

    #[test]
    fn test_apply_style_passthrough() {
        let original = sample();
        for style in [Style::Realistic, Style::Minimalist, Style::Fantasy, Style::SciFi] {
            let mut tex = original.clone();
            apply_style(&mut tex, style);
            assert_eq!(tex, original);
        }
    }
}
