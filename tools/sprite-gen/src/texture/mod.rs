//! Raster canvas and image processing
//!
//! This module owns the RGBA canvas every renderer draws into, plus the
//! operations applied to finished canvases: resampling, style filters,
//! derived maps, palette quantization and PNG encoding.
//!
//! # Example
//! ```no_run
//! use sprite_gen::texture::*;
//!
//! let mut tex = TextureBuffer::new(64, 64);
//! draw::fill_ellipse(&mut tex, 8, 8, 55, 55, [255, 60, 0, 255]);
//! tex.apply(Pixelize::for_size(64));
//!
//! let normal = normal_map(&tex);
//! let png = encode_png(&normal, PngColor::Rgb).unwrap();
//! ```

pub mod draw;
mod export;
mod maps;
mod modifiers;
mod noise;
mod quantize;
mod resample;

// Core type
pub use self::buffer::TextureBuffer;

// Noise
pub use noise::NoiseField;

// Resampling
pub use resample::{Plane, gaussian_blur, resize_nearest, resize_smooth};

// Modifiers
pub use modifiers::{Glow, Pixelize, Saturation, Smooth, TextureApply, TextureModifier, apply_style};

// Derived maps
pub use maps::{emissive_map, normal_map, roughness_map, upscale};

// Palette extraction and swap
pub use quantize::{extract_palette, swap_palette};

// Codec
pub use export::{PngColor, decode_image, encode_png, write_png};

mod buffer {
    use image::RgbaImage;

    /// RGBA canvas, row-major, 4 bytes per pixel
    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct TextureBuffer {
        /// Width in pixels
        pub width: u32,
        /// Height in pixels
        pub height: u32,
        /// RGBA pixel data (4 bytes per pixel, row-major order)
        pub pixels: Vec<u8>,
    }

    impl TextureBuffer {
        /// Create a new texture buffer initialized to transparent black
        pub fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                pixels: vec![0u8; (width as usize) * (height as usize) * 4],
            }
        }

        /// Create a texture buffer filled with a solid color
        pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
            let mut buffer = Self::new(width, height);
            for chunk in buffer.pixels.chunks_exact_mut(4) {
                chunk.copy_from_slice(&color);
            }
            buffer
        }

        /// Bytes per row
        #[inline]
        pub fn stride(&self) -> usize {
            self.width as usize * 4
        }

        #[inline]
        fn index(&self, x: u32, y: u32) -> usize {
            y as usize * self.stride() + x as usize * 4
        }

        /// Get pixel at (x, y)
        #[inline]
        pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
            let idx = self.index(x, y);
            [
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ]
        }

        /// Set pixel at (x, y)
        #[inline]
        pub fn set_pixel(&mut self, x: u32, y: u32, color: [u8; 4]) {
            let idx = self.index(x, y);
            self.pixels[idx..idx + 4].copy_from_slice(&color);
        }

        /// Set pixel at signed coordinates, ignoring anything off-canvas
        #[inline]
        pub fn put(&mut self, x: i32, y: i32, color: [u8; 4]) {
            if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
                self.set_pixel(x as u32, y as u32, color);
            }
        }

        /// Iterate over RGBA pixels
        pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
            self.pixels
                .chunks_exact(4)
                .map(|p| [p[0], p[1], p[2], p[3]])
        }

        /// Copy `src` onto this buffer with its top-left corner at (x, y).
        ///
        /// Pixels are replaced (alpha included); whatever falls outside the
        /// destination is clipped.
        pub fn paste(&mut self, src: &TextureBuffer, x: i32, y: i32) {
            for sy in 0..src.height {
                let dy = y + sy as i32;
                if dy < 0 || dy as u32 >= self.height {
                    continue;
                }
                for sx in 0..src.width {
                    let dx = x + sx as i32;
                    if dx < 0 || dx as u32 >= self.width {
                        continue;
                    }
                    self.set_pixel(dx as u32, dy as u32, src.get_pixel(sx, sy));
                }
            }
        }

        /// Convert into an `image` crate buffer
        pub fn to_image(&self) -> RgbaImage {
            RgbaImage::from_fn(self.width, self.height, |x, y| image::Rgba(self.get_pixel(x, y)))
        }

        /// Build from an `image` crate buffer
        pub fn from_image(image: &RgbaImage) -> Self {
            Self {
                width: image.width(),
                height: image.height(),
                pixels: image.as_raw().clone(),
            }
        }
    }
}

/// ITU-R 601-2 luma in 16-bit fixed point (alpha ignored)
#[inline]
pub fn luma(pixel: [u8; 4]) -> u8 {
    let l = pixel[0] as u32 * 19595 + pixel[1] as u32 * 38470 + pixel[2] as u32 * 7471 + 0x8000;
    (l >> 16) as u8
}
