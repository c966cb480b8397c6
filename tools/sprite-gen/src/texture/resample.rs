//! Resampling and Gaussian smoothing

use super::TextureBuffer;
use image::imageops::{self, FilterType};

/// Single-channel floating point image
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f64>,
}

impl Plane {
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> f64) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, data }
    }

    /// One channel of a texture as 0..=255 floats
    pub fn channel(buf: &TextureBuffer, channel: usize) -> Self {
        Self::from_fn(buf.width, buf.height, |x, y| buf.get_pixel(x, y)[channel] as f64)
    }

    /// Grayscale luma of a texture as 0..=255 floats
    pub fn luma(buf: &TextureBuffer) -> Self {
        Self::from_fn(buf.width, buf.height, |x, y| super::luma(buf.get_pixel(x, y)) as f64)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn min_max(&self) -> (f64, f64) {
        self.data
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

/// Nearest-neighbor resize, sampling the source at pixel centers
pub fn resize_nearest(src: &TextureBuffer, width: u32, height: u32) -> TextureBuffer {
    let mut out = TextureBuffer::new(width, height);
    if src.width == 0 || src.height == 0 {
        return out;
    }
    for y in 0..height {
        let sy = (((y as f64 + 0.5) * src.height as f64 / height as f64) as u32).min(src.height - 1);
        for x in 0..width {
            let sx = (((x as f64 + 0.5) * src.width as f64 / width as f64) as u32).min(src.width - 1);
            out.set_pixel(x, y, src.get_pixel(sx, sy));
        }
    }
    out
}

/// Smooth resize through the `image` crate (Lanczos3 or Catmull-Rom)
pub fn resize_smooth(src: &TextureBuffer, width: u32, height: u32, filter: FilterType) -> TextureBuffer {
    let resized = imageops::resize(&src.to_image(), width, height, filter);
    TextureBuffer::from_image(&resized)
}

/// Reflect an out-of-range index back into `0..len` (edge sample repeated)
#[inline]
fn reflect(i: i64, len: i64) -> usize {
    let period = 2 * len;
    let m = i.rem_euclid(period);
    (if m < len { m } else { period - 1 - m }) as usize
}

fn gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (4.0 * sigma + 0.5) as i64;
    let mut kernel: Vec<f64> = (-radius..=radius)
        .map(|i| (-0.5 * (i * i) as f64 / (sigma * sigma)).exp())
        .collect();
    let sum: f64 = kernel.iter().sum();
    for k in &mut kernel {
        *k /= sum;
    }
    kernel
}

/// Separable Gaussian blur with reflected borders
pub fn gaussian_blur(plane: &Plane, sigma: f64) -> Plane {
    if sigma <= 0.0 || plane.data.is_empty() {
        return plane.clone();
    }
    let kernel = gaussian_kernel(sigma);
    let radius = (kernel.len() / 2) as i64;
    let (w, h) = (plane.width as i64, plane.height as i64);

    let mut horizontal = vec![0.0; plane.data.len()];
    for y in 0..h {
        let row = (y * w) as usize;
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sx = reflect(x + k as i64 - radius, w);
                acc += plane.data[row + sx] * weight;
            }
            horizontal[row + x as usize] = acc;
        }
    }

    let mut data = vec![0.0; plane.data.len()];
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, weight) in kernel.iter().enumerate() {
                let sy = reflect(y + k as i64 - radius, h);
                acc += horizontal[sy * w as usize + x as usize] * weight;
            }
            data[(y * w + x) as usize] = acc;
        }
    }

    Plane {
        width: plane.width,
        height: plane.height,
        data,
    }
}

/// Blur every channel of a texture independently
pub(crate) fn blur_texture(buf: &TextureBuffer, sigma: f64) -> TextureBuffer {
    let channels: Vec<Plane> = (0..4)
        .map(|c| gaussian_blur(&Plane::channel(buf, c), sigma))
        .collect();
    let mut out = TextureBuffer::new(buf.width, buf.height);
    for (i, px) in out.pixels.chunks_exact_mut(4).enumerate() {
        for (c, plane) in channels.iter().enumerate() {
            px[c] = plane.data[i].round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}
