//! Palette extraction (median cut) and nearest-color palette swapping

use super::TextureBuffer;
use super::resample::resize_smooth;
use crate::error::{ForgeError, Result};
use crate::palette::Rgb;
use image::imageops::FilterType;

/// Edge length images are reduced to before quantization
const EXTRACT_SIZE: u32 = 64;

/// A box of colors in RGB space
struct ColorBox {
    colors: Vec<Rgb>,
}

impl ColorBox {
    /// (channel, range) of the widest channel
    fn widest_channel(&self) -> (usize, u8) {
        (0..3)
            .map(|c| {
                let (lo, hi) = self
                    .colors
                    .iter()
                    .fold((u8::MAX, u8::MIN), |(lo, hi), col| (lo.min(col[c]), hi.max(col[c])));
                (c, hi.saturating_sub(lo))
            })
            .max_by_key(|&(c, range)| (range, std::cmp::Reverse(c)))
            .unwrap_or((0, 0))
    }

    fn split(mut self) -> (ColorBox, ColorBox) {
        let (channel, _) = self.widest_channel();
        self.colors.sort_by_key(|c| (c[channel], c[0], c[1], c[2]));
        let upper = self.colors.split_off(self.colors.len() / 2);
        (ColorBox { colors: self.colors }, ColorBox { colors: upper })
    }

    fn average(&self) -> Rgb {
        let n = self.colors.len().max(1) as u64;
        let mut sum = [0u64; 3];
        for c in &self.colors {
            for i in 0..3 {
                sum[i] += c[i] as u64;
            }
        }
        sum.map(|s| ((s + n / 2) / n) as u8)
    }
}

/// Reduce an image to at most `n` representative colors.
///
/// The image is resized to 64x64 with bicubic filtering and its alpha is
/// dropped before median-cut quantization. Fewer than `n` colors come back
/// when the image does not have enough distinct colors.
pub fn extract_palette(image: &TextureBuffer, n: usize) -> Result<Vec<Rgb>> {
    if n == 0 {
        return Err(ForgeError::invalid("colors", "must be at least 1"));
    }
    if image.width == 0 || image.height == 0 {
        return Err(ForgeError::MissingInput("image pixels"));
    }

    let small = resize_smooth(image, EXTRACT_SIZE, EXTRACT_SIZE, FilterType::CatmullRom);
    let colors: Vec<Rgb> = small.pixels().map(|p| [p[0], p[1], p[2]]).collect();

    let mut boxes = vec![ColorBox { colors }];
    while boxes.len() < n {
        // Split the box with the widest spread; ties go to the most populated
        let candidate = boxes
            .iter()
            .enumerate()
            .filter(|(_, b)| b.colors.len() > 1 && b.widest_channel().1 > 0)
            .max_by_key(|(i, b)| (b.widest_channel().1, b.colors.len(), std::cmp::Reverse(*i)))
            .map(|(i, _)| i);
        let Some(index) = candidate else { break };

        let (low, high) = boxes.remove(index).split();
        boxes.insert(index, high);
        boxes.insert(index, low);
    }

    let palette: Vec<Rgb> = boxes.iter().map(ColorBox::average).collect();
    tracing::debug!(requested = n, extracted = palette.len(), "extracted palette");
    Ok(palette)
}

/// Replace colors close to each `old` entry with the paired `new` entry.
///
/// Pairs are applied in order over the whole image, so a later pair may
/// rewrite pixels an earlier pair already swapped. Alpha is untouched.
pub fn swap_palette(image: &TextureBuffer, old: &[Rgb], new: &[Rgb], threshold: u32) -> TextureBuffer {
    let mut out = image.clone();
    for (from, to) in old.iter().zip(new.iter()) {
        for px in out.pixels.chunks_exact_mut(4) {
            let distance: u32 = (0..3).map(|c| px[c].abs_diff(from[c]) as u32).sum();
            if distance < threshold {
                px[..3].copy_from_slice(to);
            }
        }
    }
    out
}
