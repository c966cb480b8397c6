//! Horizontal animation strips with a vertical bob

use super::sheet_edge;
use crate::error::{ForgeError, Result};
use crate::prompt::Descriptor;
use crate::sprite::SpriteRenderer;
use crate::texture::TextureBuffer;
use std::f64::consts::PI;

/// Bob amplitude in pixels
const BOB_AMPLITUDE: f64 = 3.0;

/// Renders `frames` seed-varied copies of a sprite side by side
#[derive(Clone, Copy, Debug)]
pub struct AnimationComposer {
    pub frames: u32,
    /// Frames are rendered at `min(descriptor.size, max_frame_size)`
    pub max_frame_size: u32,
}

impl Default for AnimationComposer {
    fn default() -> Self {
        Self {
            frames: 8,
            max_frame_size: 64,
        }
    }
}

impl AnimationComposer {
    pub fn new(frames: u32) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    pub fn with_max_frame_size(mut self, max_frame_size: u32) -> Self {
        self.max_frame_size = max_frame_size;
        self
    }

    /// Edge length of one frame for this descriptor
    pub fn frame_size(&self, descriptor: &Descriptor) -> u32 {
        descriptor.size.min(self.max_frame_size)
    }

    /// Vertical offset of frame `i`
    pub fn bob(&self, i: u32) -> i32 {
        let half = self.frames as f64 / 2.0;
        (BOB_AMPLITUDE * (i as f64 * PI / half).sin()).round() as i32
    }

    /// Render the strip. Frame `i` uses seed `seed + i`.
    pub fn compose(&self, descriptor: &Descriptor) -> Result<TextureBuffer> {
        if self.frames == 0 {
            return Err(ForgeError::invalid("frames", "must be at least 1"));
        }
        if self.max_frame_size == 0 {
            return Err(ForgeError::invalid("max_frame_size", "must be at least 1"));
        }

        let fs = self.frame_size(descriptor);
        let width = sheet_edge("frames", self.frames, fs)?;
        let mut sheet = TextureBuffer::new(width, fs);
        for i in 0..self.frames {
            let frame = descriptor.with_seed(descriptor.seed.wrapping_add(i)).with_size(fs);
            let sprite = SpriteRenderer::new(&frame).render();
            sheet.paste(&sprite, (i * fs) as i32, self.bob(i));
        }

        tracing::debug!(frames = self.frames, frame_size = fs, "composed animation strip");
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::interpret;

    #[test]
    fn test_animation_dimensions() {
        let d = interpret("knight character 128px");
        let composer = AnimationComposer::new(4);
        assert_eq!(composer.frame_size(&d), 64);

        let sheet = composer.compose(&d).unwrap();
        assert_eq!((sheet.width, sheet.height), (256, 64));
    }

    #[test]
    fn test_small_sprites_keep_size() {
        let d = interpret("tiny slime");
        let sheet = AnimationComposer::default().compose(&d).unwrap();
        assert_eq!((sheet.width, sheet.height), (16 * 8, 16));
    }

    #[test]
    fn test_bob_curve() {
        let composer = AnimationComposer::new(8);
        let offsets: Vec<i32> = (0..8).map(|i| composer.bob(i)).collect();
        assert_eq!(offsets, vec![0, 2, 3, 2, 0, -2, -3, -2]);
    }

    #[test]
    fn test_animation_rejects_oversized_strip() {
        let d = interpret("warrior");
        let err = AnimationComposer::new(1 << 27).compose(&d).unwrap_err();
        assert!(matches!(err, ForgeError::InvalidParameter { name: "frames", .. }));

        // 64px frames: 256 fit in the widest sheet, 257 do not
        assert!(AnimationComposer::new(257).compose(&d).is_err());
    }

    #[test]
    fn test_animation_rejects_zero_frames() {
        let d = interpret("hero");
        assert!(AnimationComposer::new(0).compose(&d).is_err());
    }
}
