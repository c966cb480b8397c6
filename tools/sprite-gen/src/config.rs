//! Generation options
//!
//! Tunable defaults for the composers and boundary operations, loadable from
//! a TOML file. Every section and field is optional; missing values fall
//! back to the built-in defaults.
//!
//! ```toml
//! icon_sizes = [16, 32, 64]
//!
//! [tilemap]
//! cols = 6
//! rows = 3
//!
//! [palette_swap]
//! threshold = 50
//! ```

use crate::compose::{AnimationComposer, DEFAULT_ICON_SIZES, MAX_SHEET_EDGE, TilemapComposer};
use crate::error::{ForgeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level options document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    pub tilemap: TilemapSection,
    pub animation: AnimationSection,
    pub upscale: UpscaleSection,
    pub palette_swap: PaletteSwapSection,
    pub limits: LimitsSection,
    pub preview: PreviewSection,
    /// Sizes rendered by the icon set operation
    pub icon_sizes: Vec<u32>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            tilemap: TilemapSection::default(),
            animation: AnimationSection::default(),
            upscale: UpscaleSection::default(),
            palette_swap: PaletteSwapSection::default(),
            limits: LimitsSection::default(),
            preview: PreviewSection::default(),
            icon_sizes: DEFAULT_ICON_SIZES.to_vec(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilemapSection {
    pub cols: u32,
    pub rows: u32,
    pub tile_size: u32,
}

impl Default for TilemapSection {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 4,
            tile_size: 32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    pub frames: u32,
    pub max_frame_size: u32,
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            frames: 8,
            max_frame_size: 64,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpscaleSection {
    pub factor: u32,
    /// Largest factor accepted from callers
    pub max_factor: u32,
}

impl Default for UpscaleSection {
    fn default() -> Self {
        Self {
            factor: 4,
            max_factor: 16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSwapSection {
    /// Colors extracted from the source image
    pub colors: usize,
    /// L1 (sum of absolute channel differences) threshold for remapping a pixel
    pub threshold: u32,
}

impl Default for PaletteSwapSection {
    fn default() -> Self {
        Self {
            colors: 6,
            threshold: 40,
        }
    }
}

/// Caps applied to multi-prompt operations and sheet sizes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsSection {
    pub atlas_items: usize,
    pub batch_prompts: usize,
    pub max_cols: u32,
    pub max_rows: u32,
    pub max_tile_size: u32,
    pub max_frames: u32,
}

impl Default for LimitsSection {
    fn default() -> Self {
        Self {
            atlas_items: 16,
            batch_prompts: 20,
            max_cols: 32,
            max_rows: 32,
            max_tile_size: 256,
            max_frames: 64,
        }
    }
}

impl LimitsSection {
    /// Reject a tilemap grid larger than the configured caps
    pub fn check_tilemap(&self, cols: u32, rows: u32, tile_size: u32) -> Result<()> {
        at_most("cols", cols, self.max_cols)?;
        at_most("rows", rows, self.max_rows)?;
        at_most("tile_size", tile_size, self.max_tile_size)
    }

    /// Reject a frame count larger than the configured cap
    pub fn check_frames(&self, frames: u32) -> Result<()> {
        at_most("frames", frames, self.max_frames)
    }
}

fn at_most(name: &'static str, value: u32, max: u32) -> Result<()> {
    if value > max {
        return Err(ForgeError::invalid(name, format!("must be at most {max}")));
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewSection {
    /// Edge length of each rendered preview view
    pub size: u32,
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self { size: 240 }
    }
}

impl GenerationOptions {
    /// Load options from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "loaded generation options");
        Ok(options)
    }

    /// Parse and validate options from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values no operation can honor
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("tilemap.cols", self.tilemap.cols),
            ("tilemap.rows", self.tilemap.rows),
            ("tilemap.tile_size", self.tilemap.tile_size),
            ("animation.frames", self.animation.frames),
            ("animation.max_frame_size", self.animation.max_frame_size),
            ("upscale.factor", self.upscale.factor),
            ("preview.size", self.preview.size),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(ForgeError::invalid(name, "must be at least 1"));
            }
        }
        if self.upscale.factor > self.upscale.max_factor {
            return Err(ForgeError::invalid(
                "upscale.factor",
                format!("exceeds max_factor {}", self.upscale.max_factor),
            ));
        }
        at_most("preview.size", self.preview.size, MAX_SHEET_EDGE)?;
        let t = self.tilemap;
        self.limits.check_tilemap(t.cols, t.rows, t.tile_size)?;
        self.limits.check_frames(self.animation.frames)?;
        if self.icon_sizes.contains(&0) {
            return Err(ForgeError::invalid("icon_sizes", "sizes must be at least 1"));
        }
        Ok(())
    }

    /// Tilemap composer with the configured grid
    pub fn tilemap_composer(&self) -> TilemapComposer {
        TilemapComposer::new(self.tilemap.cols, self.tilemap.rows).with_tile_size(self.tilemap.tile_size)
    }

    /// Animation composer with the configured frame count
    pub fn animation_composer(&self) -> AnimationComposer {
        AnimationComposer::new(self.animation.frames).with_max_frame_size(self.animation.max_frame_size)
    }

    /// Tilemap composer with caller overrides, checked against the limits
    pub fn tilemap_composer_with(
        &self,
        cols: Option<u32>,
        rows: Option<u32>,
        tile_size: Option<u32>,
    ) -> Result<TilemapComposer> {
        let cols = cols.unwrap_or(self.tilemap.cols);
        let rows = rows.unwrap_or(self.tilemap.rows);
        let tile_size = tile_size.unwrap_or(self.tilemap.tile_size);
        self.limits.check_tilemap(cols, rows, tile_size)?;
        Ok(TilemapComposer::new(cols, rows).with_tile_size(tile_size))
    }

    /// Animation composer with a caller frame count, checked against the limits
    pub fn animation_composer_with(&self, frames: Option<u32>) -> Result<AnimationComposer> {
        let frames = frames.unwrap_or(self.animation.frames);
        self.limits.check_frames(frames)?;
        Ok(AnimationComposer::new(frames).with_max_frame_size(self.animation.max_frame_size))
    }
}
