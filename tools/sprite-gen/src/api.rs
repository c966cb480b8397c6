//! Boundary operations
//!
//! Prompt-keyed operations returning serde-serializable responses, with
//! images embedded as base64 PNGs. These are the functions an HTTP shell or
//! the CLI calls; they never write to disk themselves.
//!
//! # Example
//! ```no_run
//! use sprite_gen::api::Forge;
//!
//! let forge = Forge::default();
//! let response = forge.sprite("pixel art warrior character fire palette 64px")?;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::compose::{AtlasPacker, icon_set};
use crate::config::GenerationOptions;
use crate::error::{ForgeError, Result};
use crate::mesh::{MaterialSet, PreviewRenderer, build_mesh, write_obj};
use crate::palette::PaletteName;
use crate::prompt::{Category, Descriptor, Style, interpret};
use crate::sprite::SpriteRenderer;
use crate::texture::{
    PngColor, TextureBuffer, decode_image, emissive_map, encode_png, extract_palette, normal_map,
    roughness_map, swap_palette, upscale,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Version reported by the health check
pub const API_VERSION: &str = "1.0";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpriteResponse {
    pub image_b64: String,
    pub info: Descriptor,
    pub format: String,
    /// `"{width}x{height}"`
    pub size: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ModelResponse {
    pub obj: String,
    pub mtl: String,
    /// View name (`front`, `rear`, `left`, `top`) to base64 PNG
    pub views: BTreeMap<String, String>,
    pub info: Descriptor,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TilemapResponse {
    pub image_b64: String,
    pub width: u32,
    pub height: u32,
    pub cols: u32,
    pub rows: u32,
    pub tile_size: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnimationResponse {
    pub image_b64: String,
    pub frames: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PackResponse {
    pub sprite: String,
    pub normal: String,
    pub emissive: String,
    pub roughness: String,
    pub upscaled: String,
    pub info: Descriptor,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IconSetResponse {
    /// Edge length (as a string key) to base64 PNG
    pub icons: BTreeMap<String, String>,
    pub info: Descriptor,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AtlasResponse {
    pub atlas_b64: String,
    pub metadata: serde_json::Value,
}

/// One batch entry: either a rendered sprite or the error it hit
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchItem {
    Rendered {
        prompt: String,
        image_b64: String,
        info: Descriptor,
    },
    Failed {
        prompt: String,
        error: String,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<BatchItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NormalMapResponse {
    pub normal_b64: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpscaleResponse {
    pub factor: u32,
    pub upscaled_b64: String,
    pub size: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaletteSwapResponse {
    pub palette: PaletteName,
    pub swapped_b64: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub palettes: Vec<String>,
    pub categories: Vec<String>,
    pub styles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
    pub version: String,
}

/// Entry point for every boundary operation
#[derive(Clone, Debug, Default)]
pub struct Forge {
    pub options: GenerationOptions,
}

impl Forge {
    pub fn new(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// Render a sprite for the prompt
    pub fn sprite(&self, prompt: &str) -> Result<SpriteResponse> {
        let info = interpret(prompt);
        let image = SpriteRenderer::new(&info).render();
        Ok(SpriteResponse {
            image_b64: png_b64(&image, PngColor::Rgba)?,
            size: format!("{}x{}", image.width, image.height),
            format: "PNG".to_string(),
            info,
        })
    }

    /// Box-assembly mesh, materials and four preview views
    pub fn model(&self, prompt: &str) -> Result<ModelResponse> {
        let info = interpret(prompt);
        let mesh = build_mesh(&info);
        let previews = PreviewRenderer::new(self.options.preview.size).render_views(&mesh, info.colors());

        let mut views = BTreeMap::new();
        for (name, view) in previews.named() {
            views.insert(name.to_string(), png_b64(view, PngColor::Rgba)?);
        }
        Ok(ModelResponse {
            obj: write_obj(&mesh, &info, "model.mtl"),
            mtl: MaterialSet::from_palette(info.colors()).to_mtl(),
            views,
            info,
        })
    }

    /// Tile sheet; grid dimensions default to the configured ones
    pub fn tilemap(&self, prompt: &str, cols: Option<u32>, rows: Option<u32>) -> Result<TilemapResponse> {
        let info = interpret(prompt).with_category(Category::Tile);
        let composer = self.options.tilemap_composer_with(cols, rows, None)?;

        let sheet = composer.compose(&info)?;
        Ok(TilemapResponse {
            image_b64: png_b64(&sheet, PngColor::Rgba)?,
            width: sheet.width,
            height: sheet.height,
            cols: composer.cols,
            rows: composer.rows,
            tile_size: composer.tile_size,
        })
    }

    /// Animation strip; frame count defaults to the configured one
    pub fn animation(&self, prompt: &str, frames: Option<u32>) -> Result<AnimationResponse> {
        let info = interpret(prompt);
        let composer = self.options.animation_composer_with(frames)?;

        let strip = composer.compose(&info)?;
        let frame_size = composer.frame_size(&info);
        Ok(AnimationResponse {
            image_b64: png_b64(&strip, PngColor::Rgba)?,
            frames: composer.frames,
            frame_width: frame_size,
            frame_height: frame_size,
        })
    }

    /// Sprite plus its derived maps and an upscaled copy
    pub fn pack(&self, prompt: &str) -> Result<PackResponse> {
        let info = interpret(prompt);
        let sprite = SpriteRenderer::new(&info).render();
        Ok(PackResponse {
            sprite: png_b64(&sprite, PngColor::Rgba)?,
            normal: png_b64(&normal_map(&sprite), PngColor::Rgb)?,
            emissive: png_b64(&emissive_map(&sprite, info.colors()), PngColor::Rgb)?,
            roughness: png_b64(&roughness_map(&sprite), PngColor::Luma)?,
            upscaled: png_b64(&upscale(&sprite, self.options.upscale.factor)?, PngColor::Rgba)?,
            info,
        })
    }

    /// Icon recipe rendered at every configured size
    pub fn icon_set(&self, prompt: &str) -> Result<IconSetResponse> {
        let info = interpret(prompt);
        let mut icons = BTreeMap::new();
        for (size, icon) in icon_set(&info, &self.options.icon_sizes)? {
            icons.insert(size.to_string(), png_b64(&icon, PngColor::Rgba)?);
        }
        Ok(IconSetResponse { icons, info })
    }

    /// Render each prompt (up to the configured limit) and pack them into one atlas
    pub fn atlas<S: AsRef<str>>(&self, prompts: &[S]) -> Result<AtlasResponse> {
        let items: Vec<(String, TextureBuffer)> = prompts
            .iter()
            .take(self.options.limits.atlas_items)
            .map(|p| {
                let prompt = p.as_ref();
                let sprite = SpriteRenderer::new(&interpret(prompt)).render();
                (prompt.to_string(), sprite)
            })
            .collect();

        let atlas = AtlasPacker::default().pack(&items);
        Ok(AtlasResponse {
            atlas_b64: png_b64(&atlas.image, PngColor::Rgba)?,
            metadata: atlas.metadata()?,
        })
    }

    /// Render prompts (up to the configured limit) independently.
    ///
    /// Results keep input order; a failing prompt is reported in place
    /// without affecting the others.
    pub fn batch<S: AsRef<str> + Sync>(&self, prompts: &[S]) -> BatchResponse {
        let limit = prompts.len().min(self.options.limits.batch_prompts);
        let results = prompts[..limit]
            .par_iter()
            .map(|p| {
                let prompt = p.as_ref();
                match self.sprite(prompt) {
                    Ok(r) => BatchItem::Rendered {
                        prompt: prompt.to_string(),
                        image_b64: r.image_b64,
                        info: r.info,
                    },
                    Err(e) => {
                        tracing::warn!(prompt, error = %e, "batch item failed");
                        BatchItem::Failed {
                            prompt: prompt.to_string(),
                            error: e.to_string(),
                        }
                    }
                }
            })
            .collect();
        BatchResponse { results }
    }

    /// Normal map of an uploaded image
    pub fn normal_map(&self, image_b64: Option<&str>) -> Result<NormalMapResponse> {
        let image = decode_upload(image_b64)?;
        Ok(NormalMapResponse {
            normal_b64: png_b64(&normal_map(&image), PngColor::Rgb)?,
        })
    }

    /// Nearest-neighbor upscale of an uploaded image
    pub fn upscale(&self, image_b64: Option<&str>, factor: Option<u32>) -> Result<UpscaleResponse> {
        let factor = factor.unwrap_or(self.options.upscale.factor);
        let max = self.options.upscale.max_factor;
        if factor > max {
            return Err(ForgeError::invalid("factor", format!("must be at most {max}")));
        }
        let image = decode_upload(image_b64)?;
        let scaled = upscale(&image, factor)?;
        Ok(UpscaleResponse {
            factor,
            upscaled_b64: png_b64(&scaled, PngColor::Rgba)?,
            size: format!("{}x{}", scaled.width, scaled.height),
        })
    }

    /// Remap an uploaded image's dominant colors onto a named palette
    pub fn palette_swap(&self, image_b64: Option<&str>, palette: Option<&str>) -> Result<PaletteSwapResponse> {
        let target = palette.map(PaletteName::lookup).unwrap_or(PaletteName::Fire);
        let image = decode_upload(image_b64)?;
        let settings = self.options.palette_swap;

        let old = extract_palette(&image, settings.colors)?;
        let swapped = swap_palette(&image, &old, target.colors(), settings.threshold);
        Ok(PaletteSwapResponse {
            palette: target,
            swapped_b64: png_b64(&swapped, PngColor::Rgba)?,
        })
    }

    /// Descriptor echo for a prompt
    pub fn describe(&self, prompt: &str) -> Descriptor {
        interpret(prompt)
    }

    /// Known palette, category and style names in registry order
    pub fn catalog(&self) -> Catalog {
        Catalog {
            palettes: PaletteName::ALL.iter().map(|p| p.as_str().to_string()).collect(),
            categories: Category::ALL.iter().map(|c| c.as_str().to_string()).collect(),
            styles: Style::ALL.iter().map(|s| s.as_str().to_string()).collect(),
        }
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok".to_string(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Encode a texture as a base64 PNG string
pub fn png_b64(image: &TextureBuffer, color: PngColor) -> Result<String> {
    Ok(STANDARD.encode(encode_png(image, color)?))
}

/// Decode a base64 (optionally data-URL) image payload
pub fn decode_upload(payload: Option<&str>) -> Result<TextureBuffer> {
    let payload = payload.map(str::trim).unwrap_or_default();
    let data = match payload.split_once(";base64,") {
        Some((head, data)) if head.starts_with("data:") => data,
        _ => payload,
    };
    if data.is_empty() {
        return Err(ForgeError::MissingInput("image_b64"));
    }
    let bytes = STANDARD.decode(data).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected upload: bad base64");
    })?;
    decode_image(&bytes)
}
