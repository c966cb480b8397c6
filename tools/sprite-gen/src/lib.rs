//! Procedural game asset synthesis
//!
//! This library turns short natural-language prompts into game-ready assets
//! (sprites, tilemaps, animation strips, atlases, derived PBR-style maps and
//! simple box-assembly meshes) without any learned model. Everything is
//! deterministic: the same prompt always produces byte-identical output.
//!
//! The prompt is interpreted once into a [`Descriptor`], which every
//! downstream stage consumes.
//!
//! # Sprite Example
//! ```no_run
//! use sprite_gen::prelude::*;
//!
//! let descriptor = interpret("pixel art warrior character fire palette 64px");
//! let sprite = SpriteRenderer::new(&descriptor).render();
//! let png = encode_png(&sprite, PngColor::Rgba)?;
//! # Ok::<(), sprite_gen::ForgeError>(())
//! ```
//!
//! # Derived Maps Example
//! ```no_run
//! use sprite_gen::prelude::*;
//!
//! let descriptor = interpret("glowing magic gem item");
//! let sprite = SpriteRenderer::new(&descriptor).render();
//!
//! let normal = normal_map(&sprite);
//! let emissive = emissive_map(&sprite, descriptor.palette.colors());
//! let roughness = roughness_map(&sprite);
//! let big = upscale(&sprite, 4)?;
//! # Ok::<(), sprite_gen::ForgeError>(())
//! ```
//!
//! # Mesh Example
//! ```no_run
//! use sprite_gen::prelude::*;
//!
//! let descriptor = interpret("low poly spaceship sci-fi blue 64px");
//! let mesh = build_mesh(&descriptor);
//! let obj = write_obj(&mesh, &descriptor, "model.mtl");
//! let mtl = MaterialSet::from_palette(descriptor.palette.colors()).to_mtl();
//! let views = PreviewRenderer::default().render_views(&mesh, descriptor.palette.colors());
//! ```

pub mod api;
pub mod compose;
pub mod config;
pub mod error;
pub mod mesh;
pub mod pack;
pub mod palette;
pub mod prompt;
pub mod sprite;
pub mod texture;

pub use config::GenerationOptions;
pub use error::{ForgeError, Result};
pub use palette::{Palette, PaletteName, Rgb};
pub use prompt::{Category, Descriptor, Style, interpret};

/// Commonly used items for generating assets
pub mod prelude {
    pub use crate::compose::{AnimationComposer, AtlasPacker, TilemapComposer, icon_set};
    pub use crate::config::GenerationOptions;
    pub use crate::error::{ForgeError, Result};
    pub use crate::mesh::{MaterialSet, Mesh, PreviewRenderer, build_mesh, write_obj};
    pub use crate::palette::{Palette, PaletteName, Rgb};
    pub use crate::prompt::{Category, Descriptor, Style, interpret};
    pub use crate::sprite::SpriteRenderer;
    pub use crate::texture::{
        PngColor, TextureBuffer, decode_image, emissive_map, encode_png, extract_palette,
        normal_map, roughness_map, swap_palette, upscale,
    };
}
