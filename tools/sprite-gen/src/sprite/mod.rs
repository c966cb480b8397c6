//! 2D sprite rendering
//!
//! Each [`Category`] has one composition recipe that draws a fixed scene of
//! primitives, scaled to the canvas size and colored by fixed palette slots.
//! Recipes that branch on prompt keywords fall back to a generic shape when
//! nothing matches. All randomness comes from a generator seeded with the
//! descriptor seed, so rendering the same descriptor twice is byte-identical.
//!
//! # Example
//! ```no_run
//! use sprite_gen::prelude::*;
//!
//! let descriptor = interpret("cute cartoon health potion");
//! let sprite = SpriteRenderer::new(&descriptor).render();
//! assert_eq!(sprite.width, descriptor.size);
//! ```

mod character;
mod effects;
mod environment;
mod item;
mod prop;
mod tile;
mod ui;
mod vehicle;

use crate::palette::Palette;
use crate::prompt::{Category, Descriptor};
use crate::texture::{TextureBuffer, apply_style};
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Inputs shared by every category recipe
pub(crate) struct RecipeContext<'a> {
    /// Canvas edge length
    pub s: i32,
    pub palette: &'a Palette,
    pub seed: u32,
    prompt: String,
}

impl RecipeContext<'_> {
    /// Fresh transparent canvas
    pub fn canvas(&self) -> TextureBuffer {
        TextureBuffer::new(self.s as u32, self.s as u32)
    }

    /// Request-scoped generator seeded from the descriptor
    pub fn rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed as u64)
    }

    /// True if the lowercased prompt contains any keyword
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.prompt.contains(k))
    }

    /// Palette color by slot
    pub fn color(&self, slot: usize) -> [u8; 3] {
        self.palette[slot % self.palette.len()]
    }
}

/// Renders sprites for a descriptor
pub struct SpriteRenderer<'a> {
    descriptor: &'a Descriptor,
}

impl<'a> SpriteRenderer<'a> {
    pub fn new(descriptor: &'a Descriptor) -> Self {
        Self { descriptor }
    }

    fn context(&self) -> RecipeContext<'static> {
        RecipeContext {
            s: self.descriptor.size as i32,
            palette: self.descriptor.palette.colors(),
            seed: self.descriptor.seed,
            prompt: self.descriptor.prompt.to_lowercase(),
        }
    }

    /// Render the descriptor's category recipe and apply its style filter
    pub fn render(&self) -> TextureBuffer {
        let mut sprite = self.render_base(self.descriptor.category);
        apply_style(&mut sprite, self.descriptor.style);
        sprite
    }

    /// Render one category recipe without any style filter
    pub fn render_base(&self, category: Category) -> TextureBuffer {
        let ctx = self.context();
        tracing::debug!(category = %category, size = ctx.s, seed = ctx.seed, "rendering sprite");
        match category {
            Category::Character => character::render(&ctx),
            Category::Tile => tile::render(&ctx),
            Category::Item => item::render(&ctx),
            Category::Ui => ui::render(&ctx),
            Category::Environment => environment::render(&ctx),
            Category::Vehicle => vehicle::render(&ctx),
            Category::Prop => prop::render(&ctx),
            Category::Particle => effects::particles(&ctx),
            Category::Icon => effects::star_icon(&ctx),
        }
    }
}

/// Floor division, matching integer geometry for negative offsets
#[inline]
pub(crate) fn fdiv(a: i32, b: i32) -> i32 {
    a.div_euclid(b)
}

/// Points of a ten-point star alternating between two radii, starting at the top
pub(crate) fn star_points(cx: i32, cy: i32, outer: i32, inner: i32) -> Vec<(i32, i32)> {
    (0..10)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::PI / 5.0 - std::f64::consts::FRAC_PI_2;
            let r = if i % 2 == 0 { outer } else { inner } as f64;
            (cx + (r * angle.cos()) as i32, cy + (r * angle.sin()) as i32)
        })
        .collect()
}
