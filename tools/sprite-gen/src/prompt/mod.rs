//! Prompt interpretation
//!
//! Turns free text into a [`Descriptor`], the single contract every
//! downstream stage consumes. Interpretation is total: unknown text resolves
//! to documented defaults instead of failing.

mod keywords;

pub use keywords::{Category, Style};

use crate::palette::{Palette, PaletteName};
use keywords::{
    CATEGORY_KEYWORDS, PALETTE_KEYWORDS, SIZE_OVERRIDES, STYLE_KEYWORDS, contains_any, first_match,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Canvas edge length when the prompt names no size
pub const DEFAULT_SIZE: u32 = 64;

/// Structured result of prompt interpretation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    /// Original prompt, kept for sub-branch keyword checks
    pub prompt: String,
    pub category: Category,
    pub style: Style,
    pub palette: PaletteName,
    /// Canvas edge length in pixels
    pub size: u32,
    /// Seed for all downstream randomness
    pub seed: u32,
}

impl Descriptor {
    /// Copy with a different seed
    pub fn with_seed(&self, seed: u32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    /// Copy with a different category
    pub fn with_category(&self, category: Category) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    /// Copy with a different canvas size
    pub fn with_size(&self, size: u32) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Palette colors for this descriptor
    pub fn colors(&self) -> &'static Palette {
        self.palette.colors()
    }

    /// True if the lowercased prompt contains any of `keywords`
    pub fn mentions(&self, keywords: &[&str]) -> bool {
        contains_any(&self.prompt.to_lowercase(), keywords)
    }
}

/// Interpret a prompt into a descriptor
pub fn interpret(prompt: &str) -> Descriptor {
    let lower = prompt.to_lowercase();

    let category = first_match(&lower, CATEGORY_KEYWORDS, Category::default());
    let style = first_match(&lower, STYLE_KEYWORDS, Style::default());
    let palette = first_match(&lower, PALETTE_KEYWORDS, PaletteName::default());

    let mut size = DEFAULT_SIZE;
    for (candidate, tokens) in SIZE_OVERRIDES {
        if contains_any(&lower, tokens) {
            size = *candidate;
        }
    }

    let descriptor = Descriptor {
        prompt: prompt.to_string(),
        category,
        style,
        palette,
        size,
        seed: seed_for(prompt),
    };

    tracing::debug!(
        category = %descriptor.category,
        style = %descriptor.style,
        palette = %descriptor.palette,
        size = descriptor.size,
        seed = descriptor.seed,
        "interpreted prompt"
    );

    descriptor
}

/// Stable seed: first four bytes (big-endian) of the SHA-256 of the prompt
pub fn seed_for(prompt: &str) -> u32 {
    let digest = Sha256::digest(prompt.as_bytes());
    u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_defaults() {
        let d = interpret("a thing");
        assert_eq!(d.category, Category::Character);
        assert_eq!(d.style, Style::Pixel);
        assert_eq!(d.palette, PaletteName::Magic);
        assert_eq!(d.size, 64);
    }

    #[test]
    fn test_interpret_warrior() {
        let d = interpret("pixel art warrior character fire palette 64px");
        assert_eq!(d.category, Category::Character);
        assert_eq!(d.style, Style::Pixel);
        assert_eq!(d.palette, PaletteName::Fire);
        assert_eq!(d.size, 64);
    }

    #[test]
    fn test_interpret_spaceship() {
        let d = interpret("low poly spaceship sci-fi blue 64px");
        assert_eq!(d.category, Category::Vehicle);
        assert_eq!(d.style, Style::SciFi);
        assert_eq!(d.palette, PaletteName::Ice);
        assert_eq!(d.size, 64);
    }

    #[test]
    fn test_size_last_override_wins() {
        // 16 is checked before 512, so 512 wins
        assert_eq!(interpret("tiny 512px").size, 512);
        // 32 is checked after 256
        assert_eq!(interpret("big small").size, 32);
        assert_eq!(interpret("large").size, 128);
        assert_eq!(interpret("huge tiny").size, 512);
    }

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(seed_for("dragon"), seed_for("dragon"));
        assert_ne!(seed_for("dragon"), seed_for("Dragon"));
        assert_eq!(interpret("dragon").seed, seed_for("dragon"));
    }

    #[test]
    fn test_interpret_is_case_insensitive_but_keeps_prompt() {
        let d = interpret("Fire SWORD");
        assert_eq!(d.prompt, "Fire SWORD");
        assert_eq!(d.category, Category::Item);
        assert_eq!(d.palette, PaletteName::Fire);
        assert!(d.mentions(&["sword"]));
    }

    #[test]
    fn test_descriptor_serializes_names() {
        let d = interpret("neon spaceship");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["category"], "vehicle");
        assert_eq!(json["style"], "neon");
        assert_eq!(json["palette"], "magic");
        assert_eq!(serde_json::to_value(Style::SciFi).unwrap(), "sci-fi");
    }

    #[test]
    fn test_with_helpers() {
        let d = interpret("hero");
        let e = d.with_seed(7).with_category(Category::Tile).with_size(16);
        assert_eq!(e.seed, 7);
        assert_eq!(e.category, Category::Tile);
        assert_eq!(e.size, 16);
        assert_eq!(e.prompt, d.prompt);
    }
}
