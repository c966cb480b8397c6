//! Asset categories, visual styles and their keyword tables
//!
//! Tables are scanned in declaration order and the first tag with any keyword
//! contained in the lowercased prompt wins. Matching is plain substring
//! containment, so keyword lists are kept literal.

use crate::palette::PaletteName;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asset archetype selecting the sprite recipe
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Character,
    Tile,
    Item,
    Ui,
    Environment,
    Vehicle,
    Prop,
    Particle,
    Icon,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Character,
        Category::Tile,
        Category::Item,
        Category::Ui,
        Category::Environment,
        Category::Vehicle,
        Category::Prop,
        Category::Particle,
        Category::Icon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Character => "character",
            Category::Tile => "tile",
            Category::Item => "item",
            Category::Ui => "ui",
            Category::Environment => "environment",
            Category::Vehicle => "vehicle",
            Category::Prop => "prop",
            Category::Particle => "particle",
            Category::Icon => "icon",
        }
    }
}

/// Visual style selecting the post-processing filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    #[default]
    Pixel,
    Cartoon,
    Realistic,
    Neon,
    Minimalist,
    Fantasy,
    #[serde(rename = "sci-fi")]
    SciFi,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::Pixel,
        Style::Cartoon,
        Style::Realistic,
        Style::Neon,
        Style::Minimalist,
        Style::Fantasy,
        Style::SciFi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Pixel => "pixel",
            Style::Cartoon => "cartoon",
            Style::Realistic => "realistic",
            Style::Neon => "neon",
            Style::Minimalist => "minimalist",
            Style::Fantasy => "fantasy",
            Style::SciFi => "sci-fi",
        }
    }
}

macro_rules! impl_name_traits {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let key = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == key)
                    .ok_or_else(|| format!(concat!("unknown ", $what, ": {}"), s))
            }
        }
    };
}

impl_name_traits!(Category, "category");
impl_name_traits!(Style, "style");

pub(crate) const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Character,
        &[
            "character", "hero", "enemy", "npc", "player", "warrior", "wizard", "knight",
            "monster", "creature", "robot", "alien", "zombie", "dragon", "boss",
        ],
    ),
    (
        Category::Tile,
        &["tile", "tileset", "floor", "wall", "ground", "platform", "terrain", "brick", "stone"],
    ),
    (
        Category::Item,
        &["item", "weapon", "sword", "gun", "potion", "chest", "key", "coin", "gem", "shield", "bow"],
    ),
    (
        Category::Ui,
        &["ui", "button", "hud", "icon", "cursor", "frame", "panel", "bar", "health", "mana"],
    ),
    (
        Category::Environment,
        &["tree", "rock", "bush", "cloud", "mountain", "house", "castle", "dungeon", "cave", "water"],
    ),
    (
        Category::Vehicle,
        &["car", "ship", "spaceship", "tank", "plane", "boat", "rocket"],
    ),
    (
        Category::Prop,
        &["barrel", "crate", "table", "chair", "lamp", "door", "window", "sign", "fence", "pillar"],
    ),
    (
        Category::Particle,
        &["particle", "explosion", "fire", "smoke", "spark", "magic", "effect", "trail"],
    ),
    (
        Category::Icon,
        &["icon", "logo", "badge", "medal", "star", "heart", "diamond"],
    ),
];

pub(crate) const STYLE_KEYWORDS: &[(Style, &[&str])] = &[
    (
        Style::Pixel,
        &["pixel", "8-bit", "8bit", "16-bit", "16bit", "retro", "nes", "snes", "gameboy"],
    ),
    (
        Style::Cartoon,
        &["cartoon", "toon", "comic", "cel", "flat", "chibi", "cute", "kawaii"],
    ),
    (
        Style::Realistic,
        &["realistic", "detailed", "hd", "high detail", "gritty"],
    ),
    (
        Style::Neon,
        &["neon", "glow", "cyberpunk", "cyber", "synthwave", "glowing"],
    ),
    (
        Style::Minimalist,
        &["minimal", "simple", "clean", "flat design", "icon style"],
    ),
    (
        Style::Fantasy,
        &["fantasy", "magical", "medieval", "rpg", "enchanted", "arcane"],
    ),
    (
        Style::SciFi,
        &["sci-fi", "scifi", "futuristic", "space", "alien", "cyber"],
    ),
];

// neon, earth and blood are reachable by name only.
pub(crate) const PALETTE_KEYWORDS: &[(PaletteName, &[&str])] = &[
    (
        PaletteName::Fire,
        &["fire", "flame", "lava", "hot", "red", "orange", "ember"],
    ),
    (
        PaletteName::Ice,
        &["ice", "frost", "frozen", "cold", "blue", "winter", "snow"],
    ),
    (
        PaletteName::Nature,
        &["nature", "forest", "green", "grass", "plant", "leaf", "jungle"],
    ),
    (
        PaletteName::Dark,
        &["dark", "shadow", "black", "night", "void", "evil", "undead", "demon"],
    ),
    (
        PaletteName::Gold,
        &["gold", "treasure", "rich", "yellow", "sunny", "divine"],
    ),
    (
        PaletteName::Poison,
        &["poison", "toxic", "purple", "venom", "acid", "swamp"],
    ),
    (
        PaletteName::Ocean,
        &["ocean", "water", "sea", "aqua", "cyan", "underwater"],
    ),
    (
        PaletteName::Stone,
        &["stone", "rock", "gray", "grey", "iron", "steel", "metal"],
    ),
    (
        PaletteName::Magic,
        &["magic", "arcane", "mystical", "ethereal", "enchanted", "spell"],
    ),
];

/// Size overrides, applied in this order; the last matching entry wins.
pub(crate) const SIZE_OVERRIDES: &[(u32, &[&str])] = &[
    (128, &["128", "large"]),
    (256, &["256", "big"]),
    (32, &["32", "small"]),
    (16, &["16", "tiny"]),
    (512, &["512", "huge"]),
];

/// True if any keyword occurs in `text`
#[inline]
pub(crate) fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// First tag whose keyword list matches, or `fallback`
pub(crate) fn first_match<T: Copy>(text: &str, table: &[(T, &[&str])], fallback: T) -> T {
    table
        .iter()
        .find(|(_, keywords)| contains_any(text, keywords))
        .map(|(tag, _)| *tag)
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_respects_table_order() {
        // "icon" is listed under ui, which is scanned first
        assert_eq!(first_match("stone floor", CATEGORY_KEYWORDS, Category::Character), Category::Tile);
        assert_eq!(first_match("app icon", CATEGORY_KEYWORDS, Category::Character), Category::Ui);
        assert_eq!(first_match("gold star", CATEGORY_KEYWORDS, Category::Character), Category::Icon);
    }

    #[test]
    fn test_first_match_fallback() {
        assert_eq!(first_match("zzz", STYLE_KEYWORDS, Style::Pixel), Style::Pixel);
        assert_eq!(
            first_match("zzz", PALETTE_KEYWORDS, PaletteName::Magic),
            PaletteName::Magic
        );
    }

    #[test]
    fn test_substring_matching() {
        // "cyberpunk" contains "cyber" but neon is scanned before sci-fi
        assert_eq!(first_match("cyberpunk city", STYLE_KEYWORDS, Style::Pixel), Style::Neon);
        // "hd" inside another word still counts
        assert_eq!(first_match("shdw", STYLE_KEYWORDS, Style::Pixel), Style::Realistic);
    }

    #[test]
    fn test_names_parse() {
        assert_eq!("sci-fi".parse::<Style>(), Ok(Style::SciFi));
        assert_eq!("Vehicle".parse::<Category>(), Ok(Category::Vehicle));
        assert!("spaceship".parse::<Category>().is_err());
    }
}
