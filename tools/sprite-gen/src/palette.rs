//! Named color palettes
//!
//! Every palette is an ordered set of six RGB colors. Order matters: index 0
//! is the dominant base color, index 1 the accent, and renderers address the
//! remaining slots by fixed position.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB triple
pub type Rgb = [u8; 3];

/// Ordered six-color palette
pub type Palette = [Rgb; 6];

/// Palette names known to the registry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteName {
    Fire,
    Ice,
    Nature,
    Dark,
    Gold,
    Poison,
    Ocean,
    Stone,
    #[default]
    Magic,
    Neon,
    Earth,
    Blood,
}

impl PaletteName {
    /// All palettes in catalog order
    pub const ALL: [PaletteName; 12] = [
        PaletteName::Fire,
        PaletteName::Ice,
        PaletteName::Nature,
        PaletteName::Dark,
        PaletteName::Gold,
        PaletteName::Poison,
        PaletteName::Ocean,
        PaletteName::Stone,
        PaletteName::Magic,
        PaletteName::Neon,
        PaletteName::Earth,
        PaletteName::Blood,
    ];

    /// Lowercase registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteName::Fire => "fire",
            PaletteName::Ice => "ice",
            PaletteName::Nature => "nature",
            PaletteName::Dark => "dark",
            PaletteName::Gold => "gold",
            PaletteName::Poison => "poison",
            PaletteName::Ocean => "ocean",
            PaletteName::Stone => "stone",
            PaletteName::Magic => "magic",
            PaletteName::Neon => "neon",
            PaletteName::Earth => "earth",
            PaletteName::Blood => "blood",
        }
    }

    /// The six colors of this palette
    pub fn colors(&self) -> &'static Palette {
        match self {
            PaletteName::Fire => &FIRE,
            PaletteName::Ice => &ICE,
            PaletteName::Nature => &NATURE,
            PaletteName::Dark => &DARK,
            PaletteName::Gold => &GOLD,
            PaletteName::Poison => &POISON,
            PaletteName::Ocean => &OCEAN,
            PaletteName::Stone => &STONE,
            PaletteName::Magic => &MAGIC,
            PaletteName::Neon => &NEON,
            PaletteName::Earth => &EARTH,
            PaletteName::Blood => &BLOOD,
        }
    }

    /// Resolve a palette by name, falling back to `magic` for unknown names
    pub fn lookup(name: &str) -> PaletteName {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaletteName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        PaletteName::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| format!("unknown palette: {s}"))
    }
}

const FIRE: Palette = [[255, 60, 0], [255, 120, 0], [255, 200, 0], [180, 20, 0], [255, 255, 180], [100, 10, 0]];
const ICE: Palette = [[180, 230, 255], [100, 180, 255], [50, 120, 220], [200, 240, 255], [255, 255, 255], [20, 60, 160]];
const NATURE: Palette = [[34, 120, 20], [80, 180, 40], [150, 210, 80], [60, 90, 30], [200, 230, 100], [30, 60, 10]];
const DARK: Palette = [[20, 10, 30], [60, 20, 60], [100, 30, 80], [150, 50, 100], [200, 80, 120], [10, 5, 20]];
const GOLD: Palette = [[220, 180, 0], [255, 220, 50], [180, 130, 0], [255, 240, 150], [150, 100, 0], [255, 255, 200]];
const POISON: Palette = [[80, 180, 0], [40, 120, 0], [120, 220, 30], [200, 255, 100], [20, 80, 0], [180, 255, 50]];
const OCEAN: Palette = [[0, 80, 180], [0, 140, 220], [50, 200, 250], [0, 200, 200], [100, 230, 255], [0, 50, 130]];
const STONE: Palette = [[80, 80, 90], [120, 120, 130], [160, 160, 170], [60, 60, 70], [200, 200, 210], [40, 40, 50]];
const MAGIC: Palette = [[120, 0, 200], [180, 50, 255], [80, 0, 150], [230, 150, 255], [255, 200, 255], [40, 0, 100]];
const NEON: Palette = [[0, 255, 150], [255, 0, 150], [0, 200, 255], [255, 255, 0], [200, 0, 255], [255, 100, 0]];
const EARTH: Palette = [[120, 80, 40], [160, 110, 60], [200, 150, 90], [80, 50, 20], [230, 200, 150], [50, 30, 10]];
const BLOOD: Palette = [[150, 0, 0], [200, 20, 20], [255, 50, 50], [100, 0, 0], [255, 150, 150], [50, 0, 0]];

/// Shift every channel by `amount`, saturating at 0 and 255
#[inline]
pub fn shift(color: Rgb, amount: i32) -> Rgb {
    color.map(|c| (c as i32 + amount).clamp(0, 255) as u8)
}

/// Attach an alpha channel
#[inline]
pub fn with_alpha(color: Rgb, alpha: u8) -> [u8; 4] {
    [color[0], color[1], color[2], alpha]
}

/// Opaque RGBA from an RGB color
#[inline]
pub fn opaque(color: Rgb) -> [u8; 4] {
    with_alpha(color, 255)
}

/// Linearly interpolate two colors, truncating each channel
#[inline]
pub fn lerp_color(a: Rgb, b: Rgb, t: f64) -> Rgb {
    [
        (a[0] as f64 * (1.0 - t) + b[0] as f64 * t) as u8,
        (a[1] as f64 * (1.0 - t) + b[1] as f64 * t) as u8,
        (a[2] as f64 * (1.0 - t) + b[2] as f64 * t) as u8,
    ]
}
