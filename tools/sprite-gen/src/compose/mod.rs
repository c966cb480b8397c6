//! Higher-order assemblers built on the sprite renderer
//!
//! Composers render many sprites from one descriptor (varying seed, size or
//! category) and lay the results out in a single sheet.

use crate::error::{ForgeError, Result};

mod animation;
mod atlas;
mod iconset;
mod tilemap;

pub use animation::AnimationComposer;
pub use atlas::{Atlas, AtlasPacker, FrameRect};
pub use iconset::{DEFAULT_ICON_SIZES, icon_set};
pub use tilemap::TilemapComposer;

/// Largest sheet edge any composer will allocate
pub const MAX_SHEET_EDGE: u32 = 16384;

/// `count * cell` as a sheet edge, rejected when it overflows or exceeds
/// [`MAX_SHEET_EDGE`]
pub(crate) fn sheet_edge(name: &'static str, count: u32, cell: u32) -> Result<u32> {
    count
        .checked_mul(cell)
        .filter(|&edge| edge <= MAX_SHEET_EDGE)
        .ok_or_else(|| ForgeError::invalid(name, format!("sheet edge exceeds {MAX_SHEET_EDGE}px")))
}
