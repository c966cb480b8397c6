//! Props: banded crate with a lock, or a capped pillar

use super::RecipeContext;
use crate::palette::{opaque, shift};
use crate::texture::{TextureBuffer, draw};

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let base = ctx.color(0);
    let dark = opaque(shift(base, -60));

    if ctx.mentions(&["barrel", "crate", "chest", "box"]) {
        let (cx, cy) = (s / 2, s / 2);
        let (bw, bh) = (s * 2 / 3, s / 2);
        let (left, top, right, bottom) = (cx - bw / 2, cy - bh / 2, cx + bw / 2, cy + bh / 2);
        draw::fill_rect(&mut img, left, top, right, bottom, opaque(base));
        draw::rect_outline(&mut img, left, top, right, bottom, 2, dark);
        for band_y in [cy - bh / 4, cy + bh / 4] {
            draw::fill_rect(&mut img, left, band_y - 2, right, band_y + 2, dark);
        }

        let lock = opaque(ctx.color(1));
        draw::fill_rect(&mut img, cx - 6, cy - 4, cx + 6, cy + 4, lock);
        draw::ellipse_outline(&mut img, cx - 4, cy - 6, cx + 4, cy, 2, lock);
    } else {
        let cx = s / 2;
        let pw = s / 5;
        let (top, bottom) = (s / 8, s * 7 / 8);
        draw::fill_rect(&mut img, cx - pw / 2, top, cx + pw / 2, bottom, opaque(base));
        draw::fill_ellipse(&mut img, cx - pw / 2 - 4, top - 8, cx + pw / 2 + 4, top + 6, opaque(shift(base, 60)));
        draw::fill_ellipse(&mut img, cx - pw / 2 - 4, bottom - 6, cx + pw / 2 + 4, bottom + 8, dark);
    }
    img
}
