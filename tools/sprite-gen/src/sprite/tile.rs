//! Opaque ground tile: noise-blended base, grid seams, scattered detail blocks

use super::RecipeContext;
use crate::palette::{lerp_color, opaque, shift};
use crate::texture::{NoiseField, TextureBuffer, draw};
use rand::Rng;

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let s = ctx.s;
    let size = s as u32;
    let base = ctx.color(0);
    let mut img = TextureBuffer::filled(size, size, opaque(base));

    let noise = NoiseField::generate(size, size, (size / 8).max(4), ctx.seed);
    for y in 0..size {
        for x in 0..size {
            let color = lerp_color(base, ctx.color(1), noise.get(x, y));
            img.set_pixel(x, y, opaque(color));
        }
    }

    let seam = opaque(shift(base, -30));
    let spacing = (s / 4).max(8) as usize;
    for i in (0..s).step_by(spacing) {
        draw::line(&mut img, (i, 0), (i, s), seam);
        draw::line(&mut img, (0, i), (s, i), seam);
    }

    let mut rng = ctx.rng();
    let hi = (s - 12).max(4);
    for _ in 0..rng.random_range(3..=8) {
        let x = rng.random_range(4..=hi);
        let y = rng.random_range(4..=hi);
        let w = rng.random_range(3..=8);
        let h = rng.random_range(3..=8);
        let color = ctx.color(rng.random_range(1..ctx.palette.len()));
        draw::fill_rect(&mut img, x, y, x + w, y + h, opaque(color));
    }

    draw::rect_outline(&mut img, 0, 0, s - 1, s - 1, 1, opaque(shift(base, 40)));
    img
}
