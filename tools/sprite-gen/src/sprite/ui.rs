//! Interface elements: heart, button, or a framed panel

use super::RecipeContext;
use crate::palette::{opaque, shift, with_alpha};
use crate::texture::{TextureBuffer, draw};

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let base = ctx.color(0);

    if ctx.mentions(&["health", "hp", "heart", "life"]) {
        let (cx, cy) = (s / 2, s / 2 + 4);
        let r = s / 3;
        let fill = opaque(base);
        draw::fill_ellipse(&mut img, cx - r, cy - r, cx, cy, fill);
        draw::fill_ellipse(&mut img, cx, cy - r, cx + r, cy, fill);
        draw::fill_polygon(&mut img, &[(cx - r, cy), (cx + r, cy), (cx, cy + r + 4)], fill);
        draw::fill_ellipse(
            &mut img,
            cx - r + 4,
            cy - r + 4,
            cx - r + 12,
            cy - r + 10,
            with_alpha(shift(base, 80), 180),
        );
    } else if ctx.mentions(&["button", "btn"]) {
        let border = shift(base, 60);
        let (top, bottom) = (s / 3, s * 2 / 3);
        draw::fill_rounded_rect(&mut img, 8, top, s - 8, bottom, 8, opaque(base));
        draw::rounded_rect_outline(&mut img, 8, top, s - 8, bottom, 8, 2, opaque(border));
        draw::fill_rounded_rect(&mut img, 10, top + 2, s - 10, top + 6, 2, with_alpha(border, 100));
    } else {
        draw::fill_rounded_rect(&mut img, 4, 4, s - 4, s - 4, 6, with_alpha(base, 200));
        draw::rounded_rect_outline(&mut img, 4, 4, s - 4, s - 4, 6, 2, opaque(ctx.color(1)));
        let gem = opaque(ctx.color(2));
        for (gx, gy) in [(8, 8), (s - 8, 8), (8, s - 8), (s - 8, s - 8)] {
            draw::fill_ellipse(&mut img, gx - 4, gy - 4, gx + 4, gy + 4, gem);
        }
    }
    img
}
