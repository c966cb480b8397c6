//! Pickup items: sword, potion, coin, or a generic gem

use super::{RecipeContext, star_points};
use crate::palette::{opaque, shift};
use crate::texture::{TextureBuffer, draw};

const GLASS: [u8; 4] = [200, 230, 255, 255];
const CORK: [u8; 4] = [160, 100, 40, 255];

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    if ctx.mentions(&["sword", "blade", "knife", "dagger"]) {
        sword(ctx, &mut img);
    } else if ctx.mentions(&["potion", "bottle", "vial", "flask"]) {
        potion(ctx, &mut img);
    } else if ctx.mentions(&["coin", "gold", "medal"]) {
        coin(ctx, &mut img);
    } else {
        gem(ctx, &mut img);
    }
    img
}

fn sword(ctx: &RecipeContext, img: &mut TextureBuffer) {
    let s = ctx.s;
    let (cx, cy) = (s / 2, s / 2);
    let blade = opaque(ctx.color(2));
    let hilt = opaque(ctx.color(0));
    let guard = opaque(ctx.color(1));

    let bw = (s / 12).max(4);
    let bh = (s as f64 * 0.65) as i32;
    let blade_pts = [
        (cx, cy - bh / 2),
        (cx + bw / 2, cy + bh / 4),
        (cx, cy + bh / 2),
        (cx - bw / 2, cy + bh / 4),
    ];
    draw::fill_polygon(img, &blade_pts, blade);
    draw::line(img, (cx - 1, cy - bh / 2 + 4), (cx - 1, cy + bh / 4 - 4), [255, 255, 255, 180]);

    let gw = bw * 3;
    draw::fill_rect(img, cx - gw / 2, cy + bh / 4 - 4, cx + gw / 2, cy + bh / 4 + 4, guard);

    let hw = bw;
    draw::fill_rounded_rect(img, cx - hw / 2, cy + bh / 4 + 4, cx + hw / 2, cy + bh / 2 + 8, 2, hilt);
    draw::fill_ellipse(img, cx - hw / 2 - 2, cy + bh / 2 + 6, cx + hw / 2 + 2, cy + bh / 2 + 14, guard);
}

fn potion(ctx: &RecipeContext, img: &mut TextureBuffer) {
    let s = ctx.s;
    let (cx, cy) = (s / 2, s / 2);
    let liquid = opaque(ctx.color(0));

    let by1 = cy - s / 6;
    let by2 = cy + s / 3;
    let bw = s / 4;
    draw::fill_ellipse(img, cx - bw, by1, cx + bw, by2, GLASS);

    let liquid_y = by1 + (by2 - by1) / 3;
    draw::fill_ellipse(img, cx - bw + 3, liquid_y, cx + bw - 3, by2 - 3, liquid);

    let nw = s / 10;
    draw::fill_rect(img, cx - nw, cy - s / 3, cx + nw, by1 + 4, GLASS);
    draw::fill_rect(img, cx - nw - 2, cy - s / 3 - 6, cx + nw + 2, cy - s / 3, CORK);

    // Glass shine and a bubble
    draw::fill_ellipse(img, cx - bw + 4, by1 + 4, cx - bw + 12, by1 + 14, [255, 255, 255, 150]);
    draw::fill_ellipse(img, cx + 4, liquid_y + 6, cx + 10, liquid_y + 12, [255, 255, 255, 120]);
}

fn coin(ctx: &RecipeContext, img: &mut TextureBuffer) {
    let s = ctx.s;
    let (cx, cy) = (s / 2, s / 2);
    let base = ctx.color(0);

    let r = s / 2 - 8;
    draw::fill_ellipse(img, cx - r, cy - r, cx + r, cy + r, opaque(base));
    draw::ellipse_outline(img, cx - r + 4, cy - r + 4, cx + r - 4, cy + r - 4, 1, opaque(shift(base, -50)));
    draw::fill_polygon(img, &star_points(cx, cy, r - 8, r - 14), opaque(shift(base, 60)));
}

fn gem(ctx: &RecipeContext, img: &mut TextureBuffer) {
    let s = ctx.s;
    let (cx, cy) = (s / 2, s / 2);
    let base = ctx.color(0);

    let r = s / 3;
    let outline = [(cx, cy - r), (cx + r * 2 / 3, cy), (cx, cy + r), (cx - r * 2 / 3, cy)];
    draw::fill_polygon(img, &outline, opaque(base));
    draw::fill_polygon(img, &[(cx, cy - r), (cx + r * 2 / 3, cy), (cx, cy)], opaque(shift(base, 100)));
    draw::polygon_outline(img, &outline, opaque(shift(base, -80)));
}
