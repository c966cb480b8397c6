//! Humanoid character: legs, body, arms, head with eyes, mouth and hair

use super::RecipeContext;
use crate::palette::{opaque, shift, with_alpha};
use crate::texture::{TextureBuffer, draw};
use rand::Rng;
use std::f64::consts::PI;

const WHITE: [u8; 4] = [255, 255, 255, 255];
const BLACK: [u8; 4] = [0, 0, 0, 255];

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let mut rng = ctx.rng();

    let skin_idx = rng.random_range(0..=ctx.palette.len() / 2);
    let body_idx = rng.random_range(0..ctx.palette.len());
    let skin = opaque(ctx.color(skin_idx));
    let body_rgb = ctx.color(body_idx);
    let body = opaque(body_rgb);
    let accent = opaque(ctx.color(body_idx + 2));
    let dark = opaque(shift(body_rgb, -60));

    let head_r = s / 7;
    let body_w = s / 4;
    let body_h = s / 3;
    let cx = s / 2;
    let head_cy = s / 4;
    let body_top = head_cy + head_r;
    let body_bot = body_top + body_h;
    let leg_h = s / 5;

    // Legs, drawn as stacked stripes
    let leg_w = body_w / 2 - 2;
    let lleg_x = cx - body_w / 2;
    let rleg_x = cx + 2;
    for ly in (body_bot..body_bot + leg_h).step_by(2) {
        draw::fill_rect(&mut img, lleg_x, ly, lleg_x + leg_w, ly + 2, dark);
        draw::fill_rect(&mut img, rleg_x, ly, rleg_x + leg_w, ly + 2, dark);
    }
    let foot_y = body_bot + leg_h;
    draw::fill_ellipse(&mut img, lleg_x - 2, foot_y - 4, lleg_x + leg_w + 2, foot_y + 4, dark);
    draw::fill_ellipse(&mut img, rleg_x - 2, foot_y - 4, rleg_x + leg_w + 2, foot_y + 4, dark);

    // Torso with a center seam and chest emblem
    draw::fill_rounded_rect(&mut img, cx - body_w / 2, body_top, cx + body_w / 2, body_bot, 4, body);
    draw::line(&mut img, (cx, body_top + 4), (cx, body_bot - 4), dark);
    let ew = body_w / 3;
    let emblem_y = body_top + body_h / 4;
    draw::fill_ellipse(&mut img, cx - ew / 2, emblem_y, cx + ew / 2, emblem_y + ew, accent);

    // Arms and hands
    let arm_w = s / 12;
    let arm_h = body_h / 2 + 4;
    let left = cx - body_w / 2;
    let right = cx + body_w / 2;
    draw::fill_rounded_rect(&mut img, left - arm_w - 1, body_top + 2, left, body_top + arm_h, 3, body);
    draw::fill_rounded_rect(&mut img, right + 1, body_top + 2, right + arm_w + 1, body_top + arm_h, 3, body);
    let hw = arm_w + 2;
    let hand_y = body_top + arm_h;
    draw::fill_ellipse(&mut img, left - arm_w - 1, hand_y - 4, left + 2, hand_y + hw, skin);
    draw::fill_ellipse(&mut img, right - 2, hand_y - 4, right + arm_w + 2, hand_y + hw, skin);

    // Neck and head
    let nw = 6;
    draw::fill_rect(&mut img, cx - nw / 2, head_cy + head_r - 2, cx + nw / 2, body_top + 2, skin);
    draw::fill_ellipse(&mut img, cx - head_r, head_cy - head_r, cx + head_r, head_cy + head_r, skin);

    // Eyes: white, iris, pupil
    let ey = head_cy - 2;
    let ex = head_r / 2;
    for eye_x in [cx - ex, cx + ex] {
        draw::fill_ellipse(&mut img, eye_x - 3, ey - 3, eye_x + 3, ey + 3, WHITE);
        draw::fill_ellipse(&mut img, eye_x - 1, ey - 1, eye_x + 2, ey + 2, accent);
        draw::fill_ellipse(&mut img, eye_x, ey, eye_x + 1, ey + 1, BLACK);
    }

    draw::arc(&mut img, cx - 4, head_cy + 2, cx + 4, head_cy + 6, 0.0, 180.0, BLACK);

    // Hair: points swept around the head from the left edge through +y
    let mut hair = vec![(cx - head_r + 1, head_cy - 2)];
    for i in 0..7 {
        let angle = PI - i as f64 * PI / 6.0;
        let r = (head_r + 1) as f64;
        hair.push((
            (cx as f64 + r * angle.cos()) as i32,
            (head_cy as f64 + r * angle.sin()) as i32,
        ));
    }
    draw::fill_polygon(&mut img, &hair, accent);

    // Ground shadow
    draw::fill_ellipse(&mut img, cx - body_w / 2, s - 10, cx + body_w / 2, s - 2, with_alpha([0, 0, 0], 80));

    img
}
