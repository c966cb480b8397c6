//! Scenery: tree, boulder, cloud, or a rolling hill

use super::{RecipeContext, fdiv};
use crate::palette::{opaque, shift};
use crate::texture::{TextureBuffer, draw};

const TRUNK: [u8; 4] = [100, 60, 20, 255];
const CLOUD: [u8; 4] = [220, 230, 255, 255];

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let base = ctx.color(0);

    if ctx.mentions(&["tree", "plant", "bush", "forest"]) {
        let cx = s / 2;
        let tw = s / 8;
        draw::fill_rect(&mut img, cx - tw / 2, s * 2 / 3, cx + tw / 2, s - 6, TRUNK);

        // Canopy layers from the wide dark base up to the small light top
        let layers = [
            (s / 2, s / 3, shift(base, -40)),
            (s / 3, s / 4, base),
            (s / 4, s / 5, shift(base, 40)),
        ];
        for (ry, rr, color) in layers {
            draw::fill_ellipse(&mut img, cx - rr, ry - rr / 2, cx + rr, ry + rr / 2 + 4, opaque(color));
        }
    } else if ctx.mentions(&["rock", "stone", "boulder"]) {
        let light = opaque(shift(base, 60));
        let dark = opaque(shift(base, -60));
        let (cx, cy) = (s / 2, s * 3 / 5);
        let (rx, ry) = (s / 3, s / 4);
        draw::fill_ellipse(&mut img, cx - rx, cy - ry, cx + rx, cy + ry, opaque(base));
        draw::fill_ellipse(&mut img, cx - rx / 3, cy - ry, cx + rx / 4, cy, light);
        draw::fill_ellipse(&mut img, cx + rx / 4, cy, cx + rx, cy + ry, dark);
        // Cracks
        draw::line(&mut img, (cx - 10, cy + 5), (cx + 5, cy - 8), dark);
        draw::line(&mut img, (cx + 8, cy + 8), (cx + 15, cy - 2), dark);
    } else if ctx.mentions(&["cloud", "sky"]) {
        let (cx, cy) = (s / 2, s / 2);
        let puffs = [
            (fdiv(-s, 5), 4, s / 5),
            (0, -4, s / 4),
            (s / 5, 2, s / 6),
            (fdiv(-s, 8), s / 8, s / 8),
        ];
        for (ox, oy, r) in puffs {
            draw::fill_ellipse(&mut img, cx + ox - r, cy + oy - r, cx + ox + r, cy + oy + r, CLOUD);
        }
    } else {
        draw::fill_ellipse(&mut img, fdiv(-s, 4), s / 3, s + s / 4, s + 10, opaque(base));
        draw::fill_ellipse(&mut img, s / 6, s * 2 / 3, s * 5 / 6, s - 4, opaque(shift(base, 30)));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteName;

    fn render_prompt(prompt: &str) -> TextureBuffer {
        render(&RecipeContext {
            s: 64,
            palette: PaletteName::Nature.colors(),
            seed: 0,
            prompt: prompt.into(),
        })
    }

    #[test]
    fn test_tree_trunk() {
        let img = render_prompt("oak tree");
        assert_eq!(img.get_pixel(32, 56), TRUNK);
    }

    #[test]
    fn test_cloud_color() {
        let img = render_prompt("fluffy cloud");
        assert_eq!(img.get_pixel(32, 28), CLOUD);
        assert_eq!(img.get_pixel(32, 63), [0, 0, 0, 0]);
    }

    #[test]
    fn test_hill_fills_bottom() {
        let img = render_prompt("meadow");
        assert_eq!(img.get_pixel(0, 60)[3], 255);
        assert_eq!(img.get_pixel(32, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_rock_branch() {
        let img = render_prompt("mossy boulder");
        assert_ne!(img, render_prompt("meadow"));
    }
}
