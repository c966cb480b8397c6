//! Vehicles: spaceship, or a car seen from above

use super::RecipeContext;
use crate::palette::{opaque, shift};
use crate::texture::{TextureBuffer, draw};

const COCKPIT: [u8; 4] = [100, 200, 255, 200];
const ENGINE: [u8; 4] = [255, 150, 0, 255];
const WINDSHIELD: [u8; 4] = [100, 180, 255, 180];

pub(super) fn render(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let cx = s / 2;
    let base = ctx.color(0);
    let hull = opaque(base);
    let dark = opaque(shift(base, -60));

    if ctx.mentions(&["spaceship", "rocket", "ufo"]) {
        let body = [(cx, s / 6), (cx + s / 3, s * 2 / 3), (cx, s * 3 / 4), (cx - s / 3, s * 2 / 3)];
        draw::fill_polygon(&mut img, &body, hull);
        draw::fill_ellipse(&mut img, cx - s / 8, s / 4, cx + s / 8, s * 2 / 5, COCKPIT);

        let exhaust_y = s * 3 / 4;
        for ex in [cx - s / 8, cx, cx + s / 8] {
            draw::fill_ellipse(&mut img, ex - 4, exhaust_y - 2, ex + 4, exhaust_y + 10, ENGINE);
        }

        let wing_tip_y = s * 3 / 4 + 4;
        draw::fill_polygon(
            &mut img,
            &[(cx - s / 3, s * 2 / 3), (cx - s / 2, wing_tip_y), (cx - s / 6, s * 3 / 5)],
            dark,
        );
        draw::fill_polygon(
            &mut img,
            &[(cx + s / 3, s * 2 / 3), (cx + s / 2, wing_tip_y), (cx + s / 6, s * 3 / 5)],
            dark,
        );
    } else {
        draw::fill_rounded_rect(&mut img, cx - s / 3, s / 5, cx + s / 3, s * 4 / 5, s / 8, hull);
        draw::fill_rounded_rect(&mut img, cx - s / 4, s / 4, cx + s / 4, s * 2 / 5, 4, WINDSHIELD);
        draw::fill_rounded_rect(&mut img, cx - s / 4, s * 3 / 5, cx + s / 4, s * 3 / 4, 4, WINDSHIELD);

        let wheels = [
            (cx - s / 3 - 4, s / 4),
            (cx + s / 3 - 4, s / 4),
            (cx - s / 3 - 4, s * 3 / 5),
            (cx + s / 3 - 4, s * 3 / 5),
        ];
        for (wx, wy) in wheels {
            draw::fill_ellipse(&mut img, wx, wy, wx + 10, wy + 14, dark);
        }
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
            palette: PaletteName::Ocean.colors(),
            seed: 0,
            prompt: prompt.into(),
        })
    }

    #[test]
    fn test_spaceship_cockpit_and_engines() {
        let img = render_prompt("spaceship");
        assert_eq!(img.get_pixel(32, 20), COCKPIT);
        assert_eq!(img.get_pixel(32, 54), ENGINE);
    }

    #[test]
    fn test_car_windshield() {
        let img = render_prompt("race car");
        assert_eq!(img.get_pixel(32, 20), WINDSHIELD);
        assert_eq!(img.get_pixel(32, 32), opaque(PaletteName::Ocean.colors()[0]));
    }
}
