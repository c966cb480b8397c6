//! Particle bursts and star icons

use super::{RecipeContext, star_points};
use crate::palette::{opaque, shift, with_alpha};
use crate::texture::{TextureBuffer, draw};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::f64::consts::TAU;

const PARTICLE_COUNT: usize = 40;

/// Radial scatter of fading particles around concentric burst rings
pub(super) fn particles(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let (cx, cy) = (s / 2, s / 2);
    let half = (s / 2) as f64;
    let mut rng = ctx.rng();

    let max_radius = (s / 16).max(3);
    for _ in 0..PARTICLE_COUNT {
        let angle = rng.random::<f64>() * TAU;
        let distance = 4.0 + (half - 8.0) * rng.random::<f64>();
        let x = cx + (distance * angle.cos()) as i32;
        let y = cy + (distance * angle.sin()) as i32;
        let r = rng.random_range(2..=max_radius);
        let color = ctx.palette.choose(&mut rng).copied().unwrap_or(ctx.color(0));
        let alpha = (255.0 * (1.0 - distance / half)).clamp(0.0, 255.0) as u8;
        draw::fill_ellipse(&mut img, x - r, y - r, x + r, y + r, with_alpha(color, alpha));
    }

    let ring_max = s / 4;
    for r in (1..=ring_max).rev().step_by(4) {
        let alpha = (200.0 * (1.0 - r as f64 / ring_max as f64)) as u8;
        draw::ellipse_outline(&mut img, cx - r, cy - r, cx + r, cy + r, 1, with_alpha(ctx.color(0), alpha));
    }
    img
}

/// Ten-point star with a translucent highlight facet
pub(super) fn star_icon(ctx: &RecipeContext) -> TextureBuffer {
    let mut img = ctx.canvas();
    let s = ctx.s;
    let base = ctx.color(0);

    let outer = s / 2 - 6;
    let points = star_points(s / 2, s / 2, outer, outer / 2);
    draw::fill_polygon(&mut img, &points, opaque(base));
    draw::fill_polygon(&mut img, &points[..4], with_alpha(shift(base, 100), 120));
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteName;

    fn ctx(seed: u32) -> RecipeContext<'static> {
        RecipeContext {
            s: 64,
            palette: PaletteName::Fire.colors(),
            seed,
            prompt: "explosion".into(),
        }
    }

    #[test]
    fn test_particles_fade_outward() {
        let img = particles(&ctx(77));
        assert!(img.pixels().all(|p| p[3] < 255));
        assert!(img.pixels().any(|p| p[3] > 0));
    }

    #[test]
    fn test_particles_seeded() {
        assert_eq!(particles(&ctx(5)), particles(&ctx(5)));
        assert_ne!(particles(&ctx(5)), particles(&ctx(6)));
    }

    #[test]
    fn test_star_icon_fill() {
        let img = star_icon(&ctx(0));
        assert_eq!(img.get_pixel(32, 40), opaque(PaletteName::Fire.colors()[0]));
        assert_eq!(img.get_pixel(0, 0), [0, 0, 0, 0]);
    }
}
