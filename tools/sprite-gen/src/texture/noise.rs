//! Value noise for tile texturing
//!
//! A coarse grid of seeded random values is upsampled with Catmull-Rom
//! bicubic interpolation and min-max normalized, giving a smooth field in
//! `[0, 1]` that is fully determined by size, scale and seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Smooth 2D noise field with values in `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseField {
    pub width: u32,
    pub height: u32,
    values: Vec<f64>,
}

impl NoiseField {
    /// Generate a field; `scale` is the pixel spacing of the coarse grid
    pub fn generate(width: u32, height: u32, scale: u32, seed: u32) -> Self {
        let scale = scale.max(1);
        let grid_w = width.div_ceil(scale) as usize + 2;
        let grid_h = height.div_ceil(scale) as usize + 2;

        let mut rng = Pcg32::seed_from_u64(seed as u64);
        let grid: Vec<f64> = (0..grid_w * grid_h).map(|_| rng.random::<f64>()).collect();
        let sample = |gx: i64, gy: i64| {
            let gx = gx.clamp(0, grid_w as i64 - 1) as usize;
            let gy = gy.clamp(0, grid_h as i64 - 1) as usize;
            grid[gy * grid_w + gx]
        };

        // Corner-aligned mapping from output pixels onto the grid
        let step_x = if width > 1 { (grid_w - 1) as f64 / (width - 1) as f64 } else { 0.0 };
        let step_y = if height > 1 { (grid_h - 1) as f64 / (height - 1) as f64 } else { 0.0 };

        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            let fy = y as f64 * step_y;
            let iy = fy.floor() as i64;
            let ty = fy - iy as f64;
            for x in 0..width {
                let fx = x as f64 * step_x;
                let ix = fx.floor() as i64;
                let tx = fx - ix as f64;

                let mut rows = [0.0; 4];
                for (j, row) in rows.iter_mut().enumerate() {
                    let gy = iy + j as i64 - 1;
                    *row = catmull_rom(
                        sample(ix - 1, gy),
                        sample(ix, gy),
                        sample(ix + 1, gy),
                        sample(ix + 2, gy),
                        tx,
                    );
                }
                values.push(catmull_rom(rows[0], rows[1], rows[2], rows[3], ty));
            }
        }

        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        for v in &mut values {
            *v = ((*v - lo) / (hi - lo + 1e-9)).clamp(0.0, 1.0);
        }

        Self { width, height, values }
    }

    /// Value at (x, y)
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.values[y as usize * self.width as usize + x as usize]
    }
}

#[inline]
fn catmull_rom(p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * ((2.0 * p1)
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_deterministic() {
        let a = NoiseField::generate(32, 32, 4, 1234);
        let b = NoiseField::generate(32, 32, 4, 1234);
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_seed_changes_field() {
        let a = NoiseField::generate(32, 32, 4, 1);
        let b = NoiseField::generate(32, 32, 4, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn test_noise_normalized() {
        let field = NoiseField::generate(64, 48, 8, 99);
        let mut lo = f64::MAX;
        let mut hi = f64::MIN;
        for y in 0..48 {
            for x in 0..64 {
                let v = field.get(x, y);
                assert!((0.0..=1.0).contains(&v));
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        assert!(lo < 0.01);
        assert!(hi > 0.99);
    }

    #[test]
    fn test_catmull_rom_interpolates_endpoints() {
        assert_eq!(catmull_rom(0.0, 1.0, 2.0, 3.0, 0.0), 1.0);
        assert_eq!(catmull_rom(0.0, 1.0, 2.0, 3.0, 1.0), 2.0);
        assert!((catmull_rom(0.0, 1.0, 2.0, 3.0, 0.5) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_tiny_field() {
        let field = NoiseField::generate(1, 1, 4, 0);
        assert_eq!(field.get(0, 0), 0.0);
    }
}
