//! Drawing primitives
//!
//! Pure functions writing into a caller-owned [`TextureBuffer`]. Bounding
//! boxes are inclusive on both ends and given as `(x0, y0, x1, y1)`; reversed
//! corners are normalized. Writes replace the destination pixel outright,
//! alpha included, and anything off-canvas is clipped.

use super::TextureBuffer;

type Rgba = [u8; 4];

/// Inclusive box with ordered corners
#[derive(Clone, Copy, Debug)]
struct BBox {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl BBox {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) as f64 / 2.0, (self.y0 + self.y1) as f64 / 2.0)
    }

    fn half_extents(&self) -> (f64, f64) {
        ((self.x1 - self.x0) as f64 / 2.0, (self.y1 - self.y0) as f64 / 2.0)
    }
}

/// Visit every on-canvas pixel of `bbox` for which `inside` holds
fn fill_where(buf: &mut TextureBuffer, bbox: BBox, color: Rgba, inside: impl Fn(f64, f64) -> bool) {
    let x0 = bbox.x0.max(0);
    let y0 = bbox.y0.max(0);
    let x1 = bbox.x1.min(buf.width as i32 - 1);
    let y1 = bbox.y1.min(buf.height as i32 - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            if inside(x as f64, y as f64) {
                buf.set_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn in_ellipse(cx: f64, cy: f64, rx: f64, ry: f64, x: f64, y: f64) -> bool {
    if rx < 0.0 || ry < 0.0 {
        return false;
    }
    let dx = (x - cx) / (rx + 0.5);
    let dy = (y - cy) / (ry + 0.5);
    dx * dx + dy * dy <= 1.0
}

fn in_rounded_rect(b: BBox, radius: f64, x: f64, y: f64) -> bool {
    let (x0, y0, x1, y1) = (b.x0 as f64, b.y0 as f64, b.x1 as f64, b.y1 as f64);
    if x < x0 || x > x1 || y < y0 || y > y1 {
        return false;
    }
    let (hx, hy) = b.half_extents();
    let r = radius.min(hx).min(hy).max(0.0);
    let nx = x.clamp(x0 + r, x1 - r);
    let ny = y.clamp(y0 + r, y1 - r);
    let (dx, dy) = (x - nx, y - ny);
    dx * dx + dy * dy <= (r + 0.5) * (r + 0.5)
}

/// Filled axis-aligned rectangle
pub fn fill_rect(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    fill_where(buf, BBox::new(x0, y0, x1, y1), color, |_, _| true);
}

/// Rectangle outline `width` pixels thick, drawn inward
pub fn rect_outline(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: Rgba) {
    let b = BBox::new(x0, y0, x1, y1);
    let w = width.max(1) as f64;
    fill_where(buf, b, color, |x, y| {
        x < b.x0 as f64 + w || x > b.x1 as f64 - w || y < b.y0 as f64 + w || y > b.y1 as f64 - w
    });
}

/// Filled ellipse inscribed in the box
pub fn fill_ellipse(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let b = BBox::new(x0, y0, x1, y1);
    let (cx, cy) = b.center();
    let (rx, ry) = b.half_extents();
    fill_where(buf, b, color, |x, y| in_ellipse(cx, cy, rx, ry, x, y));
}

/// Ellipse ring `width` pixels thick
pub fn ellipse_outline(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, width: i32, color: Rgba) {
    let b = BBox::new(x0, y0, x1, y1);
    let (cx, cy) = b.center();
    let (rx, ry) = b.half_extents();
    let w = width.max(1) as f64;
    fill_where(buf, b, color, |x, y| {
        in_ellipse(cx, cy, rx, ry, x, y) && !in_ellipse(cx, cy, rx - w, ry - w, x, y)
    });
}

/// One-pixel elliptical arc between two angles in degrees.
///
/// Angles are measured clockwise from +X in screen space, so 0..180 is the
/// lower half.
pub fn arc(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, start: f64, end: f64, color: Rgba) {
    let b = BBox::new(x0, y0, x1, y1);
    let (cx, cy) = b.center();
    let (rx, ry) = b.half_extents();
    fill_where(buf, b, color, |x, y| {
        if !in_ellipse(cx, cy, rx, ry, x, y) || in_ellipse(cx, cy, rx - 1.0, ry - 1.0, x, y) {
            return false;
        }
        let angle = (y - cy).atan2(x - cx).to_degrees().rem_euclid(360.0);
        angle >= start && angle <= end
    });
}

/// Filled rectangle with rounded corners
pub fn fill_rounded_rect(buf: &mut TextureBuffer, x0: i32, y0: i32, x1: i32, y1: i32, radius: i32, color: Rgba) {
    let b = BBox::new(x0, y0, x1, y1);
    fill_where(buf, b, color, |x, y| in_rounded_rect(b, radius as f64, x, y));
}

/// Rounded rectangle outline `width` pixels thick, drawn inward
pub fn rounded_rect_outline(
    buf: &mut TextureBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    radius: i32,
    width: i32,
    color: Rgba,
) {
    let b = BBox::new(x0, y0, x1, y1);
    let w = width.max(1);
    let inner = BBox::new(b.x0 + w, b.y0 + w, b.x1 - w, b.y1 - w);
    let inner_valid = inner.x0 <= inner.x1 && inner.y0 <= inner.y1 && b.x0 + w <= b.x1 - w;
    let inner_r = (radius - w).max(0) as f64;
    fill_where(buf, b, color, |x, y| {
        in_rounded_rect(b, radius as f64, x, y)
            && !(inner_valid && in_rounded_rect(inner, inner_r, x, y))
    });
}

/// One-pixel line (Bresenham)
pub fn line(buf: &mut TextureBuffer, from: (i32, i32), to: (i32, i32), color: Rgba) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        buf.put(x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Closed polygon outline
pub fn polygon_outline(buf: &mut TextureBuffer, points: &[(i32, i32)], color: Rgba) {
    if points.is_empty() {
        return;
    }
    for (i, &p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        line(buf, p, q, color);
    }
}

/// Filled polygon (even-odd scanline at pixel centers, outline included)
pub fn fill_polygon(buf: &mut TextureBuffer, points: &[(i32, i32)], color: Rgba) {
    if points.len() < 2 {
        if let Some(&(x, y)) = points.first() {
            buf.put(x, y, color);
        }
        return;
    }

    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let max_y = points
        .iter()
        .map(|p| p.1)
        .max()
        .unwrap_or(0)
        .min(buf.height as i32 - 1);

    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
    for y in min_y..=max_y {
        let sy = y as f64 + 0.5;
        crossings.clear();
        for (i, &(ax, ay)) in points.iter().enumerate() {
            let (bx, by) = points[(i + 1) % points.len()];
            let (ay, by) = (ay as f64, by as f64);
            if (ay <= sy && by > sy) || (by <= sy && ay > sy) {
                let t = (sy - ay) / (by - ay);
                crossings.push(ax as f64 + t * (bx - ax) as f64);
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil() as i32;
            let end = (pair[1] - 0.5).floor() as i32;
            for x in start..=end {
                buf.put(x, y, color);
            }
        }
    }

    polygon_outline(buf, points, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = [255, 0, 0, 255];

    fn count(buf: &TextureBuffer, color: Rgba) -> usize {
        buf.pixels().filter(|p| *p == color).count()
    }

    #[test]
    fn test_fill_rect_inclusive() {
        let mut buf = TextureBuffer::new(8, 8);
        fill_rect(&mut buf, 1, 1, 3, 2, RED);
        assert_eq!(count(&buf, RED), 3 * 2);
        assert_eq!(buf.get_pixel(3, 2), RED);
        assert_eq!(buf.get_pixel(4, 2), [0; 4]);
    }

    #[test]
    fn test_fill_rect_reversed_corners() {
        let mut a = TextureBuffer::new(8, 8);
        let mut b = TextureBuffer::new(8, 8);
        fill_rect(&mut a, 1, 1, 5, 5, RED);
        fill_rect(&mut b, 5, 5, 1, 1, RED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rect_outline_leaves_interior() {
        let mut buf = TextureBuffer::new(8, 8);
        rect_outline(&mut buf, 0, 0, 7, 7, 1, RED);
        assert_eq!(buf.get_pixel(0, 0), RED);
        assert_eq!(buf.get_pixel(7, 3), RED);
        assert_eq!(buf.get_pixel(3, 3), [0; 4]);
        assert_eq!(count(&buf, RED), 28);
    }

    #[test]
    fn test_fill_ellipse_symmetric() {
        let mut buf = TextureBuffer::new(16, 16);
        fill_ellipse(&mut buf, 2, 2, 12, 12, RED);
        assert_eq!(buf.get_pixel(7, 7), RED);
        assert_eq!(buf.get_pixel(2, 7), RED);
        assert_eq!(buf.get_pixel(2, 2), [0; 4]);
        for y in 0..16 {
            for x in 0..16 {
                // Mirror about the center (7, 7)
                if x <= 14 && y <= 14 {
                    assert_eq!(buf.get_pixel(x, y), buf.get_pixel(14 - x, y));
                }
            }
        }
    }

    #[test]
    fn test_ellipse_outline_is_ring() {
        let mut buf = TextureBuffer::new(16, 16);
        ellipse_outline(&mut buf, 0, 0, 15, 15, 1, RED);
        assert_eq!(buf.get_pixel(7, 7), [0; 4]);
        assert_eq!(buf.get_pixel(0, 7), RED);
    }

    #[test]
    fn test_arc_lower_half_only() {
        let mut buf = TextureBuffer::new(16, 16);
        arc(&mut buf, 0, 0, 14, 14, 0.0, 180.0, RED);
        assert_eq!(buf.get_pixel(7, 14), RED);
        assert_eq!(buf.get_pixel(7, 0), [0; 4]);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut buf = TextureBuffer::new(16, 16);
        fill_rounded_rect(&mut buf, 0, 0, 15, 15, 4, RED);
        assert_eq!(buf.get_pixel(0, 0), [0; 4]);
        assert_eq!(buf.get_pixel(8, 0), RED);
        assert_eq!(buf.get_pixel(8, 8), RED);
    }

    #[test]
    fn test_rounded_rect_outline_hollow() {
        let mut buf = TextureBuffer::new(16, 16);
        rounded_rect_outline(&mut buf, 0, 0, 15, 15, 4, 2, RED);
        assert_eq!(buf.get_pixel(8, 1), RED);
        assert_eq!(buf.get_pixel(8, 8), [0; 4]);
    }

    #[test]
    fn test_line_endpoints() {
        let mut buf = TextureBuffer::new(8, 8);
        line(&mut buf, (0, 0), (7, 3), RED);
        assert_eq!(buf.get_pixel(0, 0), RED);
        assert_eq!(buf.get_pixel(7, 3), RED);
        assert_eq!(count(&buf, RED), 8);
    }

    #[test]
    fn test_fill_polygon_triangle() {
        let mut buf = TextureBuffer::new(16, 16);
        fill_polygon(&mut buf, &[(0, 0), (15, 0), (0, 15)], RED);
        assert_eq!(buf.get_pixel(2, 2), RED);
        assert_eq!(buf.get_pixel(0, 15), RED);
        assert_eq!(buf.get_pixel(14, 14), [0; 4]);
    }

    #[test]
    fn test_primitives_clip_offscreen() {
        let mut buf = TextureBuffer::new(8, 8);
        fill_ellipse(&mut buf, -20, -20, 30, 30, RED);
        fill_polygon(&mut buf, &[(-10, -10), (20, -10), (20, 20)], RED);
        line(&mut buf, (-5, 3), (12, 3), RED);
        assert_eq!(buf.get_pixel(4, 4), RED);
    }
}
