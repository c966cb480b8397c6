//! Orthographic preview rasterizer
//!
//! Draws a mesh from four fixed cameras with flat, translucent per-material
//! fills. Faces are batched by material (base first) and painted back to
//! front within each batch.

use super::export::MaterialSet;
use super::types::{Material, Mesh};
use crate::palette::Rgb;
use crate::texture::{TextureBuffer, draw};
use glam::{Mat3, Vec2, Vec3};

const FIGURE_BACKGROUND: [u8; 4] = [0x0a, 0x0a, 0x0f, 255];
const AXES_BACKGROUND: [u8; 4] = [0x11, 0x11, 0x18, 255];
const FACE_OPACITY: f32 = 0.85;
const EDGE_OPACITY: f32 = 0.3;
/// Padding added around the mesh bounds, in model units
const BOUNDS_PAD: f32 = 0.3;

/// Camera placement in degrees
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewAngle {
    pub elevation: f32,
    pub azimuth: f32,
}

impl ViewAngle {
    pub const FRONT: ViewAngle = ViewAngle::new(10.0, -90.0);
    pub const REAR: ViewAngle = ViewAngle::new(10.0, 90.0);
    pub const LEFT: ViewAngle = ViewAngle::new(10.0, 0.0);
    pub const TOP: ViewAngle = ViewAngle::new(90.0, -90.0);

    pub const fn new(elevation: f32, azimuth: f32) -> Self {
        Self {
            elevation,
            azimuth,
        }
    }

    /// World-to-view rotation: rows are screen right, screen up and the
    /// direction towards the camera (Y is world up).
    fn basis(&self) -> Mat3 {
        let (el, az) = (self.elevation.to_radians(), self.azimuth.to_radians());
        let toward = Vec3::new(el.cos() * az.cos(), el.sin(), el.cos() * az.sin());
        let up = Vec3::new(-el.sin() * az.cos(), el.cos(), -el.sin() * az.sin());
        let right = up.cross(toward);
        Mat3::from_cols(right, up, toward).transpose()
    }
}

/// The four rendered views of one mesh
#[derive(Clone, Debug)]
pub struct PreviewViews {
    pub front: TextureBuffer,
    pub rear: TextureBuffer,
    pub left: TextureBuffer,
    pub top: TextureBuffer,
}

impl PreviewViews {
    /// Views paired with their names, in a fixed order
    pub fn named(&self) -> [(&'static str, &TextureBuffer); 4] {
        [
            ("front", &self.front),
            ("rear", &self.rear),
            ("left", &self.left),
            ("top", &self.top),
        ]
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PreviewRenderer {
    /// Edge length of each view in pixels
    pub size: u32,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self { size: 240 }
    }
}

struct ProjectedFace {
    points: Vec<Vec2>,
    depth: f32,
    material: Material,
}

impl PreviewRenderer {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    pub fn render_views(&self, mesh: &Mesh, palette: &[Rgb]) -> PreviewViews {
        let materials = MaterialSet::from_palette(palette);
        PreviewViews {
            front: self.render(mesh, &materials, ViewAngle::FRONT),
            rear: self.render(mesh, &materials, ViewAngle::REAR),
            left: self.render(mesh, &materials, ViewAngle::LEFT),
            top: self.render(mesh, &materials, ViewAngle::TOP),
        }
    }

    /// Render a single view
    pub fn render(&self, mesh: &Mesh, materials: &MaterialSet, view: ViewAngle) -> TextureBuffer {
        let size = self.size;
        let mut canvas = TextureBuffer::filled(size, size, FIGURE_BACKGROUND);
        let inset = (size / 16) as i32;
        draw::fill_rect(
            &mut canvas,
            inset,
            inset,
            size as i32 - 1 - inset,
            size as i32 - 1 - inset,
            AXES_BACKGROUND,
        );

        let Some((min, max)) = mesh.bounds() else {
            return canvas;
        };
        let basis = view.basis();
        let (lo, hi) = (min - Vec3::splat(BOUNDS_PAD), max + Vec3::splat(BOUNDS_PAD));

        // fit the padded bounding box's projection into the axes area
        let corners = [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ];
        let (mut smin, mut smax) = (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN));
        for c in corners {
            let p = (basis * c).truncate();
            smin = smin.min(p);
            smax = smax.max(p);
        }
        let extent = (smax - smin).max_element().max(f32::EPSILON);
        let scale = (size as f32 - 2.0 * inset as f32) / extent;
        let mid = (smin + smax) * 0.5;
        let half = size as f32 / 2.0;
        let to_screen = |p: Vec3| -> (Vec2, f32) {
            let v = basis * p;
            let xy = Vec2::new(half + (v.x - mid.x) * scale, half - (v.y - mid.y) * scale);
            (xy, v.z)
        };

        let mut faces: Vec<ProjectedFace> = mesh
            .faces
            .iter()
            .filter_map(|face| {
                let mut points = Vec::with_capacity(4);
                let mut depth = 0.0;
                for &index in &face.indices {
                    let (xy, z) = to_screen(mesh.vertex(index)?);
                    points.push(xy);
                    depth += z;
                }
                Some(ProjectedFace {
                    points,
                    depth: depth / 4.0,
                    material: face.material,
                })
            })
            .collect();
        faces.sort_by(|a, b| a.material.cmp(&b.material).then(a.depth.total_cmp(&b.depth)));

        for face in &faces {
            let color = materials.color(face.material);
            let points: Vec<(i32, i32)> = face
                .points
                .iter()
                .map(|p| (p.x.round() as i32, p.y.round() as i32))
                .collect();
            blend_shape(&mut canvas, &points, color, FACE_OPACITY, draw::fill_polygon);
            blend_shape(&mut canvas, &points, color, EDGE_OPACITY, draw::polygon_outline);
        }

        tracing::debug!(
            elevation = view.elevation,
            azimuth = view.azimuth,
            faces = faces.len(),
            "rendered preview"
        );
        canvas
    }
}

/// Rasterize a shape into a scratch mask, then composite it source-over
fn blend_shape(
    canvas: &mut TextureBuffer,
    points: &[(i32, i32)],
    color: Rgb,
    opacity: f32,
    shape: fn(&mut TextureBuffer, &[(i32, i32)], [u8; 4]),
) {
    let (Some(x0), Some(y0)) = (
        points.iter().map(|p| p.0).min(),
        points.iter().map(|p| p.1).min(),
    ) else {
        return;
    };
    let x1 = points.iter().map(|p| p.0).max().unwrap_or(x0);
    let y1 = points.iter().map(|p| p.1).max().unwrap_or(y0);

    let mut mask = TextureBuffer::new((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
    let local: Vec<(i32, i32)> = points.iter().map(|&(x, y)| (x - x0, y - y0)).collect();
    shape(&mut mask, &local, [255; 4]);

    for my in 0..mask.height {
        for mx in 0..mask.width {
            if mask.get_pixel(mx, my)[3] == 0 {
                continue;
            }
            let (x, y) = (x0 + mx as i32, y0 + my as i32);
            if x < 0 || y < 0 || x as u32 >= canvas.width || y as u32 >= canvas.height {
                continue;
            }
            let dst = canvas.get_pixel(x as u32, y as u32);
            let mut out = dst;
            for c in 0..3 {
                let blended = color[c] as f32 * opacity + dst[c] as f32 * (1.0 - opacity);
                out[c] = blended.round().clamp(0.0, 255.0) as u8;
            }
            canvas.set_pixel(x as u32, y as u32, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::MeshRecipe;

    const PALETTE: [Rgb; 2] = [[200, 40, 40], [40, 200, 40]];

    #[test]
    fn test_basis_is_orthonormal() {
        for view in [ViewAngle::FRONT, ViewAngle::REAR, ViewAngle::LEFT, ViewAngle::TOP] {
            let basis = view.basis();
            let product = basis * basis.transpose();
            assert!(product.abs_diff_eq(Mat3::IDENTITY, 1e-5), "{view:?}");
        }
    }

    #[test]
    fn test_front_camera_sees_up_as_up() {
        let basis = ViewAngle::FRONT.basis();
        let up = basis * Vec3::Y;
        assert!(up.y > 0.9);
    }

    #[test]
    fn test_top_camera_orientation() {
        // looking down -Y: +Z is screen up, +X screen left, +Y toward the camera
        let basis = ViewAngle::TOP.basis();
        assert!((basis * Vec3::Z).abs_diff_eq(Vec3::Y, 1e-5));
        assert!((basis * Vec3::X).abs_diff_eq(-Vec3::X, 1e-5));
        assert!((basis * Vec3::Y).abs_diff_eq(Vec3::Z, 1e-5));
    }

    #[test]
    fn test_top_view_puts_far_z_at_top() {
        use crate::mesh::BoxPrimitive;

        let mut mesh = Mesh::new();
        mesh.add_box(&BoxPrimitive::new(Vec3::ZERO, Vec3::ONE, Material::Base));
        mesh.add_box(&BoxPrimitive::new(Vec3::new(0.0, 0.0, 2.0), Vec3::ONE, Material::Accent));

        let view = PreviewRenderer::new(120).render(&mesh, &MaterialSet::from_palette(&PALETTE), ViewAngle::TOP);
        let upper = view.get_pixel(60, 31);
        let lower = view.get_pixel(60, 89);
        assert!(upper[1] > upper[0], "accent box should be drawn near the top: {upper:?}");
        assert!(lower[0] > lower[1], "base box should be drawn near the bottom: {lower:?}");
    }

    #[test]
    fn test_views_have_requested_size() {
        let mesh = MeshRecipe::Vehicle.build();
        let views = PreviewRenderer::new(96).render_views(&mesh, &PALETTE);
        for (name, view) in views.named() {
            assert_eq!((view.width, view.height), (96, 96), "{name}");
            assert!(view.pixels().all(|p| p[3] == 255), "{name}");
        }
    }

    #[test]
    fn test_mesh_is_drawn_centered() {
        let mesh = MeshRecipe::Generic.build();
        let view = PreviewRenderer::new(120).render(&mesh, &MaterialSet::from_palette(&PALETTE), ViewAngle::FRONT);
        let center = view.get_pixel(60, 60);
        assert_ne!(center, AXES_BACKGROUND);
        assert_eq!(view.get_pixel(2, 2), FIGURE_BACKGROUND);
        assert_eq!(view.get_pixel(10, 10), AXES_BACKGROUND);
    }

    #[test]
    fn test_empty_mesh_renders_background() {
        let view = PreviewRenderer::new(32).render(&Mesh::new(), &MaterialSet::from_palette(&PALETTE), ViewAngle::TOP);
        assert_eq!(view.get_pixel(16, 16), AXES_BACKGROUND);
    }

    #[test]
    fn test_preview_deterministic() {
        let mesh = MeshRecipe::Humanoid.build();
        let a = PreviewRenderer::default().render_views(&mesh, &PALETTE);
        let b = PreviewRenderer::default().render_views(&mesh, &PALETTE);
        assert_eq!(a.front, b.front);
        assert_eq!(a.top, b.top);
    }
}
