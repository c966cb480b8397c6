//! Mesh data types

use glam::Vec3;

/// Material tag carried by every face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    /// Palette slot 0
    Base,
    /// Palette slot 1
    Accent,
}

impl Material {
    /// Name used in `usemtl` / `newmtl` lines
    pub fn name(&self) -> &'static str {
        match self {
            Material::Base => "Material_Base",
            Material::Accent => "Material_Accent",
        }
    }

    /// Palette slot supplying this material's color
    pub fn slot(&self) -> usize {
        match self {
            Material::Base => 0,
            Material::Accent => 1,
        }
    }
}

/// Quad face referencing vertices by 1-based position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub indices: [u32; 4],
    pub material: Material,
}

/// Axis-aligned box: center and full edge lengths
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxPrimitive {
    pub center: Vec3,
    pub size: Vec3,
    pub material: Material,
}

impl BoxPrimitive {
    pub const fn new(center: Vec3, size: Vec3, material: Material) -> Self {
        Self {
            center,
            size,
            material,
        }
    }

    /// Corners of the z- face then the z+ face, each wound from (-x, -y) through (+x, -y)
    pub fn corners(&self) -> [Vec3; 8] {
        let h = self.size * 0.5;
        let c = self.center;
        [
            Vec3::new(c.x - h.x, c.y - h.y, c.z - h.z),
            Vec3::new(c.x + h.x, c.y - h.y, c.z - h.z),
            Vec3::new(c.x + h.x, c.y + h.y, c.z - h.z),
            Vec3::new(c.x - h.x, c.y + h.y, c.z - h.z),
            Vec3::new(c.x - h.x, c.y - h.y, c.z + h.z),
            Vec3::new(c.x + h.x, c.y - h.y, c.z + h.z),
            Vec3::new(c.x + h.x, c.y + h.y, c.z + h.z),
            Vec3::new(c.x - h.x, c.y + h.y, c.z + h.z),
        ]
    }
}

/// Quad mesh assembled from boxes
///
/// Vertices are never shared or renumbered: each box appends its own eight
/// corners and six faces, so face indices grow monotonically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<Face>,
    /// Offset into `faces` where each added box starts, ascending
    pub groups: Vec<usize>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a box's 8 vertices and 6 quads
    pub fn add_box(&mut self, primitive: &BoxPrimitive) {
        let b = self.vertices.len() as u32 + 1;
        self.vertices.extend_from_slice(&primitive.corners());
        self.groups.push(self.faces.len());

        let quads = [
            [b, b + 1, b + 2, b + 3],
            [b + 7, b + 6, b + 5, b + 4],
            [b, b + 4, b + 5, b + 1],
            [b + 2, b + 6, b + 7, b + 3],
            [b + 1, b + 5, b + 6, b + 2],
            [b + 3, b + 7, b + 4, b],
        ];
        self.faces.extend(quads.into_iter().map(|indices| Face {
            indices,
            material: primitive.material,
        }));
    }

    /// Append a single face outside of any box group
    pub fn add_face(&mut self, indices: [u32; 4], material: Material) {
        self.faces.push(Face { indices, material });
    }

    /// True if a box group starts at face `index`
    pub fn starts_group(&self, index: usize) -> bool {
        self.groups.binary_search(&index).is_ok()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex referenced by a 1-based face index
    pub fn vertex(&self, index: u32) -> Option<Vec3> {
        index
            .checked_sub(1)
            .and_then(|i| self.vertices.get(i as usize))
            .copied()
    }

    /// Axis-aligned bounds, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), &v| (min.min(v), max.max(v))),
        )
    }
}
