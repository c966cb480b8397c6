//! Fixed box assemblies per category

use super::types::{BoxPrimitive, Material, Mesh};
use crate::prompt::{Category, Descriptor};
use glam::Vec3;

/// Which box assembly a descriptor builds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MeshRecipe {
    Humanoid,
    Vehicle,
    Tree,
    Generic,
}

const fn part(center: [f32; 3], size: [f32; 3], material: Material) -> BoxPrimitive {
    BoxPrimitive::new(
        Vec3::new(center[0], center[1], center[2]),
        Vec3::new(size[0], size[1], size[2]),
        material,
    )
}

const HUMANOID: [BoxPrimitive; 6] = [
    part([0.0, 0.5, 0.0], [0.5, 0.7, 0.3], Material::Base),
    part([0.0, 1.3, 0.0], [0.35, 0.35, 0.35], Material::Accent),
    part([-0.4, 0.5, 0.0], [0.15, 0.6, 0.25], Material::Base),
    part([0.4, 0.5, 0.0], [0.15, 0.6, 0.25], Material::Base),
    part([-0.15, -0.2, 0.0], [0.18, 0.6, 0.25], Material::Base),
    part([0.15, -0.2, 0.0], [0.18, 0.6, 0.25], Material::Base),
];

const VEHICLE: [BoxPrimitive; 6] = [
    part([0.0, 0.2, 0.0], [1.8, 0.4, 0.9], Material::Base),
    part([0.0, 0.6, 0.05], [1.0, 0.4, 0.75], Material::Accent),
    // wheels
    part([-0.7, -0.05, -0.5], [0.15, 0.3, 0.3], Material::Base),
    part([0.7, -0.05, -0.5], [0.15, 0.3, 0.3], Material::Base),
    part([-0.7, -0.05, 0.5], [0.15, 0.3, 0.3], Material::Base),
    part([0.7, -0.05, 0.5], [0.15, 0.3, 0.3], Material::Base),
];

const TREE: [BoxPrimitive; 4] = [
    part([0.0, 0.5, 0.0], [0.2, 1.0, 0.2], Material::Base),
    part([0.0, 1.4, 0.0], [0.9, 0.5, 0.9], Material::Accent),
    part([0.0, 1.9, 0.0], [0.65, 0.4, 0.65], Material::Accent),
    part([0.0, 2.3, 0.0], [0.4, 0.35, 0.4], Material::Accent),
];

const GENERIC: [BoxPrimitive; 2] = [
    part([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], Material::Base),
    part([0.0, 0.0, 0.0], [0.8, 0.8, 0.8], Material::Accent),
];

impl MeshRecipe {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Character => MeshRecipe::Humanoid,
            Category::Vehicle => MeshRecipe::Vehicle,
            Category::Environment => MeshRecipe::Tree,
            _ => MeshRecipe::Generic,
        }
    }

    /// Title used in the OBJ header
    pub fn title(&self) -> &'static str {
        match self {
            MeshRecipe::Humanoid => "Humanoid",
            MeshRecipe::Vehicle => "Vehicle",
            MeshRecipe::Tree => "Environment",
            MeshRecipe::Generic => "Generic",
        }
    }

    pub fn boxes(&self) -> &'static [BoxPrimitive] {
        match self {
            MeshRecipe::Humanoid => &HUMANOID,
            MeshRecipe::Vehicle => &VEHICLE,
            MeshRecipe::Tree => &TREE,
            MeshRecipe::Generic => &GENERIC,
        }
    }

    pub fn build(&self) -> Mesh {
        let mut mesh = Mesh::new();
        for primitive in self.boxes() {
            mesh.add_box(primitive);
        }
        mesh
    }
}

/// Build the box assembly for a descriptor's category
pub fn build_mesh(descriptor: &Descriptor) -> Mesh {
    let recipe = MeshRecipe::for_category(descriptor.category);
    let mesh = recipe.build();
    tracing::debug!(
        recipe = recipe.title(),
        vertices = mesh.vertex_count(),
        faces = mesh.faces.len(),
        "built mesh"
    );
    mesh
}
