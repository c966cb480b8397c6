//! Wavefront OBJ and MTL text

use super::recipes::MeshRecipe;
use super::types::{Material, Mesh};
use crate::palette::Rgb;
use crate::prompt::Descriptor;

/// Render the mesh as OBJ text.
///
/// Vertices come first, then the faces. A `usemtl` line opens every box
/// group and any run of faces whose material differs from the one before.
/// Face indices are 1-based and written exactly as stored.
pub fn write_obj(mesh: &Mesh, descriptor: &Descriptor, mtllib: &str) -> String {
    let recipe = MeshRecipe::for_category(descriptor.category);
    let mut lines = vec![
        format!("# spriteforge OBJ - {}", recipe.title()),
        format!("# {}", descriptor.prompt),
        format!("mtllib {mtllib}"),
        String::new(),
    ];

    for v in &mesh.vertices {
        lines.push(format!("v {:.4} {:.4} {:.4}", v.x, v.y, v.z));
    }
    lines.push(String::new());

    let mut current = None;
    for (i, face) in mesh.faces.iter().enumerate() {
        if current != Some(face.material) || mesh.starts_group(i) {
            lines.push(format!("usemtl {}", face.material.name()));
            current = Some(face.material);
        }
        let [a, b, c, d] = face.indices;
        lines.push(format!("f {a} {b} {c} {d}"));
    }

    lines.join("\n")
}

/// The two materials every mesh references
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialSet {
    pub base: Rgb,
    pub accent: Rgb,
}

impl MaterialSet {
    /// Base from palette slot 0, accent from slot 1
    pub fn from_palette(palette: &[Rgb]) -> Self {
        let base = palette.first().copied().unwrap_or([255, 255, 255]);
        let accent = palette.get(1).copied().unwrap_or(base);
        Self { base, accent }
    }

    pub fn color(&self, material: Material) -> Rgb {
        match material {
            Material::Base => self.base,
            Material::Accent => self.accent,
        }
    }

    /// Render as MTL text
    pub fn to_mtl(&self) -> String {
        let mut out = String::from("# spriteforge Material File\n");
        out.push_str(&material_block(Material::Base, self.base, 0.5, 32.0));
        out.push('\n');
        out.push_str(&material_block(Material::Accent, self.accent, 0.8, 64.0));
        out
    }
}

fn material_block(material: Material, color: Rgb, specular: f32, shininess: f32) -> String {
    let [r, g, b] = color.map(|c| c as f64 / 255.0);
    format!(
        "newmtl {name}\n\
         Ka {r:.3} {g:.3} {b:.3}\n\
         Kd {r:.3} {g:.3} {b:.3}\n\
         Ks {specular:?} {specular:?} {specular:?}\n\
         Ns {shininess:?}\n\
         d 1.0\n",
        name = material.name(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::build_mesh;
    use crate::palette::PaletteName;
    use crate::prompt::interpret;

    #[test]
    fn test_obj_layout() {
        let d = interpret("oak tree forest");
        let obj = write_obj(&build_mesh(&d), &d, "model.mtl");
        let lines: Vec<&str> = obj.lines().collect();

        assert_eq!(lines[0], "# spriteforge OBJ - Environment");
        assert_eq!(lines[1], "# oak tree forest");
        assert_eq!(lines[2], "mtllib model.mtl");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "v -0.1000 0.0000 -0.1000");
        assert_eq!(lines[4 + 32], "");
        assert_eq!(lines[37], "usemtl Material_Base");
        assert_eq!(lines[38], "f 1 2 3 4");
        assert_eq!(lines[44], "usemtl Material_Accent");
        assert_eq!(obj.lines().filter(|l| l.starts_with("f ")).count(), 24);
        assert!(obj.ends_with("f 28 32 29 25"));
    }

    #[test]
    fn test_obj_materials_follow_faces() {
        use crate::mesh::BoxPrimitive;
        use glam::Vec3;

        let mut mesh = Mesh::new();
        mesh.add_box(&BoxPrimitive::new(Vec3::ZERO, Vec3::ONE, Material::Base));
        mesh.add_face([1, 2, 3, 4], Material::Accent);
        mesh.add_face([5, 6, 7, 8], Material::Accent);
        mesh.add_face([1, 4, 8, 5], Material::Base);
        assert_eq!(mesh.faces.len(), 9);

        let obj = write_obj(&mesh, &interpret("crate"), "model.mtl");
        let body: Vec<&str> = obj.lines().skip_while(|l| !l.starts_with("usemtl")).collect();
        assert_eq!(body.len(), 9 + 3);
        assert_eq!(body[0], "usemtl Material_Base");
        assert_eq!(body[7], "usemtl Material_Accent");
        assert_eq!(body[8], "f 1 2 3 4");
        assert_eq!(body[9], "f 5 6 7 8");
        assert_eq!(body[10], "usemtl Material_Base");
        assert_eq!(body[11], "f 1 4 8 5");
    }

    #[test]
    fn test_obj_new_group_per_box() {
        use crate::mesh::BoxPrimitive;
        use glam::Vec3;

        let mut mesh = Mesh::new();
        mesh.add_box(&BoxPrimitive::new(Vec3::ZERO, Vec3::ONE, Material::Accent));
        mesh.add_box(&BoxPrimitive::new(Vec3::X, Vec3::ONE, Material::Accent));

        let obj = write_obj(&mesh, &interpret("crate"), "model.mtl");
        assert_eq!(obj.lines().filter(|l| *l == "usemtl Material_Accent").count(), 2);
    }

    #[test]
    fn test_mtl_materials() {
        let mtl = MaterialSet::from_palette(PaletteName::Fire.colors()).to_mtl();
        let [r, g, b] = PaletteName::Fire.colors()[0];
        let expected = format!(
            "Kd {:.3} {:.3} {:.3}",
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0
        );

        assert!(mtl.starts_with("# spriteforge Material File\nnewmtl Material_Base\n"));
        assert!(mtl.contains(&expected));
        assert!(mtl.contains("Ks 0.5 0.5 0.5\nNs 32.0\nd 1.0\n\nnewmtl Material_Accent"));
        assert!(mtl.contains("Ks 0.8 0.8 0.8\nNs 64.0"));
    }

    #[test]
    fn test_material_colors() {
        let set = MaterialSet::from_palette(&[[1, 2, 3], [4, 5, 6]]);
        assert_eq!(set.color(Material::Base), [1, 2, 3]);
        assert_eq!(set.color(Material::Accent), [4, 5, 6]);
    }
}
