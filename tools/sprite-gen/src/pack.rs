//! Asset bundles
//!
//! A bundle is every artifact derived from one prompt, as named blobs ready
//! to be written to disk or handed to an archiver.

use crate::config::GenerationOptions;
use crate::error::Result;
use crate::mesh::{MaterialSet, build_mesh, write_obj};
use crate::prompt::{Descriptor, interpret};
use crate::sprite::SpriteRenderer;
use crate::texture::{PngColor, emissive_map, encode_png, normal_map, roughness_map, upscale};
use std::path::{Path, PathBuf};

/// One named file in a bundle
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BundleFile {
    pub name: String,
    pub bytes: Vec<u8>,
    /// Line used for this file in the README manifest
    pub summary: String,
}

impl BundleFile {
    fn new(name: &str, bytes: Vec<u8>, summary: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            bytes,
            summary: summary.into(),
        }
    }
}

/// Everything generated for one prompt
#[derive(Clone, Debug)]
pub struct AssetBundle {
    pub descriptor: Descriptor,
    pub files: Vec<BundleFile>,
}

impl AssetBundle {
    /// Look up a file by name
    pub fn get(&self, name: &str) -> Option<&BundleFile> {
        self.files.iter().find(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.name.as_str())
    }

    /// Write every file into `dir`, creating it if needed
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.files.len());
        for file in &self.files {
            let path = dir.join(&file.name);
            std::fs::write(&path, &file.bytes)?;
            written.push(path);
        }
        tracing::info!(dir = %dir.display(), files = written.len(), "wrote asset bundle");
        Ok(written)
    }
}

/// Generate the full bundle for a prompt
pub fn build_bundle(prompt: &str, include_3d: bool, options: &GenerationOptions) -> Result<AssetBundle> {
    let descriptor = interpret(prompt);
    let size = descriptor.size;
    let sprite = SpriteRenderer::new(&descriptor).render();

    let factor = options.upscale.factor;
    let tilemap = options.tilemap_composer();
    let animation = options.animation_composer();

    let mut files = vec![
        BundleFile::new(
            "sprite.png",
            encode_png(&sprite, PngColor::Rgba)?,
            format!("Main 2D sprite ({size}x{size})"),
        ),
        BundleFile::new(
            "sprite_4x.png",
            encode_png(&upscale(&sprite, factor)?, PngColor::Rgba)?,
            format!("{factor}x upscaled sprite"),
        ),
        BundleFile::new(
            "normal_map.png",
            encode_png(&normal_map(&sprite), PngColor::Rgb)?,
            "Normal map (for lighting)",
        ),
        BundleFile::new(
            "emissive_map.png",
            encode_png(&emissive_map(&sprite, descriptor.colors()), PngColor::Rgb)?,
            "Emissive/glow map",
        ),
        BundleFile::new(
            "roughness_map.png",
            encode_png(&roughness_map(&sprite), PngColor::Luma)?,
            "PBR roughness map",
        ),
        BundleFile::new(
            "tilemap_sheet.png",
            encode_png(&tilemap.compose(&descriptor)?, PngColor::Rgba)?,
            format!("{}x{} tile sheet", tilemap.cols, tilemap.rows),
        ),
        BundleFile::new(
            "animation_sheet.png",
            encode_png(&animation.compose(&descriptor)?, PngColor::Rgba)?,
            format!("{}-frame animation strip", animation.frames),
        ),
    ];

    if include_3d {
        let mesh = build_mesh(&descriptor);
        files.push(BundleFile::new(
            "model.obj",
            write_obj(&mesh, &descriptor, "model.mtl").into_bytes(),
            "3D mesh (Wavefront OBJ)",
        ));
        files.push(BundleFile::new(
            "model.mtl",
            MaterialSet::from_palette(descriptor.colors()).to_mtl().into_bytes(),
            "Material definitions",
        ));
    }

    let readme = manifest(&descriptor, &files);
    files.push(BundleFile::new("README.md", readme.into_bytes(), "This file"));

    tracing::info!(
        prompt,
        category = %descriptor.category,
        files = files.len(),
        "built asset bundle"
    );
    Ok(AssetBundle { descriptor, files })
}

fn manifest(descriptor: &Descriptor, files: &[BundleFile]) -> String {
    let mut out = format!(
        "# spriteforge Asset Pack\n\
         Prompt: \"{}\"\n\
         Category: {}\n\
         Style: {}\n\
         Palette: {}\n\
         Seed: {}\n\
         \n\
         ## Files\n",
        descriptor.prompt, descriptor.category, descriptor.style, descriptor.palette, descriptor.seed,
    );
    for file in files {
        out.push_str(&format!("- {:<20} {}\n", file.name, file.summary));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_files() {
        let bundle = build_bundle("pixel art warrior character fire palette 64px", true, &GenerationOptions::default())
            .unwrap();
        let names: Vec<&str> = bundle.names().collect();
        assert_eq!(
            names,
            vec![
                "sprite.png",
                "sprite_4x.png",
                "normal_map.png",
                "emissive_map.png",
                "roughness_map.png",
                "tilemap_sheet.png",
                "animation_sheet.png",
                "model.obj",
                "model.mtl",
                "README.md",
            ]
        );
        assert!(bundle.files.iter().all(|f| !f.bytes.is_empty()));
    }

    #[test]
    fn test_bundle_without_model() {
        let bundle = build_bundle("gold coin", false, &GenerationOptions::default()).unwrap();
        assert!(bundle.get("model.obj").is_none());
        assert!(bundle.get("sprite.png").is_some());
    }

    #[test]
    fn test_readme_manifest() {
        let bundle = build_bundle("ice crystal gem", false, &GenerationOptions::default()).unwrap();
        let readme = String::from_utf8(bundle.get("README.md").unwrap().bytes.clone()).unwrap();
        assert!(readme.contains("Prompt: \"ice crystal gem\""));
        assert!(readme.contains("Category: item"));
        assert!(readme.contains(&format!("Seed: {}", bundle.descriptor.seed)));
        assert!(readme.contains("- sprite.png"));
        assert!(readme.contains("4x4 tile sheet"));
        assert!(!readme.contains("model.obj"));
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = build_bundle("stone wall", true, &GenerationOptions::default()).unwrap();
        let written = bundle.write_to_dir(&dir.path().join("out")).unwrap();
        assert_eq!(written.len(), bundle.files.len());
        for path in written {
            assert!(path.exists());
        }
    }
}
