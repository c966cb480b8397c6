//! Output file helpers

use anyhow::{Context, Result};
use sprite_gen::texture::{PngColor, TextureBuffer, write_png};
use std::path::{Path, PathBuf};

/// Create `dir` (and parents) if missing
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))
}

/// Write a PNG into `dir` and report it
pub fn save_png(dir: &Path, name: &str, texture: &TextureBuffer, color: PngColor) -> Result<PathBuf> {
    let path = dir.join(name);
    write_png(texture, color, &path).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} ({}x{})", path.display(), texture.width, texture.height);
    Ok(path)
}

/// Write a text file into `dir` and report it
pub fn save_text(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {}", path.display());
    Ok(path)
}

/// Filename stem derived from a prompt: lowercase alphanumerics joined by
/// underscores, at most 30 characters
pub fn file_stem(prompt: &str) -> String {
    let mut stem = String::new();
    for c in prompt.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('_') {
            stem.push('_');
        }
        if stem.len() >= 30 {
            break;
        }
    }
    let stem = stem.trim_end_matches('_');
    if stem.is_empty() {
        "asset".to_string()
    } else {
        stem.to_string()
    }
}
