//! Icon sets: the icon recipe rendered at several sizes

use crate::error::{ForgeError, Result};
use crate::prompt::{Category, Descriptor};
use crate::sprite::SpriteRenderer;
use crate::texture::TextureBuffer;

/// Sizes rendered when the caller doesn't pick any
pub const DEFAULT_ICON_SIZES: [u32; 4] = [16, 32, 64, 128];

/// Render the icon recipe (with the descriptor's style) once per size
pub fn icon_set(descriptor: &Descriptor, sizes: &[u32]) -> Result<Vec<(u32, TextureBuffer)>> {
    if sizes.contains(&0) {
        return Err(ForgeError::invalid("icon_sizes", "sizes must be at least 1"));
    }
    let icon = descriptor.with_category(Category::Icon);
    Ok(sizes
        .iter()
        .map(|&size| {
            let sized = icon.with_size(size);
            (size, SpriteRenderer::new(&sized).render())
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::interpret;

    #[test]
    fn test_icon_set_sizes() {
        let d = interpret("gold coin");
        let icons = icon_set(&d, &DEFAULT_ICON_SIZES).unwrap();
        assert_eq!(icons.len(), 4);
        for (size, icon) in &icons {
            assert_eq!((icon.width, icon.height), (*size, *size));
            assert!(icon.pixels().any(|p| p[3] > 0));
        }
    }

    #[test]
    fn test_icon_set_ignores_category() {
        let d = interpret("sword item");
        let icons = icon_set(&d, &[64]).unwrap();
        let star = SpriteRenderer::new(&d.with_category(Category::Icon)).render();
        assert_eq!(icons[0].1, star);
    }

    #[test]
    fn test_icon_set_rejects_zero() {
        assert!(icon_set(&interpret("gem"), &[16, 0]).is_err());
    }
}
