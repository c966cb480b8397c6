//! Sprite atlas packing
//!
//! Items are placed on a square-ish grid of uniform cells sized to the
//! largest item, each rescaled (nearest-neighbor) to fill its cell.

use crate::error::Result;
use crate::texture::{TextureBuffer, resize_nearest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Placement of one item inside the atlas
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasSize {
    pub w: u32,
    pub h: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasMeta {
    pub size: AtlasSize,
    pub format: String,
}

/// Packed atlas image plus frame metadata
#[derive(Clone, Debug)]
pub struct Atlas {
    pub image: TextureBuffer,
    pub frames: BTreeMap<String, FrameRect>,
}

#[derive(Serialize)]
struct AtlasDocument<'a> {
    frames: &'a BTreeMap<String, FrameRect>,
    meta: AtlasMeta,
}

impl Atlas {
    /// Metadata document: `{"frames": {...}, "meta": {...}}`, or `{}` for an empty atlas
    pub fn metadata(&self) -> Result<serde_json::Value> {
        if self.frames.is_empty() {
            return Ok(serde_json::Value::Object(Default::default()));
        }
        let doc = AtlasDocument {
            frames: &self.frames,
            meta: AtlasMeta {
                size: AtlasSize {
                    w: self.image.width,
                    h: self.image.height,
                },
                format: "RGBA8".to_string(),
            },
        };
        Ok(serde_json::to_value(doc)?)
    }
}

/// Grid packer with a fixed padding around each item
#[derive(Clone, Copy, Debug)]
pub struct AtlasPacker {
    pub padding: u32,
    /// Edge length of the placeholder image returned for no items
    pub empty_size: u32,
}

impl Default for AtlasPacker {
    fn default() -> Self {
        Self {
            padding: 2,
            empty_size: 64,
        }
    }
}

impl AtlasPacker {
    /// Pack named images. Later duplicates of a name replace earlier metadata
    /// entries but still occupy their own cell.
    pub fn pack(&self, items: &[(String, TextureBuffer)]) -> Atlas {
        if items.is_empty() {
            return Atlas {
                image: TextureBuffer::new(self.empty_size, self.empty_size),
                frames: BTreeMap::new(),
            };
        }

        let n = items.len() as u32;
        let max_dim = items
            .iter()
            .map(|(_, img)| img.width.max(img.height))
            .max()
            .unwrap_or(0);
        let cols = (n as f64).sqrt().ceil() as u32;
        let rows = n.div_ceil(cols);
        let cell = max_dim + self.padding * 2;

        let mut image = TextureBuffer::new(cols * cell, rows * cell);
        let mut frames = BTreeMap::new();
        for (idx, (name, sprite)) in items.iter().enumerate() {
            let idx = idx as u32;
            let (r, c) = (idx / cols, idx % cols);
            let (x, y) = (c * cell + self.padding, r * cell + self.padding);

            let scaled = resize_nearest(sprite, max_dim, max_dim);
            image.paste(&scaled, x as i32, y as i32);
            frames.insert(
                name.clone(),
                FrameRect {
                    x,
                    y,
                    w: max_dim,
                    h: max_dim,
                },
            );
        }

        tracing::debug!(items = n, cols, rows, cell, "packed atlas");
        Atlas { image, frames }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, size: u32, color: [u8; 4]) -> (String, TextureBuffer) {
        (name.to_string(), TextureBuffer::filled(size, size, color))
    }

    #[test]
    fn test_empty_atlas() {
        let atlas = AtlasPacker::default().pack(&[]);
        assert_eq!((atlas.image.width, atlas.image.height), (64, 64));
        assert!(atlas.image.pixels().all(|p| p == [0, 0, 0, 0]));
        assert_eq!(atlas.metadata().unwrap().to_string(), "{}");
    }

    #[test]
    fn test_grid_layout() {
        let items = vec![
            item("a", 32, [255, 0, 0, 255]),
            item("b", 16, [0, 255, 0, 255]),
            item("c", 32, [0, 0, 255, 255]),
        ];
        let atlas = AtlasPacker::default().pack(&items);

        // 3 items: 2 cols, 2 rows, 36px cells
        assert_eq!((atlas.image.width, atlas.image.height), (72, 72));
        assert_eq!(atlas.frames["a"], FrameRect { x: 2, y: 2, w: 32, h: 32 });
        assert_eq!(atlas.frames["b"], FrameRect { x: 38, y: 2, w: 32, h: 32 });
        assert_eq!(atlas.frames["c"], FrameRect { x: 2, y: 38, w: 32, h: 32 });

        // the smaller item is scaled up to fill its cell
        assert_eq!(atlas.image.get_pixel(38 + 31, 2 + 31), [0, 255, 0, 255]);
        assert_eq!(atlas.image.get_pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(atlas.image.get_pixel(40, 40), [0, 0, 0, 0]);
    }

    #[test]
    fn test_frames_stay_inside_image() {
        let items: Vec<_> = (0..7).map(|i| item(&format!("s{i}"), 8 + i * 4, [9, 9, 9, 255])).collect();
        let atlas = AtlasPacker::default().pack(&items);
        for rect in atlas.frames.values() {
            assert!(rect.x + rect.w <= atlas.image.width);
            assert!(rect.y + rect.h <= atlas.image.height);
        }
    }

    #[test]
    fn test_metadata_document() {
        let atlas = AtlasPacker::default().pack(&[item("gem", 16, [1, 2, 3, 255])]);
        let meta = atlas.metadata().unwrap();
        assert_eq!(meta["frames"]["gem"]["x"], 2);
        assert_eq!(meta["frames"]["gem"]["w"], 16);
        assert_eq!(meta["meta"]["size"]["w"], 20);
        assert_eq!(meta["meta"]["format"], "RGBA8");
    }
}
