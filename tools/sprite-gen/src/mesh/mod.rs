//! Box-assembly meshes
//!
//! Each category maps to a fixed list of axis-aligned boxes. Meshes export to
//! OBJ/MTL text and can be previewed from four fixed cameras.
//!
//! # Example
//! ```no_run
//! use sprite_gen::mesh::*;
//! use sprite_gen::interpret;
//!
//! let descriptor = interpret("ancient oak tree");
//! let mesh = build_mesh(&descriptor);
//! let obj = write_obj(&mesh, &descriptor, "model.mtl");
//! let mtl = MaterialSet::from_palette(descriptor.colors()).to_mtl();
//! ```

mod export;
mod preview;
mod recipes;
mod types;

pub use export::{MaterialSet, write_obj};
pub use preview::{PreviewRenderer, PreviewViews, ViewAngle};
pub use recipes::{MeshRecipe, build_mesh};
pub use types::{BoxPrimitive, Face, Material, Mesh};
