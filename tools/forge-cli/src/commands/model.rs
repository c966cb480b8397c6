//! Model command - OBJ/MTL export plus preview renders

use anyhow::Result;
use clap::Args;
use sprite_gen::mesh::{MaterialSet, PreviewRenderer, build_mesh, write_obj};
use sprite_gen::texture::PngColor;
use sprite_gen::{GenerationOptions, interpret};
use std::path::PathBuf;

use crate::output::{ensure_dir, file_stem, save_png, save_text};

/// Arguments for the model command
#[derive(Args)]
pub struct ModelArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Skip the preview renders
    #[arg(long)]
    pub no_preview: bool,
}

pub fn execute(args: ModelArgs, options: &GenerationOptions) -> Result<()> {
    let descriptor = interpret(&args.prompt);
    let mesh = build_mesh(&descriptor);
    let stem = file_stem(&args.prompt);
    let mtl_name = format!("{stem}.mtl");

    ensure_dir(&args.output)?;
    save_text(&args.output, &format!("{stem}.obj"), &write_obj(&mesh, &descriptor, &mtl_name))?;
    save_text(
        &args.output,
        &mtl_name,
        &MaterialSet::from_palette(descriptor.colors()).to_mtl(),
    )?;

    if !args.no_preview {
        let views = PreviewRenderer::new(options.preview.size).render_views(&mesh, descriptor.colors());
        for (view, image) in views.named() {
            save_png(&args.output, &format!("{stem}_{view}.png"), image, PngColor::Rgb)?;
        }
    }

    println!("{} vertices, {} faces", mesh.vertex_count(), mesh.faces.len());
    Ok(())
}
