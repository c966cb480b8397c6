//! Tilemap, animation strip and atlas commands

use anyhow::{Context, Result};
use clap::Args;
use sprite_gen::compose::AtlasPacker;
use sprite_gen::sprite::SpriteRenderer;
use sprite_gen::texture::PngColor;
use sprite_gen::{GenerationOptions, interpret};
use std::path::PathBuf;

use crate::output::{ensure_dir, file_stem, save_png, save_text};

/// Arguments for the tilemap command
#[derive(Args)]
pub struct TilemapArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Tile columns (overrides config)
    #[arg(long)]
    pub cols: Option<u32>,

    /// Tile rows (overrides config)
    #[arg(long)]
    pub rows: Option<u32>,

    /// Tile edge length in pixels (overrides config)
    #[arg(long)]
    pub tile_size: Option<u32>,
}

pub fn tilemap(args: TilemapArgs, options: &GenerationOptions) -> Result<()> {
    let composer = options.tilemap_composer_with(args.cols, args.rows, args.tile_size)?;

    let sheet = composer.compose(&interpret(&args.prompt))?;
    ensure_dir(&args.output)?;
    save_png(
        &args.output,
        &format!("{}_tilemap.png", file_stem(&args.prompt)),
        &sheet,
        PngColor::Rgba,
    )?;
    Ok(())
}

/// Arguments for the animation command
#[derive(Args)]
pub struct AnimationArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Frame count (overrides config)
    #[arg(short, long)]
    pub frames: Option<u32>,
}

pub fn animation(args: AnimationArgs, options: &GenerationOptions) -> Result<()> {
    let composer = options.animation_composer_with(args.frames)?;

    let descriptor = interpret(&args.prompt);
    let strip = composer.compose(&descriptor)?;
    ensure_dir(&args.output)?;
    save_png(
        &args.output,
        &format!("{}_animation.png", file_stem(&args.prompt)),
        &strip,
        PngColor::Rgba,
    )?;

    let frame = composer.frame_size(&descriptor);
    println!("{} frames of {}x{}", composer.frames, frame, frame);
    Ok(())
}

/// Arguments for the atlas command
#[derive(Args)]
pub struct AtlasArgs {
    /// Prompts to render and pack
    #[arg(required = true)]
    pub prompts: Vec<String>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Base name for the atlas image and metadata
    #[arg(short, long, default_value = "atlas")]
    pub name: String,
}

pub fn atlas(args: AtlasArgs, options: &GenerationOptions) -> Result<()> {
    let limit = options.limits.atlas_items;
    if args.prompts.len() > limit {
        tracing::warn!("Only the first {} of {} prompts will be packed", limit, args.prompts.len());
    }

    let items: Vec<_> = args
        .prompts
        .iter()
        .take(limit)
        .map(|prompt| {
            let sprite = SpriteRenderer::new(&interpret(prompt)).render();
            (prompt.clone(), sprite)
        })
        .collect();
    let atlas = AtlasPacker::default().pack(&items);

    ensure_dir(&args.output)?;
    save_png(&args.output, &format!("{}.png", args.name), &atlas.image, PngColor::Rgba)?;
    let metadata = serde_json::to_string_pretty(&atlas.metadata()?).context("Failed to serialize atlas metadata")?;
    save_text(&args.output, &format!("{}.json", args.name), &metadata)?;
    Ok(())
}
