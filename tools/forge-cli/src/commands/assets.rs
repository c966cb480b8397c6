//! Sprite, icon, bundle and batch commands

use anyhow::{Context, Result};
use clap::Args;
use sprite_gen::compose::icon_set;
use sprite_gen::pack::build_bundle;
use sprite_gen::sprite::SpriteRenderer;
use sprite_gen::texture::PngColor;
use sprite_gen::{GenerationOptions, interpret};
use std::path::PathBuf;

use crate::output::{ensure_dir, file_stem, save_png};

/// Arguments for the sprite command
#[derive(Args)]
pub struct SpriteArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Output file name (defaults to one derived from the prompt)
    #[arg(short, long)]
    pub name: Option<String>,
}

pub fn sprite(args: SpriteArgs) -> Result<()> {
    let descriptor = interpret(&args.prompt);
    let image = SpriteRenderer::new(&descriptor).render();

    ensure_dir(&args.output)?;
    let name = args
        .name
        .unwrap_or_else(|| format!("{}.png", file_stem(&args.prompt)));
    save_png(&args.output, &name, &image, PngColor::Rgba)?;

    println!(
        "{} / {} / {} / {}px (seed {})",
        descriptor.category, descriptor.style, descriptor.palette, descriptor.size, descriptor.seed
    );
    Ok(())
}

/// Arguments for the icons command
#[derive(Args)]
pub struct IconsArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Icon sizes (defaults to the configured set)
    #[arg(short, long, value_delimiter = ',')]
    pub sizes: Vec<u32>,
}

pub fn icons(args: IconsArgs, options: &GenerationOptions) -> Result<()> {
    let descriptor = interpret(&args.prompt);
    let sizes = if args.sizes.is_empty() {
        options.icon_sizes.clone()
    } else {
        args.sizes
    };

    ensure_dir(&args.output)?;
    let stem = file_stem(&args.prompt);
    for (size, icon) in icon_set(&descriptor, &sizes)? {
        save_png(&args.output, &format!("{stem}_icon_{size}.png"), &icon, PngColor::Rgba)?;
    }
    Ok(())
}

/// Arguments for the pack command
#[derive(Args)]
pub struct PackArgs {
    /// Text prompt
    pub prompt: String,

    /// Output directory (defaults to one derived from the prompt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the OBJ/MTL model
    #[arg(long)]
    pub no_3d: bool,
}

pub fn pack(args: PackArgs, options: &GenerationOptions) -> Result<()> {
    let bundle = build_bundle(&args.prompt, !args.no_3d, options)?;
    let dir = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}_pack", file_stem(&args.prompt))));

    let written = bundle
        .write_to_dir(&dir)
        .with_context(|| format!("Failed to write bundle to {}", dir.display()))?;
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}

/// Arguments for the batch command
#[derive(Args)]
pub struct BatchArgs {
    /// Prompts to render
    pub prompts: Vec<String>,

    /// Read additional prompts from a file, one per line
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

pub fn batch(args: BatchArgs, options: &GenerationOptions) -> Result<()> {
    let mut prompts = args.prompts;
    if let Some(file) = &args.file {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read prompts: {}", file.display()))?;
        prompts.extend(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }
    if prompts.is_empty() {
        anyhow::bail!("No prompts given");
    }

    let limit = options.limits.batch_prompts;
    if prompts.len() > limit {
        tracing::warn!("Only the first {} of {} prompts will be rendered", limit, prompts.len());
        prompts.truncate(limit);
    }

    ensure_dir(&args.output)?;
    let mut failed = 0;
    for (i, prompt) in prompts.iter().enumerate() {
        let descriptor = interpret(prompt);
        let image = SpriteRenderer::new(&descriptor).render();
        let name = format!("{:02}_{}.png", i, file_stem(prompt));
        if let Err(e) = save_png(&args.output, &name, &image, PngColor::Rgba) {
            tracing::error!("{}: {:#}", prompt, e);
            failed += 1;
        }
    }

    println!("Rendered {} of {} prompts", prompts.len() - failed, prompts.len());
    Ok(())
}
