//! forge - procedural game asset generator
//!
//! Turns short text prompts into sprites, sheets, atlases, derived maps and
//! box meshes. Output is deterministic: the same prompt always writes the
//! same bytes.
//!
//! # Usage
//!
//! ```bash
//! # A single sprite
//! forge sprite "pixel art warrior character fire palette 64px"
//!
//! # Everything for one prompt, written to a directory
//! forge pack "glowing magic gem item" -o gem_pack
//!
//! # Several prompts packed into one atlas
//! forge atlas warrior wizard archer knight -o sheets
//!
//! # Tweak composer defaults
//! forge --config forge.toml tilemap "mossy stone floor"
//! ```

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sprite_gen::GenerationOptions;
use std::path::PathBuf;

use commands::{assets, describe, model, sheets, uploads};

/// forge - procedural game asset generator
#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Deterministic game asset generator driven by text prompts")]
#[command(version)]
struct Cli {
    /// Generation options file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a sprite
    Sprite(assets::SpriteArgs),

    /// Export a box mesh (OBJ + MTL) with preview renders
    Model(model::ModelArgs),

    /// Render a sheet of tile variations
    Tilemap(sheets::TilemapArgs),

    /// Render an animation strip
    Animation(sheets::AnimationArgs),

    /// Pack sprites for several prompts into one atlas
    Atlas(sheets::AtlasArgs),

    /// Render the icon recipe at several sizes
    Icons(assets::IconsArgs),

    /// Write the full asset bundle for a prompt
    Pack(assets::PackArgs),

    /// Render sprites for many prompts
    Batch(assets::BatchArgs),

    /// Derive a normal map from an existing image
    NormalMap(uploads::NormalMapArgs),

    /// Nearest-neighbor upscale an existing image
    Upscale(uploads::UpscaleArgs),

    /// Remap an image's dominant colors onto a named palette
    PaletteSwap(uploads::PaletteSwapArgs),

    /// Print the descriptor a prompt resolves to
    Describe(describe::DescribeArgs),

    /// List known palettes, categories and styles
    List(describe::ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    let options = match &cli.config {
        Some(path) => GenerationOptions::load(path)
            .with_context(|| format!("Failed to load options: {}", path.display()))?,
        None => GenerationOptions::default(),
    };

    match cli.command {
        Commands::Sprite(args) => assets::sprite(args),
        Commands::Model(args) => model::execute(args, &options),
        Commands::Tilemap(args) => sheets::tilemap(args, &options),
        Commands::Animation(args) => sheets::animation(args, &options),
        Commands::Atlas(args) => sheets::atlas(args, &options),
        Commands::Icons(args) => assets::icons(args, &options),
        Commands::Pack(args) => assets::pack(args, &options),
        Commands::Batch(args) => assets::batch(args, &options),
        Commands::NormalMap(args) => uploads::normal_map(args),
        Commands::Upscale(args) => uploads::upscale(args, &options),
        Commands::PaletteSwap(args) => uploads::palette_swap(args, &options),
        Commands::Describe(args) => describe::describe(args),
        Commands::List(args) => describe::list(args),
    }
}
