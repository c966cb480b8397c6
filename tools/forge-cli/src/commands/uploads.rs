//! Commands that transform an existing image file

use anyhow::{Context, Result, bail};
use clap::Args;
use sprite_gen::texture::{
    self, PngColor, TextureBuffer, decode_image, extract_palette, swap_palette, write_png,
};
use sprite_gen::{GenerationOptions, PaletteName};
use std::path::{Path, PathBuf};

fn load(input: &Path) -> Result<TextureBuffer> {
    let bytes = std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    decode_image(&bytes).with_context(|| format!("Failed to decode {}", input.display()))
}

/// `<input stem><suffix>.png` next to the input unless an output is given
fn output_path(input: &Path, output: Option<PathBuf>, suffix: &str) -> PathBuf {
    output.unwrap_or_else(|| {
        let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("image");
        input.with_file_name(format!("{stem}{suffix}.png"))
    })
}

fn save(image: &TextureBuffer, color: PngColor, path: &Path) -> Result<()> {
    write_png(image, color, path).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Wrote {} ({}x{})", path.display(), image.width, image.height);
    Ok(())
}

/// Arguments for the normal-map command
#[derive(Args)]
pub struct NormalMapArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn normal_map(args: NormalMapArgs) -> Result<()> {
    let image = load(&args.input)?;
    let path = output_path(&args.input, args.output, "_normal");
    save(&texture::normal_map(&image), PngColor::Rgb, &path)
}

/// Arguments for the upscale command
#[derive(Args)]
pub struct UpscaleArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Output PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Scale factor (overrides config)
    #[arg(short, long)]
    pub factor: Option<u32>,
}

pub fn upscale(args: UpscaleArgs, options: &GenerationOptions) -> Result<()> {
    let factor = args.factor.unwrap_or(options.upscale.factor);
    if factor > options.upscale.max_factor {
        bail!("Factor {} exceeds the maximum of {}", factor, options.upscale.max_factor);
    }

    let image = load(&args.input)?;
    let scaled = texture::upscale(&image, factor)?;
    let path = output_path(&args.input, args.output, &format!("_{factor}x"));
    save(&scaled, PngColor::Rgba, &path)
}

/// Arguments for the palette-swap command
#[derive(Args)]
pub struct PaletteSwapArgs {
    /// Input image (PNG or JPEG)
    pub input: PathBuf,

    /// Target palette name
    #[arg(short, long, default_value = "fire")]
    pub palette: String,

    /// Output PNG path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn palette_swap(args: PaletteSwapArgs, options: &GenerationOptions) -> Result<()> {
    let target = args.palette.parse::<PaletteName>().unwrap_or_else(|e| {
        let fallback = PaletteName::default();
        tracing::warn!("{}, using {}", e, fallback);
        fallback
    });

    let image = load(&args.input)?;
    let settings = options.palette_swap;
    let old = extract_palette(&image, settings.colors)?;
    let swapped = swap_palette(&image, &old, target.colors(), settings.threshold);

    let path = output_path(&args.input, args.output, &format!("_{target}"));
    save(&swapped, PngColor::Rgba, &path)
}
