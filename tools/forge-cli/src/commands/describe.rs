//! Describe and list commands

use anyhow::Result;
use clap::Args;
use sprite_gen::api::Forge;
use sprite_gen::interpret;

/// Arguments for the describe command
#[derive(Args)]
pub struct DescribeArgs {
    /// Text prompt
    pub prompt: String,

    /// Print JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn describe(args: DescribeArgs) -> Result<()> {
    let d = interpret(&args.prompt);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&d)?);
    } else {
        println!("Category: {}", d.category);
        println!("Style:    {}", d.style);
        println!("Palette:  {}", d.palette);
        println!("Size:     {}", d.size);
        println!("Seed:     {}", d.seed);
    }
    Ok(())
}

/// Arguments for the list command
#[derive(Args)]
pub struct ListArgs {
    /// Print JSON instead of plain lists
    #[arg(long)]
    pub json: bool,
}

pub fn list(args: ListArgs) -> Result<()> {
    let catalog = Forge::default().catalog();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }
    println!("Palettes:   {}", catalog.palettes.join(", "));
    println!("Categories: {}", catalog.categories.join(", "));
    println!("Styles:     {}", catalog.styles.join(", "));
    Ok(())
}
