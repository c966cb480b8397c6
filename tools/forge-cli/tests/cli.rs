//! Integration tests for the forge binary
//!
//! Runs the built binary against a temp directory and checks what it wrote.

use sprite_gen::texture::decode_image;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn forge(args: &[&str]) -> Output {
    let output = Command::new(env!("CARGO_BIN_EXE_forge"))
        .args(args)
        .output()
        .expect("Failed to run forge");
    assert!(
        output.status.success(),
        "forge {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

fn image_size(path: &Path) -> (u32, u32) {
    let bytes = std::fs::read(path).expect("Failed to read image");
    let image = decode_image(&bytes).expect("Failed to decode image");
    (image.width, image.height)
}

#[test]
fn test_sprite_writes_png() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["sprite", "pixel art warrior character 32px", "-o", out, "-n", "hero.png"]);

    assert_eq!(image_size(&dir.path().join("hero.png")), (32, 32));
}

#[test]
fn test_sprite_is_deterministic() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["sprite", "glowing magic gem item", "-o", out, "-n", "a.png"]);
    forge(&["sprite", "glowing magic gem item", "-o", out, "-n", "b.png"]);

    let a = std::fs::read(dir.path().join("a.png")).unwrap();
    let b = std::fs::read(dir.path().join("b.png")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_describe_json() {
    let output = forge(&["describe", "low poly spaceship sci-fi blue 64px", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");

    assert_eq!(value["category"], "vehicle");
    assert_eq!(value["size"], 64);
    assert_eq!(value["prompt"], "low poly spaceship sci-fi blue 64px");
}

#[test]
fn test_list_json() {
    let output = forge(&["list", "--json"]);
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Invalid JSON");

    assert_eq!(value["palettes"].as_array().unwrap().len(), 12);
    assert_eq!(value["palettes"][0], "fire");
}

#[test]
fn test_pack_writes_bundle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pack = dir.path().join("pack");
    forge(&["pack", "oak tree forest", "-o", pack.to_str().unwrap()]);

    for name in [
        "sprite.png",
        "sprite_4x.png",
        "normal_map.png",
        "emissive_map.png",
        "roughness_map.png",
        "tilemap_sheet.png",
        "animation_sheet.png",
        "model.obj",
        "model.mtl",
        "README.md",
    ] {
        assert!(pack.join(name).exists(), "{name} should exist");
    }

    let readme = std::fs::read_to_string(pack.join("README.md")).unwrap();
    assert!(readme.starts_with("# spriteforge Asset Pack"));
}

#[test]
fn test_pack_without_model() {
    let dir = tempdir().expect("Failed to create temp dir");
    let pack = dir.path().join("pack");
    forge(&["pack", "stone floor tile", "-o", pack.to_str().unwrap(), "--no-3d"]);

    assert!(pack.join("sprite.png").exists());
    assert!(!pack.join("model.obj").exists());
    assert!(!pack.join("model.mtl").exists());
}

#[test]
fn test_atlas_metadata() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["atlas", "warrior", "wizard", "archer", "-o", out]);

    let json = std::fs::read_to_string(dir.path().join("atlas.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).expect("Invalid JSON");
    let frames = value["frames"].as_object().unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(value["meta"]["format"], "RGBA8");

    let (w, h) = image_size(&dir.path().join("atlas.png"));
    assert_eq!(value["meta"]["size"]["w"], w);
    assert_eq!(value["meta"]["size"]["h"], h);
}

#[test]
fn test_model_writes_obj_and_previews() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["model", "spaceship", "-o", out]);

    let obj = std::fs::read_to_string(dir.path().join("spaceship.obj")).unwrap();
    assert!(obj.starts_with("# spriteforge OBJ - Vehicle"));
    assert!(obj.contains("mtllib spaceship.mtl"));
    assert!(dir.path().join("spaceship.mtl").exists());
    for view in ["front", "rear", "left", "top"] {
        assert_eq!(image_size(&dir.path().join(format!("spaceship_{view}.png"))), (240, 240));
    }
}

#[test]
fn test_upscale_rejects_large_factor() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["sprite", "gem item 16px", "-o", out, "-n", "gem.png"]);

    let status = Command::new(env!("CARGO_BIN_EXE_forge"))
        .args(["upscale", dir.path().join("gem.png").to_str().unwrap(), "-f", "64"])
        .status()
        .expect("Failed to run forge");
    assert!(!status.success());
}

#[test]
fn test_oversized_tilemap_fails_cleanly() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_forge"))
        .args(["tilemap", "stone", "--cols", "268435456", "-o", dir.path().to_str().unwrap()])
        .output()
        .expect("Failed to run forge");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("cols"));
    assert!(!dir.path().join("stone_tilemap.png").exists());
}

#[test]
fn test_upload_transforms() {
    let dir = tempdir().expect("Failed to create temp dir");
    let out = dir.path().to_str().unwrap();
    forge(&["sprite", "gem item 16px", "-o", out, "-n", "gem.png"]);
    let input = dir.path().join("gem.png");
    let input = input.to_str().unwrap();

    forge(&["upscale", input, "-f", "2"]);
    assert_eq!(image_size(&dir.path().join("gem_2x.png")), (32, 32));

    forge(&["normal-map", input]);
    assert_eq!(image_size(&dir.path().join("gem_normal.png")), (16, 16));

    forge(&["palette-swap", input, "-p", "ice"]);
    assert_eq!(image_size(&dir.path().join("gem_ice.png")), (16, 16));
}

#[test]
fn test_config_overrides_tilemap() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = dir.path().join("forge.toml");
    std::fs::write(&config, "[tilemap]\ncols = 2\nrows = 3\ntile_size = 8\n").unwrap();

    forge(&[
        "--config",
        config.to_str().unwrap(),
        "tilemap",
        "mossy floor",
        "-o",
        dir.path().to_str().unwrap(),
    ]);
    assert_eq!(image_size(&dir.path().join("mossy_floor_tilemap.png")), (16, 24));
}
