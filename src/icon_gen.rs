use crate::{ico::build_ico, png::build_png};
use anyhow::{anyhow, Context, Result};
use clap::Parser;
use image::Rgba;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

pub const DEFAULT_OUTPUT_DIR: &str = "src-tauri/icons";

/// #3B82F6
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([59, 130, 246, 255]);

#[derive(Debug, Parser)]
#[clap(
    name = "placeholder-icons",
    about = "Generate solid-color placeholder app icons (PNG and ICO)"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Fill color (CSS color format). Defaults to #3B82F6.
    #[clap(long, value_name = "COLOR")]
    pub color: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Png,
    Ico,
}

/// One generated file: its name inside the output directory and pixel size.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub filename: &'static str,
    pub size: u32,
    pub kind: IconKind,
}

pub const ICONS: [IconSpec; 4] = [
    IconSpec {
        filename: "icon.png",
        size: 512,
        kind: IconKind::Png,
    },
    IconSpec {
        filename: "32x32.png",
        size: 32,
        kind: IconKind::Png,
    },
    IconSpec {
        filename: "128x128.png",
        size: 128,
        kind: IconKind::Png,
    },
    IconSpec {
        filename: "icon.ico",
        size: 256,
        kind: IconKind::Ico,
    },
];

pub fn generate_icons(args: Args) -> Result<()> {
    let color = match &args.color {
        Some(color) => parse_color(color)?,
        None => DEFAULT_COLOR,
    };

    // Ensure the output directory exists
    create_dir_all(&args.output).context("Can't create output directory")?;

    for icon in &ICONS {
        match icon.kind {
            IconKind::Png => generate_png(icon, color, &args.output)?,
            IconKind::Ico => generate_ico(icon, color, &args.output)?,
        }
    }

    Ok(())
}

/// Parse a CSS color into RGBA, e.g. `#3b82f6`, `rgb(59 130 246)` or `teal`.
pub fn parse_color(color: &str) -> Result<Rgba<u8>> {
    let srgb =
        css_color::Srgb::from_str(color).map_err(|_| anyhow!("Invalid color: {}", color))?;

    Ok(Rgba([
        channel(srgb.red),
        channel(srgb.green),
        channel(srgb.blue),
        channel(srgb.alpha),
    ]))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.).round() as u8
}

fn generate_png(icon: &IconSpec, color: Rgba<u8>, out_dir: &Path) -> Result<()> {
    println!("Generating {}...", icon.filename);
    let png = build_png(icon.size, icon.size, color)?;
    write_file(&out_dir.join(icon.filename), &png)?;
    println!("✓ Generated {}", icon.filename);
    Ok(())
}

fn generate_ico(icon: &IconSpec, color: Rgba<u8>, out_dir: &Path) -> Result<()> {
    println!("Generating {}...", icon.filename);
    let png = build_png(icon.size, icon.size, color)?;
    let ico = build_ico(&png)?;
    write_file(&out_dir.join(icon.filename), &ico)?;
    println!("✓ Generated {}", icon.filename);
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    out_file
        .write_all(bytes)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}
