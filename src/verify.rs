//! Decode a generated icon set and check it is what the generator promises:
//! every file present, square at its expected size, and one solid color.

use crate::icon_gen::{IconSpec, ICONS};
use anyhow::{bail, Context, Result};
use image::Rgba;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub filename: &'static str,
    pub width: u32,
    pub height: u32,
    pub color: Rgba<u8>,
}

pub fn verify_icons(dir: &Path, expected: Rgba<u8>) -> Result<Vec<IconReport>> {
    ICONS
        .iter()
        .map(|icon| verify_icon(dir, icon, expected))
        .collect()
}

fn verify_icon(dir: &Path, icon: &IconSpec, expected: Rgba<u8>) -> Result<IconReport> {
    let path = dir.join(icon.filename);
    let img = image::open(&path)
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    let (width, height) = (img.width(), img.height());
    if (width, height) != (icon.size, icon.size) {
        bail!(
            "{}: expected {}x{}, found {}x{}",
            icon.filename,
            icon.size,
            icon.size,
            width,
            height
        );
    }

    let rgba_img = img.to_rgba8();
    if let Some((x, y, pixel)) = rgba_img.enumerate_pixels().find(|(_, _, p)| **p != expected) {
        bail!(
            "{}: pixel ({}, {}) is {:?}, expected {:?}",
            icon.filename,
            x,
            y,
            pixel.0,
            expected.0
        );
    }

    Ok(IconReport {
        filename: icon.filename,
        width,
        height,
        color: expected,
    })
}
