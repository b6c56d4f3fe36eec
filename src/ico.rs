//! Single-image ICO container with an embedded PNG payload.

use anyhow::{Context, Result};

/// Header (6 bytes) plus one directory entry (16 bytes).
pub const ICO_PAYLOAD_OFFSET: u32 = 6 + 16;

/// Wrap `png` in an ICO file holding one 32-bit icon.
///
/// The directory entry always declares 256x256 (the `0` sentinel); the PNG's
/// own dimensions are not inspected.
pub fn build_ico(png: &[u8]) -> Result<Vec<u8>> {
    let size = u32::try_from(png.len()).context("PNG payload too large for an ICO entry")?;

    let mut ico = Vec::with_capacity(ICO_PAYLOAD_OFFSET as usize + png.len());

    // reserved, type (1 = icon), image count
    ico.extend_from_slice(&0u16.to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());
    ico.extend_from_slice(&1u16.to_le_bytes());

    // width, height (0 = 256), color count, reserved
    ico.extend_from_slice(&[0, 0, 0, 0]);
    ico.extend_from_slice(&1u16.to_le_bytes()); // planes
    ico.extend_from_slice(&32u16.to_le_bytes()); // bits per pixel
    ico.extend_from_slice(&size.to_le_bytes());
    ico.extend_from_slice(&ICO_PAYLOAD_OFFSET.to_le_bytes());

    ico.extend_from_slice(png);
    Ok(ico)
}
