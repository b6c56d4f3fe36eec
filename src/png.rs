//! Minimal PNG writer for solid-color images.
//!
//! Produces a signature followed by exactly three chunks: IHDR, a single
//! IDAT holding the zlib stream of every scanline, and IEND. Pixels are
//! always 8-bit truecolor with alpha and scanlines always use filter type 0.

use anyhow::{Context, Result};
use crc32fast::Hasher;
use flate2::{write::ZlibEncoder, Compression};
use image::Rgba;
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;

/// Build a complete PNG of `width` x `height` pixels, all set to `color`.
///
/// Dimensions are not validated. Zero yields a stream no decoder will accept.
pub fn build_png(width: u32, height: u32, color: Rgba<u8>) -> Result<Vec<u8>> {
    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // compression, filter and interlace methods are all 0
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);
    write_chunk(&mut png, b"IHDR", &ihdr);

    let raw = raw_image_data(width, height, color);
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&raw)
        .context("Failed to compress image data")?;
    let compressed = encoder.finish().context("Failed to finish zlib stream")?;
    write_chunk(&mut png, b"IDAT", &compressed);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// The uncompressed IDAT payload: each scanline is a `0` filter byte
/// followed by `width` copies of `color`.
pub fn raw_image_data(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    let mut scanline = Vec::with_capacity(1 + 4 * width as usize);
    scanline.push(0);
    for _ in 0..width {
        scanline.extend_from_slice(&color.0);
    }
    scanline.repeat(height as usize)
}

// length, tag, payload, then CRC-32 over tag and payload
fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], payload: &[u8]) {
    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(payload);

    let mut crc = Hasher::new();
    crc.update(tag);
    crc.update(payload);
    out.extend_from_slice(&crc.finalize().to_be_bytes());
}
