//! Icon rasterizer: background, sixteen rounded cells, PNG out.

use std::{fs, io::Cursor, path::{Path, PathBuf}};

use anyhow::{Context, Result};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, RgbaImage};
use log::{debug, info};

use crate::{
    geometry::GridLayout,
    palette::{color_for_row, BACKGROUND},
    raster::fill_rounded_rect,
};

/// Summary of one written icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub size: u32,
    pub path: PathBuf,
    pub bytes: usize,
    /// blake3 of the encoded PNG, lowercase hex.
    pub digest: String,
}

/// Draw the icon at `size`×`size` pixels.
pub fn render_icon(size: u32) -> RgbaImage {
    let layout = GridLayout::for_size(size);
    debug!(
        "layout size={} padding={:.3} cell={:.3} gap={:.3} radius={}",
        layout.size, layout.padding, layout.cell, layout.gap, layout.radius
    );
    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND);
    for (row, _col, rect) in layout.cells() {
        fill_rounded_rect(&mut canvas, rect.to_pixels(), layout.radius, color_for_row(row));
    }
    canvas
}

pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    PngEncoder::new(&mut out)
        .write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgba8,
        )
        .context("encode png")?;
    Ok(out.into_inner())
}

pub fn icon_digest(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Render and write one icon, overwriting `path`. The parent directory must
/// already exist.
pub fn create_icon(size: u32, path: impl AsRef<Path>) -> Result<IconReport> {
    let path = path.as_ref();
    let canvas = render_icon(size);
    let bytes = encode_png(&canvas).with_context(|| format!("icon {size}px"))?;
    fs::write(path, &bytes).with_context(|| format!("write {:?}", path))?;
    let digest = icon_digest(&bytes);
    info!("wrote {} ({size}x{size}, {} bytes)", path.display(), bytes.len());
    debug!("{} blake3={digest}", path.display());
    Ok(IconReport {
        size,
        path: path.to_path_buf(),
        bytes: bytes.len(),
        digest,
    })
}
