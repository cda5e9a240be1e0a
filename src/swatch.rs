use crate::color::Rgb;
use crate::config::MAX_SWATCH_SIZE;
use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Solid-color square preview of a single RGB value
pub struct Swatch {
    image: RgbaImage,
}

impl Swatch {
    /// `size` is clamped to `1..=MAX_SWATCH_SIZE`
    pub fn solid(color: Rgb, size: u32) -> Self {
        let size = size.clamp(1, MAX_SWATCH_SIZE);
        let image = RgbaImage::from_pixel(size, size, Rgba([color.r, color.g, color.b, 255]));
        Self { image }
    }

    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn rgba_bytes(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Save as PNG, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create swatch directory {}", parent.display()))?;
        }

        self.image
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write swatch {}", path.display()))?;

        Ok(())
    }
}

/// `<dir>/<name>.png`, with the name lower-cased and anything outside
/// `[a-z0-9]` replaced by `_`
pub fn swatch_path(dir: &Path, name: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    dir.join(format!("{}.png", stem))
}
