use std::path::{Path, PathBuf};

pub mod manifest;

use crate::error::CamoError;
use crate::model::buffer::ColorBuffer;
use crate::model::color::PixelSample;
use crate::pipeline::stage1_viewport::ViewportPoint;

/// One sampling event: the full render, the target-only render, and where
/// the target projects in the viewport (if known).
#[derive(Debug, Clone)]
pub struct FramePair {
    pub general: ColorBuffer,
    pub target: ColorBuffer,
    pub viewport: Option<ViewportPoint>,
}

/// Supplies render pairs; the host engine or a file loader sits behind it.
pub trait FrameSource {
    fn frames(&mut self) -> Result<FramePair, CamoError>;
}

#[derive(Debug, Clone)]
pub struct PngPairSource {
    pub general_path: PathBuf,
    pub target_path: PathBuf,
    pub viewport: Option<ViewportPoint>,
}

impl PngPairSource {
    pub fn new(general_path: PathBuf, target_path: PathBuf) -> Self {
        Self {
            general_path,
            target_path,
            viewport: None,
        }
    }

    pub fn with_viewport(mut self, viewport: Option<ViewportPoint>) -> Self {
        self.viewport = viewport;
        self
    }
}

impl FrameSource for PngPairSource {
    fn frames(&mut self) -> Result<FramePair, CamoError> {
        let general = load_buffer(&self.general_path)?;
        let target = load_buffer(&self.target_path)?;
        tracing::info!(
            general = %self.general_path.display(),
            target = %self.target_path.display(),
            width = general.width(),
            height = general.height(),
            "loaded render pair"
        );
        Ok(FramePair {
            general,
            target,
            viewport: self.viewport,
        })
    }
}

/// Decodes to opaque RGB; alpha in the file is dropped, so every sample has `a = 1`.
pub fn load_buffer(path: &Path) -> Result<ColorBuffer, CamoError> {
    let img = image::open(path)
        .map_err(|e| CamoError::image(path, e))?
        .to_rgb8();
    let (width, height) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| PixelSample::from_rgb8(p.0))
        .collect::<Vec<_>>();
    ColorBuffer::new(width, height, pixels)
}

pub fn save_buffer(buffer: &ColorBuffer, path: &Path) -> Result<(), CamoError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CamoError::io(parent, e))?;
        }
    }
    let img = image::RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba8())
        .ok_or_else(|| CamoError::InvalidBuffer("pixel data does not fit dimensions".to_string()))?;
    img.save(path).map_err(|e| CamoError::image(path, e))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
