use std::path::PathBuf;

use thiserror::Error;

use crate::model::buffer::ColorBuffer;
use crate::pipeline::stage3_accumulate::Group;

#[derive(Debug, Error)]
pub enum CamoError {
    #[error(
        "buffer shape mismatch: general is {general_width}x{general_height}, target is {target_width}x{target_height}"
    )]
    ShapeMismatch {
        general_width: u32,
        general_height: u32,
        target_width: u32,
        target_height: u32,
    },

    #[error("no {group} pixels to rate; camouflage is undetermined")]
    EmptyGroup { group: Group },

    #[error("invalid setting {name}={value} (expected {min}..={max})")]
    InvalidSetting {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("crop {x},{y} {width}x{height} exceeds buffer {buffer_width}x{buffer_height}")]
    CropOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        buffer_width: u32,
        buffer_height: u32,
    },

    #[error("invalid buffer: {0}")]
    InvalidBuffer(String),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image error at {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CamoError {
    pub fn shape_mismatch(general: &ColorBuffer, target: &ColorBuffer) -> Self {
        CamoError::ShapeMismatch {
            general_width: general.width(),
            general_height: general.height(),
            target_width: target.width(),
            target_height: target.height(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CamoError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        CamoError::Image {
            path: path.into(),
            source,
        }
    }

    /// True for the empty-group outcome, which callers usually report rather than abort on.
    pub fn is_undetermined(&self) -> bool {
        matches!(self, CamoError::EmptyGroup { .. })
    }
}
