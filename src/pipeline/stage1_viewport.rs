use serde::{Deserialize, Serialize};

use crate::model::buffer::CropRect;
use crate::model::config::CropSettings;

/// Projected target position; x/y in [0, 1] with the origin at the bottom-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportPoint {
    pub x: f32,
    pub y: f32,
}

impl ViewportPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Open interval on both axes: a target sitting exactly on the frame edge is not in view.
pub fn in_view(point: ViewportPoint) -> bool {
    point.x > 0.0 && point.x < 1.0 && point.y > 0.0 && point.y < 1.0
}

pub fn crop_rect(
    point: ViewportPoint,
    width: u32,
    height: u32,
    settings: &CropSettings,
) -> Option<CropRect> {
    if settings.complete_view {
        if width == 0 || height == 0 {
            return None;
        }
        return Some(CropRect::full(width, height));
    }

    let w = width as i64;
    let h = height as i64;
    let cx = (point.x * width as f32).floor() as i64;
    // image rows grow downwards
    let cy = h - (point.y * height as f32).floor() as i64;
    let half = ((settings.bounds + settings.margin) * width as f32).floor() as i64;

    let x0 = (cx - half).max(0);
    let y0 = (cy - half).max(0);
    let x1 = (cx + half).min(w);
    let y1 = (cy + half).min(h);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(CropRect {
        x: x0 as u32,
        y: y0 as u32,
        width: (x1 - x0) as u32,
        height: (y1 - y0) as u32,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_viewport.rs"]
mod tests;
