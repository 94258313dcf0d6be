use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CamoError;

pub const SENSITIVITY_MIN: f32 = 0.01;
pub const SENSITIVITY_MAX: f32 = 0.9;
pub const BOUNDS_MIN: f32 = 0.01;
pub const BOUNDS_MAX: f32 = 0.5;
pub const MARGIN_MIN: f32 = 0.01;
pub const MARGIN_MAX: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingMode {
    #[default]
    Luminance,
    Hsv,
}

impl RatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingMode::Luminance => "luminance",
            RatingMode::Hsv => "hsv",
        }
    }
}

/// Detection threshold compared against a rating by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Sensitivity(f32);

impl Sensitivity {
    pub fn new(value: f32) -> Result<Self, CamoError> {
        check_range("sensitivity", value, SENSITIVITY_MIN, SENSITIVITY_MAX)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(0.3)
    }
}

impl TryFrom<f32> for Sensitivity {
    type Error = CamoError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Sensitivity::new(value)
    }
}

impl From<Sensitivity> for f32 {
    fn from(value: Sensitivity) -> Self {
        value.0
    }
}

/// How much of the render around the target gets rated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropSettings {
    /// Half extent of the crop as a fraction of the render width.
    pub bounds: f32,
    pub margin: f32,
    pub complete_view: bool,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            bounds: 0.2,
            margin: 0.05,
            complete_view: false,
        }
    }
}

impl CropSettings {
    pub fn validate(&self) -> Result<(), CamoError> {
        check_range("bounds", self.bounds, BOUNDS_MIN, BOUNDS_MAX)?;
        check_range("margin", self.margin, MARGIN_MIN, MARGIN_MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub mode: RatingMode,
    pub sensitivity: Sensitivity,
    pub crop: CropSettings,
}

impl RatingConfig {
    pub fn load(path: &Path) -> Result<Self, CamoError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CamoError::io(path, e))?;
        let config: RatingConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CamoError> {
        Sensitivity::new(self.sensitivity.value())?;
        self.crop.validate()
    }
}

fn check_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), CamoError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(CamoError::InvalidSetting {
            name,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/config.rs"]
mod tests;
