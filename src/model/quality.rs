use std::fmt;

use serde::Serialize;

pub const EXCELLENT_BELOW: f32 = 0.10;
pub const GOOD_BELOW: f32 = 0.20;
pub const MEDIOCRE_BELOW: f32 = 0.30;

/// Lower ratings mean the target blends in better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CamoQuality {
    Excellent,
    Good,
    Mediocre,
    Poor,
}

impl CamoQuality {
    pub fn from_rating(rating: f32) -> Self {
        if rating < EXCELLENT_BELOW {
            CamoQuality::Excellent
        } else if rating < GOOD_BELOW {
            CamoQuality::Good
        } else if rating < MEDIOCRE_BELOW {
            CamoQuality::Mediocre
        } else {
            CamoQuality::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CamoQuality::Excellent => "Excellent",
            CamoQuality::Good => "Good",
            CamoQuality::Mediocre => "Mediocre",
            CamoQuality::Poor => "Poor",
        }
    }
}

impl fmt::Display for CamoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
