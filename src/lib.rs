pub mod camo;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod observe;
pub mod pipeline;
pub mod report;

pub use error::CamoError;
pub use model::buffer::{ColorBuffer, CropRect};
pub use model::color::{PixelSample, SENTINEL};
pub use model::config::{RatingConfig, RatingMode, Sensitivity};
pub use model::quality::CamoQuality;
pub use pipeline::stage2_classify::classify;
pub use pipeline::stage4_rate::{CamoRating, is_detected, rate, rate_observed};
