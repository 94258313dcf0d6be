use crate::error::CamoError;
use crate::model::buffer::ColorBuffer;
use crate::model::color::{PixelSample, hsv_to_rgb};
use crate::model::config::RatingMode;
use crate::pipeline::stage2_classify::classify;
use crate::pipeline::stage3_accumulate::{AggregateStats, Group};
use crate::pipeline::stage4_rate::CamoRating;

/// Background pixels painted with the background average, target pixels
/// with the target average.
pub fn averaged_preview(
    general: &ColorBuffer,
    target: &ColorBuffer,
    rating: &CamoRating,
) -> Result<ColorBuffer, CamoError> {
    let mode = rating.stats.mode;
    let background = average_color(&rating.stats.background, mode, Group::Background)?;
    let target_color = average_color(&rating.stats.target, mode, Group::Target)?;

    let pixels = classify(general, target)?
        .map(|px| if px.is_target { target_color } else { background })
        .collect();
    ColorBuffer::new(general.width(), general.height(), pixels)
}

pub fn average_color(
    stats: &AggregateStats,
    mode: RatingMode,
    group: Group,
) -> Result<PixelSample, CamoError> {
    let color = match mode {
        RatingMode::Luminance => stats.mean_luminance().map(PixelSample::grey),
        RatingMode::Hsv => stats.mean_hsv().map(hsv_to_rgb),
    };
    color.ok_or(CamoError::EmptyGroup { group })
}
