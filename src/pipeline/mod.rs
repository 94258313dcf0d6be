pub mod stage1_viewport;
pub mod stage2_classify;
pub mod stage3_accumulate;
pub mod stage4_rate;
pub mod stage5_preview;

use crate::error::CamoError;
use crate::input::FramePair;
use crate::model::buffer::{ColorBuffer, CropRect};
use crate::model::config::RatingConfig;
use crate::observe::RatingObserver;
use stage1_viewport::{crop_rect, in_view};
use stage3_accumulate::Group;
use stage4_rate::{CamoRating, is_detected, rate_observed};

#[derive(Debug, Clone)]
pub enum FrameOutcome {
    /// Target not inside the viewport; nothing was sampled.
    OutOfView,
    Undetermined { group: Group },
    Rated { rating: CamoRating, detected: bool },
}

#[derive(Debug, Clone)]
pub struct FrameEvaluation {
    pub crop: Option<CropRect>,
    pub outcome: FrameOutcome,
    /// Cropped buffers that were rated, kept for preview rendering.
    pub sampled: Option<(ColorBuffer, ColorBuffer)>,
}

impl FrameEvaluation {
    fn out_of_view() -> Self {
        Self {
            crop: None,
            outcome: FrameOutcome::OutOfView,
            sampled: None,
        }
    }

    pub fn rating(&self) -> Option<&CamoRating> {
        match &self.outcome {
            FrameOutcome::Rated { rating, .. } => Some(rating),
            _ => None,
        }
    }

    pub fn detected(&self) -> bool {
        matches!(self.outcome, FrameOutcome::Rated { detected: true, .. })
    }
}

pub fn evaluate_frame(
    pair: &FramePair,
    config: &RatingConfig,
    observer: &dyn RatingObserver,
) -> Result<FrameEvaluation, CamoError> {
    let (general, target) = (&pair.general, &pair.target);
    if general.width() != target.width() || general.height() != target.height() {
        return Err(CamoError::shape_mismatch(general, target));
    }

    let rect = match pair.viewport {
        Some(point) => {
            if !in_view(point) {
                tracing::info!(x = point.x, y = point.y, "target outside the view");
                return Ok(FrameEvaluation::out_of_view());
            }
            match crop_rect(point, general.width(), general.height(), &config.crop) {
                Some(rect) => rect,
                None => return Ok(FrameEvaluation::out_of_view()),
            }
        }
        None => CropRect::full(general.width(), general.height()),
    };
    tracing::debug!(
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "crop rectangle"
    );

    let general = general.crop(rect)?;
    let target = target.crop(rect)?;

    let outcome = match rate_observed(&general, &target, config.mode, observer) {
        Ok(rating) => FrameOutcome::Rated {
            detected: is_detected(rating.rating, config.sensitivity),
            rating,
        },
        Err(CamoError::EmptyGroup { group }) => FrameOutcome::Undetermined { group },
        Err(err) => return Err(err),
    };

    Ok(FrameEvaluation {
        crop: Some(rect),
        outcome,
        sampled: Some((general, target)),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
