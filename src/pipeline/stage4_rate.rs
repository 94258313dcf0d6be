use crate::error::CamoError;
use crate::model::buffer::ColorBuffer;
use crate::model::config::{RatingMode, Sensitivity};
use crate::model::quality::CamoQuality;
use crate::observe::{NullObserver, RatingObserver};
use crate::pipeline::stage2_classify::classify;
use crate::pipeline::stage3_accumulate::{Accumulated, Group, accumulate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CamoRating {
    pub rating: f32,
    pub label: CamoQuality,
    pub stats: Accumulated,
}

pub fn rate(
    general: &ColorBuffer,
    target: &ColorBuffer,
    mode: RatingMode,
) -> Result<CamoRating, CamoError> {
    rate_observed(general, target, mode, &NullObserver)
}

pub fn rate_observed(
    general: &ColorBuffer,
    target: &ColorBuffer,
    mode: RatingMode,
    observer: &dyn RatingObserver,
) -> Result<CamoRating, CamoError> {
    let acc = accumulate(classify(general, target)?, mode);
    observer.on_groups(&acc);
    match rate_accumulated(&acc) {
        Ok(rating) => {
            observer.on_rating(&rating);
            Ok(rating)
        }
        Err(err) => {
            if let CamoError::EmptyGroup { group } = err {
                observer.on_undetermined(group);
            }
            Err(err)
        }
    }
}

pub fn rate_accumulated(acc: &Accumulated) -> Result<CamoRating, CamoError> {
    if let Some(group) = acc.empty_group() {
        return Err(CamoError::EmptyGroup { group });
    }
    let rating = match acc.mode {
        RatingMode::Luminance => {
            let bg = mean_or_empty(acc.background.mean_luminance(), Group::Background)?;
            let tg = mean_or_empty(acc.target.mean_luminance(), Group::Target)?;
            (bg - tg).abs()
        }
        RatingMode::Hsv => {
            let bg = mean_or_empty(acc.background.mean_hsv(), Group::Background)?;
            let tg = mean_or_empty(acc.target.mean_hsv(), Group::Target)?;
            // hue compared linearly in turns, not around the circle
            ((bg.h - tg.h).abs() + (bg.s - tg.s).abs() + (bg.v - tg.v).abs()) / 3.0
        }
    };
    Ok(CamoRating {
        rating,
        label: CamoQuality::from_rating(rating),
        stats: *acc,
    })
}

/// Detection fires once the rating reaches the sensitivity threshold.
pub fn is_detected(rating: f32, sensitivity: Sensitivity) -> bool {
    rating >= sensitivity.value()
}

fn mean_or_empty<T>(mean: Option<T>, group: Group) -> Result<T, CamoError> {
    mean.ok_or(CamoError::EmptyGroup { group })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rate.rs"]
mod tests;
