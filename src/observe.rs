use crate::pipeline::stage3_accumulate::{Accumulated, Group};
use crate::pipeline::stage4_rate::CamoRating;

/// Hooks the rating boundary reports into. All methods default to no-ops.
pub trait RatingObserver {
    fn on_groups(&self, _acc: &Accumulated) {}

    fn on_rating(&self, _rating: &CamoRating) {}

    fn on_undetermined(&self, _group: Group) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl RatingObserver for NullObserver {}

/// Forwards rating internals to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RatingObserver for TracingObserver {
    fn on_groups(&self, acc: &Accumulated) {
        tracing::debug!(
            mode = acc.mode.as_str(),
            background_count = acc.background.count,
            target_count = acc.target.count,
            "accumulated pixel groups"
        );
    }

    fn on_rating(&self, rating: &CamoRating) {
        tracing::debug!(
            rating = rating.rating,
            label = rating.label.as_str(),
            "camouflage rated"
        );
    }

    fn on_undetermined(&self, group: Group) {
        tracing::debug!(%group, "empty pixel group, rating undetermined");
    }
}
