use std::cell::RefCell;

use super::*;
use crate::model::color::{PixelSample, SENTINEL};

fn buf(pixels: Vec<PixelSample>) -> ColorBuffer {
    ColorBuffer::from_samples(pixels)
}

#[derive(Default)]
struct Recorder {
    events: RefCell<Vec<String>>,
}

impl RatingObserver for Recorder {
    fn on_groups(&self, acc: &Accumulated) {
        self.events.borrow_mut().push(format!(
            "groups bg={} tg={}",
            acc.background.count, acc.target.count
        ));
    }

    fn on_rating(&self, rating: &CamoRating) {
        self.events
            .borrow_mut()
            .push(format!("rating {}", rating.label));
    }

    fn on_undetermined(&self, group: Group) {
        self.events.borrow_mut().push(format!("empty {group}"));
    }
}

#[test]
fn test_single_target_pixel_scenario() {
    let general = buf(vec![
        PixelSample::rgb(1.0, 1.0, 1.0),
        PixelSample::rgb(1.0, 1.0, 1.0),
        PixelSample::rgb(1.0, 1.0, 1.0),
        PixelSample::rgb(0.0, 0.0, 0.0),
    ]);
    let target = buf(vec![
        SENTINEL,
        SENTINEL,
        SENTINEL,
        PixelSample::rgba(1.0, 1.0, 1.0, 1.0),
    ]);
    let out = rate(&general, &target, RatingMode::Luminance).unwrap();
    assert!((out.rating - 0.25).abs() < 1e-5);
    assert_eq!(out.label, CamoQuality::Mediocre);
}

#[test]
fn test_all_sentinel_target_is_undetermined() {
    let general = buf(vec![PixelSample::rgb(0.5, 0.5, 0.5); 4]);
    let target = buf(vec![SENTINEL; 4]);
    let err = rate(&general, &target, RatingMode::Luminance).unwrap_err();
    assert!(matches!(
        err,
        CamoError::EmptyGroup {
            group: Group::Target
        }
    ));
    assert!(err.is_undetermined());
}

#[test]
fn test_identical_buffers_hsv_undetermined() {
    let px = PixelSample::rgb(0.7, 0.2, 0.4);
    let err = rate(&buf(vec![px; 5]), &buf(vec![px; 5]), RatingMode::Hsv).unwrap_err();
    assert!(matches!(
        err,
        CamoError::EmptyGroup {
            group: Group::Background
        }
    ));
}

#[test]
fn test_shape_mismatch_propagates() {
    let err = rate(
        &buf(vec![PixelSample::grey(0.1); 2]),
        &buf(vec![PixelSample::grey(0.1); 3]),
        RatingMode::Luminance,
    )
    .unwrap_err();
    assert!(matches!(err, CamoError::ShapeMismatch { .. }));
}

#[test]
fn test_luminance_rating_symmetric() {
    // both pixels are target pixels in both orderings, so the groups swap means
    let a = buf(vec![PixelSample::grey(0.9), PixelSample::grey(0.7)]);
    let b = buf(vec![PixelSample::grey(0.2), PixelSample::grey(0.4)]);
    let ab = rate(&a, &b, RatingMode::Luminance).unwrap();
    let ba = rate(&b, &a, RatingMode::Luminance).unwrap();
    assert!((ab.rating - ba.rating).abs() < 1e-6);
    assert!((ab.rating - 0.5).abs() < 1e-5);
}

#[test]
fn test_luminance_rating_bounded() {
    let general = buf(vec![PixelSample::rgb(1.0, 1.0, 1.0); 3]);
    let target = buf(vec![PixelSample::rgba(0.0, 0.0, 0.0, 0.0); 3]);
    let out = rate(&general, &target, RatingMode::Luminance).unwrap();
    assert!(out.rating >= 0.0);
    assert!(out.rating <= 1.0 + 1e-6);
    assert_eq!(out.label, CamoQuality::Poor);
}

#[test]
fn test_hsv_rating_averages_channel_deltas() {
    let red = PixelSample::rgb(1.0, 0.0, 0.0);
    let dark_red = PixelSample::rgb(0.5, 0.0, 0.0);
    let general = buf(vec![red, dark_red]);
    let target = buf(vec![SENTINEL, red]);
    // background: pixel 0 (red) and pixel 1 (dark red vs red differs)
    // bg mean hsv = (0, 1, 0.75); target = (0, 1, 1)
    let out = rate(&general, &target, RatingMode::Hsv).unwrap();
    assert!((out.rating - 0.25 / 3.0).abs() < 1e-5);
    assert_eq!(out.label, CamoQuality::Excellent);
}

#[test]
fn test_well_hidden_target_is_excellent() {
    let general = buf(vec![PixelSample::grey(0.5); 8]);
    let mut target = vec![SENTINEL; 8];
    target[3] = PixelSample::grey(0.52);
    let out = rate(&general, &buf(target), RatingMode::Luminance).unwrap();
    assert_eq!(out.label, CamoQuality::Excellent);
}

#[test]
fn test_detection_threshold_inclusive() {
    let s = Sensitivity::new(0.3).unwrap();
    assert!(is_detected(0.3, s));
    assert!(is_detected(0.8, s));
    assert!(!is_detected(0.29, s));
}

#[test]
fn test_observer_sees_groups_and_rating() {
    let recorder = Recorder::default();
    let general = buf(vec![PixelSample::grey(0.6); 2]);
    let target = buf(vec![SENTINEL, PixelSample::grey(0.6)]);
    rate_observed(&general, &target, RatingMode::Luminance, &recorder).unwrap();
    let events = recorder.events.borrow();
    assert_eq!(events.as_slice(), ["groups bg=2 tg=1", "rating Excellent"]);
}

#[test]
fn test_observer_sees_undetermined() {
    let recorder = Recorder::default();
    let general = buf(vec![PixelSample::grey(0.6); 2]);
    let target = buf(vec![SENTINEL; 2]);
    assert!(rate_observed(&general, &target, RatingMode::Luminance, &recorder).is_err());
    let events = recorder.events.borrow();
    assert_eq!(events.last().map(String::as_str), Some("empty target"));
}
