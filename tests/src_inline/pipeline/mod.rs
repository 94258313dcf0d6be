use super::*;
use crate::model::color::{PixelSample, SENTINEL};
use crate::model::config::{RatingMode, Sensitivity};
use crate::model::quality::CamoQuality;
use crate::observe::NullObserver;
use crate::pipeline::stage1_viewport::ViewportPoint;

fn scene(target_value: f32) -> FramePair {
    let general = ColorBuffer::filled(10, 10, PixelSample::grey(0.5));
    let mut mask = vec![SENTINEL; 100];
    mask[4 * 10 + 4] = PixelSample::grey(target_value);
    mask[5 * 10 + 5] = PixelSample::grey(target_value);
    let target = ColorBuffer::new(10, 10, mask).unwrap();
    FramePair {
        general,
        target,
        viewport: Some(ViewportPoint::new(0.5, 0.5)),
    }
}

#[test]
fn test_evaluate_crops_and_detects() {
    let pair = scene(0.9);
    let eval = evaluate_frame(&pair, &RatingConfig::default(), &NullObserver).unwrap();
    assert_eq!(
        eval.crop,
        Some(CropRect {
            x: 3,
            y: 3,
            width: 4,
            height: 4
        })
    );
    let rating = eval.rating().unwrap();
    assert_eq!(rating.stats.background.count, 16);
    assert_eq!(rating.stats.target.count, 2);
    assert!((rating.rating - 0.4).abs() < 1e-5);
    assert_eq!(rating.label, CamoQuality::Poor);
    assert!(eval.detected());
    let (g, t) = eval.sampled.as_ref().unwrap();
    assert_eq!(g.len(), 16);
    assert_eq!(t.len(), 16);
}

#[test]
fn test_evaluate_hidden_target_not_detected() {
    let pair = scene(0.55);
    let eval = evaluate_frame(&pair, &RatingConfig::default(), &NullObserver).unwrap();
    assert!(!eval.detected());
    assert_eq!(eval.rating().unwrap().label, CamoQuality::Excellent);
}

#[test]
fn test_sensitivity_changes_detection() {
    let pair = scene(0.7);
    let mut cfg = RatingConfig::default();
    let eval = evaluate_frame(&pair, &cfg, &NullObserver).unwrap();
    assert!(!eval.detected());
    cfg.sensitivity = Sensitivity::new(0.1).unwrap();
    let eval = evaluate_frame(&pair, &cfg, &NullObserver).unwrap();
    assert!(eval.detected());
}

#[test]
fn test_out_of_view_skips_rating() {
    let mut pair = scene(0.9);
    pair.viewport = Some(ViewportPoint::new(1.2, 0.5));
    let eval = evaluate_frame(&pair, &RatingConfig::default(), &NullObserver).unwrap();
    assert!(matches!(eval.outcome, FrameOutcome::OutOfView));
    assert!(eval.crop.is_none());
    assert!(eval.sampled.is_none());
}

#[test]
fn test_crop_missing_target_is_undetermined() {
    let mut pair = scene(0.9);
    // crop around the top-left corner never reaches the target pixels
    pair.viewport = Some(ViewportPoint::new(0.1, 0.9));
    let eval = evaluate_frame(&pair, &RatingConfig::default(), &NullObserver).unwrap();
    assert!(matches!(
        eval.outcome,
        FrameOutcome::Undetermined {
            group: Group::Target
        }
    ));
}

#[test]
fn test_no_viewport_rates_whole_frame() {
    let mut pair = scene(0.9);
    pair.viewport = None;
    let mut cfg = RatingConfig::default();
    cfg.mode = RatingMode::Hsv;
    let eval = evaluate_frame(&pair, &cfg, &NullObserver).unwrap();
    assert_eq!(eval.crop, Some(CropRect::full(10, 10)));
    assert_eq!(eval.rating().unwrap().stats.target.count, 2);
}

#[test]
fn test_dimension_mismatch() {
    let mut pair = scene(0.9);
    pair.target = ColorBuffer::filled(5, 20, SENTINEL);
    let err = evaluate_frame(&pair, &RatingConfig::default(), &NullObserver).unwrap_err();
    assert!(matches!(
        err,
        CamoError::ShapeMismatch {
            general_width: 10,
            general_height: 10,
            target_width: 5,
            target_height: 20,
        }
    ));
}
