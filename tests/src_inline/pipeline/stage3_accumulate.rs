use super::*;
use crate::model::buffer::ColorBuffer;
use crate::model::color::{PixelSample, SENTINEL};
use crate::pipeline::stage2_classify::classify;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn run(general: Vec<PixelSample>, target: Vec<PixelSample>, mode: RatingMode) -> Accumulated {
    let general = ColorBuffer::from_samples(general);
    let target = ColorBuffer::from_samples(target);
    accumulate(classify(&general, &target).unwrap(), mode)
}

#[test]
fn test_luminance_background_counts_every_pixel() {
    let acc = run(
        vec![
            PixelSample::grey(1.0),
            PixelSample::grey(1.0),
            PixelSample::grey(1.0),
            PixelSample::grey(0.0),
        ],
        vec![SENTINEL, SENTINEL, SENTINEL, PixelSample::grey(1.0)],
        RatingMode::Luminance,
    );
    assert_eq!(acc.background.count, 4);
    assert_eq!(acc.target.count, 1);
    assert!(close(acc.background.mean_luminance().unwrap(), 0.75));
    assert!(close(acc.target.mean_luminance().unwrap(), 1.0));
}

#[test]
fn test_luminance_all_sentinel_target_is_empty() {
    let acc = run(
        vec![PixelSample::grey(0.5); 4],
        vec![SENTINEL; 4],
        RatingMode::Luminance,
    );
    assert_eq!(acc.target.count, 0);
    assert_eq!(acc.target.mean_luminance(), None);
    assert_eq!(acc.empty_group(), Some(Group::Target));
}

#[test]
fn test_hsv_background_only_where_buffers_differ() {
    let red = PixelSample::rgb(1.0, 0.0, 0.0);
    let green = PixelSample::rgb(0.0, 1.0, 0.0);
    let acc = run(
        vec![green, green, red],
        vec![SENTINEL, SENTINEL, red],
        RatingMode::Hsv,
    );
    assert_eq!(acc.background.count, 2);
    assert_eq!(acc.target.count, 1);
    let bg = acc.background.mean_hsv().unwrap();
    assert!(close(bg.h, 1.0 / 3.0));
    assert!(close(bg.s, 1.0));
    let tg = acc.target.mean_hsv().unwrap();
    assert!(close(tg.h, 0.0));
}

#[test]
fn test_hsv_identical_buffers_have_empty_background() {
    let px = PixelSample::rgb(0.3, 0.6, 0.2);
    let acc = run(vec![px; 3], vec![px; 3], RatingMode::Hsv);
    assert_eq!(acc.background.count, 0);
    assert_eq!(acc.target.count, 3);
    assert_eq!(acc.empty_group(), Some(Group::Background));
}

#[test]
fn test_group_accessor() {
    let acc = run(
        vec![PixelSample::grey(0.2); 2],
        vec![PixelSample::grey(0.8), SENTINEL],
        RatingMode::Luminance,
    );
    assert_eq!(acc.group(Group::Background).count, 2);
    assert_eq!(acc.group(Group::Target).count, 1);
    assert_eq!(acc.empty_group(), None);
}
