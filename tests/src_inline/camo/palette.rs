use super::*;

fn palette() -> Palette {
    Palette::new([
        PixelSample::grey(0.1),
        PixelSample::grey(0.2),
        PixelSample::grey(0.3),
        PixelSample::grey(0.4),
    ])
}

#[test]
fn test_roll_rotates_right() {
    let mut p = palette();
    p.roll();
    assert_eq!(
        p.colors(),
        &[
            PixelSample::grey(0.4),
            PixelSample::grey(0.1),
            PixelSample::grey(0.2),
            PixelSample::grey(0.3),
        ]
    );
    assert_eq!(p.old_colors(), palette().colors());
}

#[test]
fn test_pick_keeps_unmatched_slots() {
    let mut p = palette();
    let mut probe = |slot: usize| {
        if slot % 2 == 0 {
            Some(PixelSample::rgb(1.0, 0.0, slot as f32 / 4.0))
        } else {
            None
        }
    };
    let updated = p.pick(&mut probe);
    assert_eq!(updated, 2);
    assert_eq!(p.colors()[0], PixelSample::rgb(1.0, 0.0, 0.0));
    assert_eq!(p.colors()[1], PixelSample::grey(0.2));
    assert_eq!(p.colors()[2], PixelSample::rgb(1.0, 0.0, 0.5));
    assert_eq!(p.old_colors()[0], PixelSample::grey(0.1));
    assert_eq!(p.old_colors()[2], PixelSample::grey(0.3));
}

#[test]
fn test_shader_params_names() {
    let params = palette().shader_params();
    assert_eq!(params.len(), 8);
    assert_eq!(params[0].name, "color_01");
    assert_eq!(params[1].name, "old_color_01");
    assert_eq!(params[7].name, "old_color_04");
    assert_eq!(params[6].color, PixelSample::grey(0.4));
}

#[test]
fn test_ramp_cycler_wraps() {
    let mut ramps = RampCycler::new(3).unwrap();
    assert_eq!(ramps.current(), 0);
    assert_eq!(ramps.advance(), 1);
    assert_eq!(ramps.advance(), 2);
    assert_eq!(ramps.advance(), 0);
    assert!(RampCycler::new(0).is_none());
}
