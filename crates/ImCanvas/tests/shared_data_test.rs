use im_canvas::TessellationConfig;
use im_canvas::shared_data::{
    ARC_FAST_SAMPLE_COUNT, CIRCLE_AUTO_SEGMENT_MAX, CIRCLE_AUTO_SEGMENT_MIN, SharedData, sagitta,
};

#[test]
fn test_auto_segment_count_small_radius() {
    let shared = SharedData::default();
    assert_eq!(shared.circle_segment_max_error(), 0.30);

    let n = shared.auto_segment_count(10.0);
    assert!(n >= 12, "expected at least 12 segments, got {n}");
    let error = 10.0 * (1.0 - (std::f32::consts::PI / n as f32).cos());
    assert!(error <= 0.30, "sagitta {error} exceeds bound");
}

#[test]
fn test_auto_segment_count_bounds_sagitta_up_to_cutoff() {
    let shared = SharedData::default();
    let cutoff = shared.arc_fast_radius_cutoff();
    let max_error = shared.circle_segment_max_error();

    let mut radius = 0.0_f32;
    while radius <= cutoff {
        let n = shared.auto_segment_count(radius);
        assert!(n >= CIRCLE_AUTO_SEGMENT_MIN);
        assert!(
            sagitta(radius, n) <= max_error + 1e-5,
            "radius {radius}: {n} segments give sagitta {}",
            sagitta(radius, n)
        );
        radius += 0.37;
    }
}

#[test]
fn test_auto_segment_count_large_radius_is_clamped() {
    let shared = SharedData::default();
    assert_eq!(shared.auto_segment_count(1.0e7), CIRCLE_AUTO_SEGMENT_MAX);
}

#[test]
fn test_fast_arc_cutoff() {
    let shared = SharedData::default();
    let expected = 140.34;
    let cutoff = shared.arc_fast_radius_cutoff();
    assert!(
        ((cutoff - expected) / expected).abs() < 0.01,
        "cutoff {cutoff} not within 1% of {expected}"
    );
    // Just under the cutoff the adaptive count fits the sample table.
    assert!(shared.auto_segment_count(cutoff * 0.999) <= ARC_FAST_SAMPLE_COUNT as u16);
}

#[test]
fn test_sample_points_lie_on_unit_circle() {
    let shared = SharedData::default();
    for (i, p) in shared.sample_points().iter().enumerate() {
        let angle = std::f32::consts::TAU * i as f32 / ARC_FAST_SAMPLE_COUNT as f32;
        assert!((p.x - angle.cos()).abs() < 1e-5);
        assert!((p.y - angle.sin()).abs() < 1e-5);
    }
    let quarter = shared.sample_point(12);
    assert!(quarter.x.abs() < 1e-5 && (quarter.y - 1.0).abs() < 1e-5);
}

#[test]
#[cfg_attr(debug_assertions, should_panic)]
fn test_sample_point_out_of_range() {
    let shared = SharedData::default();
    // Release builds wrap the index instead of aborting.
    assert_eq!(*shared.sample_point(48), *shared.sample_point(0));
}

#[test]
fn test_setting_max_error_rebuilds_tables() {
    let mut shared = SharedData::default();
    let before = shared.auto_segment_count(20.0);
    let cutoff_before = shared.arc_fast_radius_cutoff();

    shared.set_circle_segment_max_error(0.05);

    assert!(shared.auto_segment_count(20.0) > before);
    assert!(shared.arc_fast_radius_cutoff() < cutoff_before);
    assert!(sagitta(20.0, shared.auto_segment_count(20.0)) <= 0.05 + 1e-6);
}

#[test]
fn test_cutoff_setter_only_lowers() {
    let mut shared = SharedData::default();
    let derived = shared.arc_fast_radius_cutoff();

    shared.set_arc_fast_radius_cutoff(50.0);
    assert_eq!(shared.arc_fast_radius_cutoff(), 50.0);

    shared.set_arc_fast_radius_cutoff(derived * 4.0);
    assert_eq!(shared.arc_fast_radius_cutoff(), derived);
}

#[test]
fn test_config_from_partial_json() {
    let config: TessellationConfig =
        serde_json::from_str(r#"{ "circle_segment_max_error": 1.5 }"#).unwrap();
    assert_eq!(config.circle_segment_max_error, 1.5);
    assert_eq!(config.curve_tessellation_tolerance, 1.25);

    let shared = SharedData::new(&config);
    assert!(shared.auto_segment_count(10.0) < SharedData::default().auto_segment_count(10.0));
}
