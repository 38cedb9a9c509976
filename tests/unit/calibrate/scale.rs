use super::*;

#[test]
fn door_reference_gives_five_px_per_inch() {
    let r = calibrate(Point::new(200.0, 100.0), Point::new(200.0, 500.0), 80.0).unwrap();
    assert_eq!(r.px_per_inch(), 5.0);
    assert_eq!(r.inches_to_px(48.0), 240.0);
    assert_eq!(r.px_to_inches(300.0), 60.0);
}

#[test]
fn ratio_is_hypot_over_length() {
    let cases = [
        ((0.0, 0.0), (3.0, 4.0), 1.0, 5.0),
        ((0.0, 0.0), (100.0, 100.0), 80.0, 100.0f64.hypot(100.0) / 80.0),
        ((10.0, 7.0), (1.0, 2.0), 2.5, 9.0f64.hypot(5.0) / 2.5),
    ];
    for ((x1, y1), (x2, y2), len, want) in cases {
        let r = calibrate(Point::new(x1, y1), Point::new(x2, y2), len).unwrap();
        assert!((r.px_per_inch() - want).abs() < 1e-12);
        assert!(r.px_per_inch() > 0.0);
    }
}

#[test]
fn coincident_points_are_invalid_reference() {
    for len in [1.0, 80.0, 1e6] {
        let err = calibrate(Point::new(42.0, 42.0), Point::new(42.0, 42.0), len).unwrap_err();
        assert!(matches!(err, SignscaleError::InvalidReference(_)));
    }
}

#[test]
fn bad_length_or_points_are_validation_errors() {
    let p = Point::new(0.0, 0.0);
    let q = Point::new(0.0, 10.0);
    for len in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            calibrate(p, q, len).unwrap_err(),
            SignscaleError::Validation(_)
        ));
    }
    assert!(matches!(
        calibrate(Point::new(-1.0, 0.0), q, 10.0).unwrap_err(),
        SignscaleError::Validation(_)
    ));
}

#[test]
fn scale_ratio_rejects_non_positive_on_deserialize() {
    let r: ScaleRatio = serde_json::from_str("2.5").unwrap();
    assert_eq!(r.px_per_inch(), 2.5);
    assert!(serde_json::from_str::<ScaleRatio>("0.0").is_err());
    assert!(serde_json::from_str::<ScaleRatio>("-3").is_err());
}

#[test]
fn measurement_default_matches_interactive_defaults() {
    let m = ReferenceMeasurement::default();
    assert_eq!(m.real_length_in, 80.0);
    assert_eq!(m.pixel_distance(), 100.0f64.hypot(100.0));
    assert!(m.ratio().is_ok());
}

#[test]
fn drawn_line_rescales_by_width_ratio() {
    let line = DrawnLine {
        start: Point::new(100.0, 50.0),
        end: Point::new(100.0, 250.0),
        displayed_width: 500.0,
        original_width: 1000.0,
    };
    let (p1, p2) = line.to_image_space().unwrap();
    assert_eq!(p1, Point::new(200.0, 100.0));
    assert_eq!(p2, Point::new(200.0, 500.0));
    let r = line.measurement(80.0).unwrap().ratio().unwrap();
    assert_eq!(r.px_per_inch(), 5.0);
}

#[test]
fn drawn_line_rejects_zero_display_width() {
    let line = DrawnLine {
        start: Point::new(0.0, 0.0),
        end: Point::new(1.0, 1.0),
        displayed_width: 0.0,
        original_width: 1000.0,
    };
    assert!(line.to_image_space().is_err());
}
