use super::*;

#[test]
fn pixel_size_is_height_times_ratio() {
    let ratio = ScaleRatio::new(5.0).unwrap();
    assert_eq!(SignSpec::new("OPEN", 48.0).pixel_size(ratio).unwrap(), 240);
}

#[test]
fn pixel_size_floors_fractional_sizes() {
    let ratio = ScaleRatio::new(1.7677669529663689).unwrap();
    assert_eq!(SignSpec::new("OPEN", 48.0).pixel_size(ratio).unwrap(), 84);
}

#[test]
fn sub_pixel_height_is_rejected() {
    let ratio = ScaleRatio::new(0.01).unwrap();
    assert!(matches!(
        SignSpec::new("OPEN", 12.0).pixel_size(ratio).unwrap_err(),
        SignscaleError::Validation(_)
    ));
}

#[test]
fn validate_reports_empty_text() {
    let err = SignSpec::new("", 48.0).validate().unwrap_err();
    assert!(matches!(err, SignscaleError::EmptyText));
    assert!(SignSpec::new("x", 0.0).validate().is_err());
    assert!(SignSpec::default().validate().is_ok());
}

#[test]
fn json_fields_default_individually() {
    let spec: SignSpec =
        serde_json::from_str(r##"{ "text": "BAKERY", "outline": "#ffffff", "font": "serif" }"##)
            .unwrap();
    assert_eq!(spec.text, "BAKERY");
    assert_eq!(spec.height_in, 48.0);
    assert_eq!(spec.font, FontChoice::Serif);
    assert_eq!(spec.fill, Rgba8::BLACK);
    assert_eq!(spec.outline, Some(Rgba8::WHITE));
    assert_eq!(spec.letter_spacing_px, 0);
}
