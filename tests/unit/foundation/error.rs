use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SignscaleError::invalid_reference("x")
            .to_string()
            .contains("invalid reference:")
    );
    assert!(
        SignscaleError::unreadable_image("x")
            .to_string()
            .contains("unreadable image:")
    );
    assert!(
        SignscaleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SignscaleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(SignscaleError::font("x").to_string().contains("font error:"));
    assert!(
        SignscaleError::MissingCalibration
            .to_string()
            .contains("missing calibration")
    );
    assert!(SignscaleError::EmptyText.to_string().contains("empty text"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SignscaleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
