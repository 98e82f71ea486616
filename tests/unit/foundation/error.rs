use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BlurError::unsupported_format("x")
            .to_string()
            .contains("unsupported format:")
    );
    assert!(
        BlurError::acquisition("x")
            .to_string()
            .contains("acquisition failure:")
    );
    assert!(
        BlurError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BlurError::radius_out_of_range(30, 25)
            .to_string()
            .contains("radius out of range: 30 exceeds maximum 25")
    );
}

#[test]
fn dimension_mismatch_reports_both_sides() {
    let err = BlurError::dimension_mismatch(
        (4, 3, ChannelWidth::Four),
        (4, 2, ChannelWidth::One),
    );
    let msg = err.to_string();
    assert!(msg.contains("source is 4x3x4"), "{msg}");
    assert!(msg.contains("destination is 4x2x1"), "{msg}");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BlurError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
