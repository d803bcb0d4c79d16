use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        OrbitdialError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        OrbitdialError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert!(
        OrbitdialError::asset("x")
            .to_string()
            .contains("asset error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = OrbitdialError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
