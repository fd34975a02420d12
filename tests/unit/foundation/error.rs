use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WedgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WedgeError::render("x").to_string().contains("render error:"));
    assert!(WedgeError::encode("x").to_string().contains("encode error:"));
    assert!(
        WedgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WedgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
