use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RouteError::graph("x")
            .to_string()
            .contains("graph definition error:")
    );
    assert!(
        RouteError::selection("x")
            .to_string()
            .contains("invalid selection:")
    );
    assert!(RouteError::mode("x").to_string().contains("invalid mode:"));
    assert!(
        RouteError::playback("x")
            .to_string()
            .contains("invalid playback state:")
    );
    assert!(
        RouteError::config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(
        RouteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RouteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
