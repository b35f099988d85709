use super::*;

#[test]
fn multiplier_rejects_non_positive_and_non_finite() {
    for raw in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = Multiplier::new(raw).unwrap_err();
        assert!(matches!(err, RouteError::InvalidMode(_)), "{raw}: {err}");
    }
    assert_eq!(Multiplier::new(2.5).unwrap().get(), 2.5);
}

#[test]
fn presets_have_fixed_factors() {
    assert_eq!(TravelMode::Foot.multiplier().get(), 1.5);
    assert_eq!(TravelMode::Glider.multiplier().get(), 1.1);
    assert_eq!(TravelMode::Horse.multiplier().get(), 0.8);
}

#[test]
fn mode_parses_case_insensitively() {
    assert_eq!("Horse".parse::<TravelMode>().unwrap(), TravelMode::Horse);
    assert_eq!(" foot ".parse::<TravelMode>().unwrap(), TravelMode::Foot);
    assert!(matches!(
        "boat".parse::<TravelMode>(),
        Err(RouteError::InvalidMode(_))
    ));
}

#[test]
fn multiplier_deserialize_validates() {
    let ok: Multiplier = serde_json::from_str("0.8").unwrap();
    assert_eq!(ok.get(), 0.8);
    assert!(serde_json::from_str::<Multiplier>("0").is_err());
}
