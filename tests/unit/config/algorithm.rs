use super::*;

#[test]
fn default_is_blend_s() {
    assert_eq!(Algorithm::default(), Algorithm::BlendS);
    assert_eq!(Algorithm::ALL[3], Algorithm::default());
}

#[test]
fn display_names_are_distinct() {
    let mut names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.display_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 4);
    assert_eq!(Algorithm::BlendS.to_string(), "Blend S");
}

#[test]
fn parses_keys_and_display_names() {
    for a in Algorithm::ALL {
        assert_eq!(a.key().parse::<Algorithm>().unwrap(), a);
        assert_eq!(a.display_name().parse::<Algorithm>().unwrap(), a);
    }
    assert_eq!(
        " CORGI-HSV ".parse::<Algorithm>().unwrap(),
        Algorithm::CorgiHsv
    );
    assert!("ray-tracing".parse::<Algorithm>().is_err());
}

#[test]
fn serde_uses_kebab_keys() {
    let s = serde_json::to_string(&Algorithm::BrightnessCompensate).unwrap();
    assert_eq!(s, "\"brightness-compensate\"");
    let back: Algorithm = serde_json::from_str("\"corgi-legacy\"").unwrap();
    assert_eq!(back, Algorithm::CorgiLegacy);
}
