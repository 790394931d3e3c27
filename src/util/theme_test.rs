use super::*;

#[test]
fn storage_key_is_theme() {
    assert_eq!(STORAGE_KEY, "theme");
}

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_noops_outside_hydrate() {
    assert_eq!(read_preference(), None);
    assert_eq!(init(), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    apply(Theme::Dark);
    save(Theme::Dark);
}
