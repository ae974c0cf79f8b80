#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_only_exact_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(" dark"), None);
    assert_eq!(Theme::parse("true"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn from_attribute_treats_non_dark_as_light() {
    assert_eq!(Theme::from_attribute(Some("dark")), Theme::Dark);
    assert_eq!(Theme::from_attribute(Some("light")), Theme::Light);
    assert_eq!(Theme::from_attribute(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_attribute(None), Theme::Light);
}

#[test]
fn toggled_flips_and_full_cycle_returns() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    for start in [Theme::Light, Theme::Dark] {
        assert_eq!(start.toggled().toggled(), start);
    }
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

// =============================================================
// Browser entry points (no-op outside hydrate)
// =============================================================

#[test]
fn apply_stored_theme_is_none_without_storage() {
    assert_eq!(apply_stored_theme(&UiConfig::default()), None);
}

#[test]
fn toggle_theme_from_default_goes_dark() {
    assert_eq!(current_theme(), Theme::Light);
    assert_eq!(toggle_theme(&UiConfig::default()), Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Light);
    apply(Theme::Dark);
}
