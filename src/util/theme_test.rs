#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn resolve_defaults_to_dark() {
    assert_eq!(resolve(None), Scheme::Dark);
}

#[test]
fn resolve_honors_explicit_preference() {
    assert_eq!(resolve(Some(Scheme::Light)), Scheme::Light);
    assert_eq!(resolve(Some(Scheme::Dark)), Scheme::Dark);
}

#[test]
fn attr_values_match_css_hooks() {
    assert_eq!(Scheme::Dark.attr_value(), "dark");
    assert_eq!(Scheme::Light.attr_value(), "light");
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Scheme::Dark);
    apply(Scheme::Light);
}
