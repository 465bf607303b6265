//! Color-scheme resolution and application.
//!
//! The scheme is applied as a `data-theme` attribute on the `<html>` element.
//! System-preference adaptation is deliberately disabled: the resolver never
//! consults `prefers-color-scheme`, so the app renders dark unless a caller
//! explicitly asks for light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Available color schemes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Scheme {
    #[default]
    Dark,
    Light,
}

impl Scheme {
    /// Value written to the `data-theme` attribute.
    pub fn attr_value(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Resolve the effective scheme from an optional explicit preference.
pub fn resolve(preference: Option<Scheme>) -> Scheme {
    preference.unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(scheme: Scheme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", scheme.attr_value());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = scheme;
    }
}
