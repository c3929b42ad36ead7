//! Color scheme resolution.

use zenith_core::ColorScheme;

/// A scheme that can actually be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedScheme {
    Light,
    Dark,
}

impl ResolvedScheme {
    /// The root class for this scheme.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Source of the OS-level "prefers dark" signal.
///
/// Queried once per application; later OS changes are not tracked.
pub trait ColorSchemePreference {
    fn prefers_dark(&self) -> bool;
}

/// A preference fixed at construction, used by the CLI and in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreference {
    pub prefers_dark: bool,
}

impl FixedPreference {
    pub fn light() -> Self {
        Self { prefers_dark: false }
    }

    pub fn dark() -> Self {
        Self { prefers_dark: true }
    }
}

impl ColorSchemePreference for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}

impl<P: ColorSchemePreference + ?Sized> ColorSchemePreference for &P {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

/// Resolves `system` through `preference`; explicit schemes pass through.
pub fn resolve_scheme(scheme: ColorScheme, preference: &impl ColorSchemePreference) -> ResolvedScheme {
    match scheme {
        ColorScheme::Light => ResolvedScheme::Light,
        ColorScheme::Dark => ResolvedScheme::Dark,
        ColorScheme::System if preference.prefers_dark() => ResolvedScheme::Dark,
        ColorScheme::System => ResolvedScheme::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_schemes_ignore_preference() {
        for pref in [FixedPreference::light(), FixedPreference::dark()] {
            assert_eq!(resolve_scheme(ColorScheme::Light, &pref), ResolvedScheme::Light);
            assert_eq!(resolve_scheme(ColorScheme::Dark, &pref), ResolvedScheme::Dark);
        }
    }

    #[test]
    fn test_system_follows_preference() {
        assert_eq!(
            resolve_scheme(ColorScheme::System, &FixedPreference::dark()),
            ResolvedScheme::Dark
        );
        assert_eq!(
            resolve_scheme(ColorScheme::System, &FixedPreference::light()),
            ResolvedScheme::Light
        );
    }
}
