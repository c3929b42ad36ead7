//! Pure computation of the style state for a set of settings.
//!
//! ## Learning: Separating Computation from Effects
//!
//! [`apply_theme`] only reads its inputs and returns a value. Everything that
//! touches a document lives in [`crate::applicator`]. That split means the
//! interesting logic (fallbacks, scheme resolution, CSS text) is tested with
//! plain `assert_eq!`, no document required.

use std::fmt::Write;

use zenith_core::Settings;

use crate::font::{font_tier, FontTier};
use crate::registry::{ThemeRegistry, TokenMap};
use crate::scheme::{resolve_scheme, ColorSchemePreference, ResolvedScheme};

/// Everything the applicator writes into a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclarations {
    /// `light` or `dark`, never `system`
    pub scheme: ResolvedScheme,

    /// Name of the resolved theme, applied as a root class
    pub theme: String,

    /// Tokens for `:root, .light`
    pub light: TokenMap,

    /// Tokens for `.dark`
    pub dark: TokenMap,

    pub font: FontTier,
}

/// Resolves `settings` against `registry` and the OS preference.
///
/// Unknown theme names resolve to the first registry entry.
pub fn apply_theme(
    settings: &Settings,
    registry: &ThemeRegistry,
    preference: &impl ColorSchemePreference,
) -> StyleDeclarations {
    let theme = registry.resolve(&settings.theme);
    StyleDeclarations {
        scheme: resolve_scheme(settings.color_scheme, preference),
        theme: theme.name.clone(),
        light: theme.variables.light.clone(),
        dark: theme.variables.dark.clone(),
        font: *font_tier(settings.font_scale),
    }
}

impl StyleDeclarations {
    /// Renders the dynamic stylesheet.
    ///
    /// ```text
    /// :root, .light {
    ///   --background: 0 0% 100%;
    /// }
    /// .dark {
    ///   --background: 240 10% 3.9%;
    /// }
    /// :root {
    ///   --font-size-base: 1rem;
    ///   --line-height-base: 1.5rem;
    /// }
    /// ```
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        write_block(&mut css, ":root, .light", &self.light);
        write_block(&mut css, ".dark", &self.dark);
        css.push_str(":root {\n");
        let _ = writeln!(css, "  --font-size-base: {};", self.font.font_size);
        let _ = writeln!(css, "  --line-height-base: {};", self.font.line_height);
        css.push_str("}\n");
        css
    }
}

fn write_block(css: &mut String, selector: &str, tokens: &TokenMap) {
    let _ = writeln!(css, "{} {{", selector);
    for (token, value) in tokens {
        let _ = writeln!(css, "  --{}: {};", token, value);
    }
    css.push_str("}\n");
}
