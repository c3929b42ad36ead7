//! Commits computed declarations to a document.

use zenith_core::{Settings, SettingsObserver};

use crate::declarations::{apply_theme, StyleDeclarations};
use crate::document::{StyleDocument, THEME_STYLESHEET_ID};
use crate::font::TIERS;
use crate::registry::ThemeRegistry;
use crate::scheme::{ColorSchemePreference, ResolvedScheme};

/// Keeps a document's theme classes and stylesheet in step with settings.
///
/// The only writer of the generated stylesheet.
pub struct ThemeApplicator<D: StyleDocument, P: ColorSchemePreference> {
    registry: ThemeRegistry,
    preference: P,
    document: D,
    last: Option<StyleDeclarations>,
}

impl<D: StyleDocument, P: ColorSchemePreference> ThemeApplicator<D, P> {
    pub fn new(registry: ThemeRegistry, preference: P, document: D) -> Self {
        Self {
            registry,
            preference,
            document,
            last: None,
        }
    }

    /// Computes the declarations for `settings` and writes them.
    pub fn apply(&mut self, settings: &Settings) -> &StyleDeclarations {
        let decl = apply_theme(settings, &self.registry, &self.preference);
        self.commit(&decl);
        tracing::debug!(
            "Applied theme {} ({}, {})",
            decl.theme,
            decl.scheme.class(),
            decl.font.body_class
        );
        self.last.insert(decl)
    }

    fn commit(&mut self, decl: &StyleDeclarations) {
        let doc = &mut self.document;

        for scheme in [ResolvedScheme::Light, ResolvedScheme::Dark] {
            doc.remove_root_class(scheme.class());
        }
        doc.add_root_class(decl.scheme.class());

        for tier in &TIERS {
            doc.remove_body_class(tier.body_class);
        }
        doc.add_body_class(decl.font.body_class);

        for name in self.registry.names() {
            doc.remove_root_class(name);
        }
        doc.add_root_class(&decl.theme);

        doc.upsert_stylesheet(THEME_STYLESHEET_ID, &decl.to_css());
    }

    /// Declarations from the most recent `apply`.
    pub fn last_applied(&self) -> Option<&StyleDeclarations> {
        self.last.as_ref()
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_document(self) -> D {
        self.document
    }
}

impl<D: StyleDocument, P: ColorSchemePreference> SettingsObserver for ThemeApplicator<D, P> {
    fn settings_changed(&mut self, settings: &Settings) {
        self.apply(settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::VirtualDocument;
    use crate::scheme::FixedPreference;
    use zenith_core::{ColorScheme, FontScale};

    fn applicator(prefers_dark: bool) -> ThemeApplicator<VirtualDocument, FixedPreference> {
        ThemeApplicator::new(
            ThemeRegistry::builtin(),
            FixedPreference { prefers_dark },
            VirtualDocument::new(),
        )
    }

    #[test]
    fn test_apply_writes_classes_and_stylesheet() {
        let mut app = applicator(false);
        let settings = Settings {
            theme: "green".to_string(),
            color_scheme: ColorScheme::Dark,
            font_scale: FontScale::Small,
            ..Default::default()
        };
        let css = app.apply(&settings).to_css();

        let doc = app.document();
        assert_eq!(doc.root_classes().collect::<Vec<_>>(), ["dark", "green"]);
        assert_eq!(doc.body_classes().collect::<Vec<_>>(), ["text-sm"]);
        assert_eq!(doc.stylesheet(THEME_STYLESHEET_ID), Some(css.as_str()));
    }

    #[test]
    fn test_reapply_replaces_previous_state() {
        let mut app = applicator(true);
        app.apply(&Settings {
            theme: "rose".to_string(),
            color_scheme: ColorScheme::Light,
            font_scale: FontScale::Large,
            ..Default::default()
        });
        app.apply(&Settings {
            theme: "blue".to_string(),
            color_scheme: ColorScheme::System,
            font_scale: FontScale::Medium,
            ..Default::default()
        });

        let doc = app.document();
        assert_eq!(doc.root_classes().collect::<Vec<_>>(), ["blue", "dark"]);
        assert_eq!(doc.body_classes().collect::<Vec<_>>(), ["text-base"]);
        assert_eq!(doc.stylesheets().len(), 1);
        assert!(doc.stylesheet(THEME_STYLESHEET_ID).unwrap().contains("--primary: 221.2 83.2% 53.3%;"));
    }

    #[test]
    fn test_unknown_theme_applies_fallback() {
        let mut app = applicator(false);
        app.apply(&Settings {
            theme: "neon".to_string(),
            ..Default::default()
        });
        assert!(app.document().has_root_class("default"));
        assert!(!app.document().has_root_class("neon"));
        assert_eq!(app.last_applied().unwrap().theme, "default");
    }

    #[test]
    fn test_observer_applies_on_change() {
        let mut app = applicator(false);
        assert!(app.last_applied().is_none());
        app.settings_changed(&Settings::default());
        assert!(app.document().has_root_class("light"));
    }

    #[test]
    fn test_foreign_classes_are_kept() {
        let mut doc = VirtualDocument::new();
        doc.add_root_class("antialiased");
        let mut app = ThemeApplicator::new(ThemeRegistry::builtin(), FixedPreference::light(), doc);
        app.apply(&Settings::default());
        assert!(app.into_document().has_root_class("antialiased"));
    }
}
