//! Theme definitions and the registry that resolves them by name.
//!
//! ## Learning: Validated Construction
//!
//! `ThemeRegistry::new` is the only way to build a registry, and it rejects
//! an empty list and duplicate names. Every other method can then rely on
//! "there is a first theme" without re-checking, which is what lets
//! [`ThemeRegistry::resolve`] return a plain reference instead of an
//! `Option`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use crate::font::TIERS;
use crate::scheme::ResolvedScheme;
use crate::{ThemeError, ThemeResult};

/// Token name -> CSS color value (e.g. `"primary"` -> `"221.2 83.2% 53.3%"`).
pub type TokenMap = BTreeMap<String, String>;

/// Light and dark token sets of a theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeVariables {
    pub light: TokenMap,
    pub dark: TokenMap,
}

/// A named palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    /// Unique key, also applied as a root class
    pub name: String,

    /// Display name
    pub label: String,

    #[serde(alias = "cssVars")]
    pub variables: ThemeVariables,
}

impl ThemeDefinition {
    /// Builds a theme from the neutral base palette with its own accent.
    ///
    /// `primary` and `ring` take the accent; `primary-foreground` is the
    /// text drawn on it.
    fn accented(name: &str, label: &str, light: [&str; 2], dark: [&str; 2]) -> Self {
        let mut light_tokens = tokens(NEUTRAL_LIGHT);
        let mut dark_tokens = tokens(NEUTRAL_DARK);
        for (map, [primary, foreground]) in [(&mut light_tokens, light), (&mut dark_tokens, dark)] {
            map.insert("primary".to_string(), primary.to_string());
            map.insert("primary-foreground".to_string(), foreground.to_string());
            map.insert("ring".to_string(), primary.to_string());
        }
        Self {
            name: name.to_string(),
            label: label.to_string(),
            variables: ThemeVariables {
                light: light_tokens,
                dark: dark_tokens,
            },
        }
    }

    fn validate(&self) -> ThemeResult<()> {
        if !is_css_ident(&self.name)
            || self.name.starts_with(|c: char| c.is_ascii_digit())
            || is_reserved_class(&self.name)
        {
            return Err(ThemeError::InvalidName(self.name.clone()));
        }
        for map in [&self.variables.light, &self.variables.dark] {
            for (token, value) in map {
                if !is_css_ident(token) {
                    return Err(ThemeError::InvalidToken {
                        theme: self.name.clone(),
                        token: token.clone(),
                    });
                }
                if value.is_empty() || value.contains([';', '{', '}']) {
                    return Err(ThemeError::InvalidValue {
                        theme: self.name.clone(),
                        token: token.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn is_css_ident(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Classes the applicator owns besides theme names.
fn is_reserved_class(name: &str) -> bool {
    [ResolvedScheme::Light, ResolvedScheme::Dark]
        .iter()
        .any(|scheme| scheme.class() == name)
        || TIERS.iter().any(|tier| tier.body_class == name)
}

fn tokens(pairs: &[(&str, &str)]) -> TokenMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

const NEUTRAL_LIGHT: &[(&str, &str)] = &[
    ("background", "0 0% 100%"),
    ("foreground", "240 10% 3.9%"),
    ("card", "0 0% 100%"),
    ("card-foreground", "240 10% 3.9%"),
    ("popover", "0 0% 100%"),
    ("popover-foreground", "240 10% 3.9%"),
    ("primary", "240 5.9% 10%"),
    ("primary-foreground", "0 0% 98%"),
    ("secondary", "240 4.8% 95.9%"),
    ("secondary-foreground", "240 5.9% 10%"),
    ("muted", "240 4.8% 95.9%"),
    ("muted-foreground", "240 3.8% 46.1%"),
    ("accent", "240 4.8% 95.9%"),
    ("accent-foreground", "240 5.9% 10%"),
    ("destructive", "0 84.2% 60.2%"),
    ("destructive-foreground", "0 0% 98%"),
    ("border", "240 5.9% 90%"),
    ("input", "240 5.9% 90%"),
    ("ring", "240 5.9% 10%"),
];

const NEUTRAL_DARK: &[(&str, &str)] = &[
    ("background", "240 10% 3.9%"),
    ("foreground", "0 0% 98%"),
    ("card", "240 10% 3.9%"),
    ("card-foreground", "0 0% 98%"),
    ("popover", "240 10% 3.9%"),
    ("popover-foreground", "0 0% 98%"),
    ("primary", "0 0% 98%"),
    ("primary-foreground", "240 5.9% 10%"),
    ("secondary", "240 3.7% 15.9%"),
    ("secondary-foreground", "0 0% 98%"),
    ("muted", "240 3.7% 15.9%"),
    ("muted-foreground", "240 5% 64.9%"),
    ("accent", "240 3.7% 15.9%"),
    ("accent-foreground", "0 0% 98%"),
    ("destructive", "0 62.8% 30.6%"),
    ("destructive-foreground", "0 0% 98%"),
    ("border", "240 3.7% 15.9%"),
    ("input", "240 3.7% 15.9%"),
    ("ring", "240 4.9% 83.9%"),
];

/// The ordered set of available themes. Never empty; names are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<ThemeDefinition>,
}

impl ThemeRegistry {
    /// Builds a registry. The first theme is the fallback for unknown names.
    pub fn new(themes: Vec<ThemeDefinition>) -> ThemeResult<Self> {
        if themes.is_empty() {
            return Err(ThemeError::EmptyRegistry);
        }
        let mut seen = HashSet::new();
        for theme in &themes {
            if !seen.insert(theme.name.as_str()) {
                return Err(ThemeError::DuplicateName(theme.name.clone()));
            }
            theme.validate()?;
        }
        Ok(Self { themes })
    }

    /// The themes shipped with the dashboard.
    pub fn builtin() -> Self {
        Self {
            themes: vec![
                ThemeDefinition::accented(
                    "default",
                    "Default",
                    ["231 48% 48%", "0 0% 98%"],
                    ["231 60% 65%", "240 10% 3.9%"],
                ),
                ThemeDefinition::accented(
                    "zinc",
                    "Zinc",
                    ["240 5.9% 10%", "0 0% 98%"],
                    ["0 0% 98%", "240 5.9% 10%"],
                ),
                ThemeDefinition::accented(
                    "rose",
                    "Rose",
                    ["346.8 77.2% 49.8%", "355.7 100% 97.3%"],
                    ["346.8 77.2% 49.8%", "355.7 100% 97.3%"],
                ),
                ThemeDefinition::accented(
                    "blue",
                    "Blue",
                    ["221.2 83.2% 53.3%", "210 40% 98%"],
                    ["217.2 91.2% 59.8%", "222.2 47.4% 11.2%"],
                ),
                ThemeDefinition::accented(
                    "green",
                    "Green",
                    ["142.1 76.2% 36.3%", "355.7 100% 97.3%"],
                    ["142.1 70.6% 45.3%", "144.9 80.4% 10%"],
                ),
                ThemeDefinition::accented(
                    "orange",
                    "Orange",
                    ["24.6 95% 53.1%", "60 9.1% 97.8%"],
                    ["20.5 90.2% 48.2%", "60 9.1% 97.8%"],
                ),
                ThemeDefinition::accented(
                    "violet",
                    "Violet",
                    ["262.1 83.3% 57.8%", "210 20% 98%"],
                    ["263.4 70% 50.4%", "210 20% 98%"],
                ),
            ],
        }
    }

    /// Parses a JSON array of theme definitions.
    pub fn from_json(json: &str) -> ThemeResult<Self> {
        let themes: Vec<ThemeDefinition> = serde_json::from_str(json)?;
        Self::new(themes)
    }

    /// Loads a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Appends the themes of `other` after the existing ones.
    pub fn extend(&mut self, other: ThemeRegistry) -> ThemeResult<()> {
        for theme in &other.themes {
            if self.get(&theme.name).is_some() {
                return Err(ThemeError::DuplicateName(theme.name.clone()));
            }
        }
        self.themes.extend(other.themes);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|t| t.name == name)
    }

    /// The theme called `name`, or the first theme if there is none.
    pub fn resolve(&self, name: &str) -> &ThemeDefinition {
        self.get(name).unwrap_or_else(|| {
            tracing::debug!("Unknown theme {:?}, falling back to {}", name, self.first().name);
            self.first()
        })
    }

    pub fn first(&self) -> &ThemeDefinition {
        &self.themes[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> + '_ {
        self.themes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.themes.iter().map(|t| t.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str) -> ThemeDefinition {
        ThemeDefinition::accented(name, name, ["0 0% 0%", "0 0% 100%"], ["0 0% 100%", "0 0% 0%"])
    }

    #[test]
    fn test_builtin_registry_is_valid() {
        let builtin = ThemeRegistry::builtin();
        let rebuilt = ThemeRegistry::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, builtin);
        assert_eq!(builtin.first().name, "default");
        assert_eq!(builtin.len(), 7);
    }

    #[test]
    fn test_accent_overrides_primary_and_ring() {
        let registry = ThemeRegistry::builtin();
        let rose = registry.get("rose").unwrap();
        assert_eq!(rose.variables.light["primary"], "346.8 77.2% 49.8%");
        assert_eq!(rose.variables.light["ring"], "346.8 77.2% 49.8%");
        assert_eq!(rose.variables.dark["background"], "240 10% 3.9%");
        assert_eq!(rose.variables.light.len(), NEUTRAL_LIGHT.len());
    }

    #[test]
    fn test_resolve_falls_back_to_first() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.resolve("blue").name, "blue");
        assert_eq!(registry.resolve("no-such-theme").name, "default");
        assert_eq!(registry.resolve("").name, "default");
    }

    #[test]
    fn test_empty_registry_rejected() {
        assert!(matches!(ThemeRegistry::new(vec![]), Err(ThemeError::EmptyRegistry)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = ThemeRegistry::new(vec![theme("a"), theme("b"), theme("a")]).unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateName(name) if name == "a"));
    }

    #[test]
    fn test_invalid_tokens_rejected() {
        let mut bad = theme("bad");
        bad.variables.light.insert("x; color".to_string(), "red".to_string());
        assert!(matches!(
            ThemeRegistry::new(vec![bad]),
            Err(ThemeError::InvalidToken { .. })
        ));

        let mut bad = theme("bad");
        bad.variables.dark.insert("primary".to_string(), "red } body {".to_string());
        assert!(matches!(
            ThemeRegistry::new(vec![bad]),
            Err(ThemeError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_names_must_be_usable_classes() {
        for name in ["dark", "light", "text-lg", "my theme", "", "9lives", "a.b"] {
            let err = ThemeRegistry::new(vec![theme(name)]).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidName(n) if n == name), "{name:?}");
        }
        assert!(ThemeRegistry::new(vec![theme("dark-blue")]).is_ok());
    }

    #[test]
    fn test_theme_file_cannot_add_scheme_class() {
        for name in ["dark", "my theme"] {
            let json = format!(
                r#"[{{"name": "{name}", "label": "X", "cssVars": {{"light": {{}}, "dark": {{}}}}}}]"#
            );
            let err = ThemeRegistry::from_json(&json).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidName(n) if n == name));
        }
    }

    #[test]
    fn test_from_json_accepts_css_vars_alias() {
        let json = r#"[{
            "name": "mono",
            "label": "Mono",
            "cssVars": {
                "light": {"background": "0 0% 100%"},
                "dark": {"background": "0 0% 0%"}
            }
        }]"#;
        let registry = ThemeRegistry::from_json(json).unwrap();
        assert_eq!(registry.first().label, "Mono");
        assert_eq!(registry.first().variables.dark["background"], "0 0% 0%");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        let json = serde_json::to_string(&vec![theme("solar")]).unwrap();
        std::fs::write(&path, json).unwrap();

        let registry = ThemeRegistry::load(&path).unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), ["solar"]);
    }

    #[test]
    fn test_extend() {
        let mut registry = ThemeRegistry::builtin();
        registry
            .extend(ThemeRegistry::new(vec![theme("solar")]).unwrap())
            .unwrap();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.first().name, "default");

        let err = registry
            .extend(ThemeRegistry::new(vec![theme("rose")]).unwrap())
            .unwrap_err();
        assert!(matches!(err, ThemeError::DuplicateName(_)));
    }
}
