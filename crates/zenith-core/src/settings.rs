//! User appearance settings.
//!
//! ## Learning: Serde for Backward-Compatible State
//!
//! `#[serde(default)]` on the struct fills every missing key from
//! `Default::default()`, so a stored object written by an older build (or
//! edited by hand) is merged over the defaults instead of rejected.
//!
//! The field names on disk (`defaultNav`, `fontSize`, ...) are the ones the
//! web dashboard has always written, so renames keep the Rust names idiomatic
//! without breaking existing storage.

use serde::{Deserialize, Serialize};

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "default";

/// The full set of user preferences.
///
/// Replaced as a whole; there is no partial update API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Key into the theme registry
    pub theme: String,

    /// Primary navigation style
    #[serde(rename = "defaultNav")]
    pub navigation_mode: NavigationMode,

    /// Light / dark / follow the OS
    #[serde(rename = "colorScheme")]
    pub color_scheme: ColorScheme,

    /// Base text size tier
    #[serde(rename = "fontSize")]
    pub font_scale: FontScale,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            navigation_mode: NavigationMode::default(),
            color_scheme: ColorScheme::default(),
            font_scale: FontScale::default(),
        }
    }
}

impl Settings {
    /// Parses a stored settings object, merging it over the defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serializes to the stored representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Where the primary navigation is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    #[default]
    Sidebar,
    Header,
}

impl NavigationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sidebar => "sidebar",
            Self::Header => "header",
        }
    }
}

/// The user's color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
    #[default]
    System,
}

impl ColorScheme {
    /// All schemes in toggle order.
    pub const ALL: [ColorScheme; 3] = [Self::Light, Self::Dark, Self::System];

    /// Next scheme in the `light -> dark -> system` cycle.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }
}

/// Base font size tier.
///
/// Deserialization never fails: an unrecognised value decodes to
/// [`FontScale::Medium`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum FontScale {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl FontScale {
    pub const ALL: [FontScale; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Parses the stored key (`sm`, `md`, `lg`).
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "sm" => Some(Self::Small),
            "md" => Some(Self::Medium),
            "lg" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
        }
    }
}

impl From<String> for FontScale {
    fn from(key: String) -> Self {
        Self::parse(&key).unwrap_or_else(|| {
            tracing::debug!("Unknown font scale {:?}, using medium", key);
            Self::Medium
        })
    }
}
