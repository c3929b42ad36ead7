//! # Zenith Theme
//!
//! Theme registry and CSS variable generation.
//!
//! ## Architecture
//!
//! ```text
//! Settings ──► apply_theme (pure) ──► StyleDeclarations ──► ThemeApplicator
//!                  ▲                                              │
//!          ThemeRegistry + ColorSchemePreference                  ▼
//!                                                         StyleDocument
//! ```
//!
//! - [`registry`]: named light/dark token maps, fallback to the first entry
//! - [`declarations`]: what to write, computed without side effects
//! - [`applicator`]: writes classes and the `dynamic-theme-styles` sheet

pub mod applicator;
pub mod declarations;
pub mod document;
pub mod font;
pub mod registry;
pub mod scheme;

pub use applicator::ThemeApplicator;
pub use declarations::{apply_theme, StyleDeclarations};
pub use document::{StyleDocument, VirtualDocument, THEME_STYLESHEET_ID};
pub use font::{font_tier, FontTier};
pub use registry::{ThemeDefinition, ThemeRegistry, ThemeVariables, TokenMap};
pub use scheme::{resolve_scheme, ColorSchemePreference, FixedPreference, ResolvedScheme};

/// Result type for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;

/// Errors raised while building a theme registry.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("Theme registry must contain at least one theme")]
    EmptyRegistry,

    #[error("Duplicate theme name: {0}")]
    DuplicateName(String),

    #[error("Invalid theme name {0:?}: must be a CSS class other than light, dark or a font tier")]
    InvalidName(String),

    #[error("Theme {theme}: invalid token name {token:?}")]
    InvalidToken { theme: String, token: String },

    #[error("Theme {theme}: invalid value for token {token:?}")]
    InvalidValue { theme: String, token: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
