//! # Zenith Core
//!
//! Settings state, persistence and layout logic for the Zenith dashboard.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                    SettingsStore<S>                   │
//! │  ┌──────────────┐  ┌───────────────┐  ┌────────────┐  │
//! │  │   Settings   │  │ KeyValueStorage│  │  EventBus  │  │
//! │  └──────────────┘  └───────────────┘  └────────────┘  │
//! │          │                                            │
//! │  ┌───────┴──────────── observers ─────────────────┐   │
//! │  │  ThemeApplicator (zenith-theme)  LayoutShell   │   │
//! │  └────────────────────────────────────────────────┘   │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! The store is owned by the application root and passed around
//! explicitly; nothing in this crate is global.

pub mod catalog;
pub mod config;
pub mod event;
pub mod layout;
pub mod settings;
pub mod storage;
pub mod store;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use event::{EventBus, EventHandler, SettingsEvent};
pub use layout::{LayoutShell, NavItem};
pub use settings::{ColorScheme, FontScale, NavigationMode, Settings};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{SettingsObserver, SettingsStore, SETTINGS_KEY};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: CoreError = StorageError::NoDataDir.into();
        assert_eq!(err.to_string(), "Storage error: Data directory not found");

        let err: CoreError = config::ConfigError::NoConfigDir.into();
        assert_eq!(err.to_string(), "Config error: Config directory not found");
    }
}
