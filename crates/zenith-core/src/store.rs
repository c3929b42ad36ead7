//! The settings store.
//!
//! ## Learning: Dependency Injection Instead of Globals
//!
//! The store is an ordinary value owned by the application root. Storage is
//! a type parameter and observers are handed in, so tests can run the whole
//! read-modify-write cycle against [`MemoryStorage`](crate::storage::MemoryStorage)
//! and a recording observer without touching disk or a browser.
//!
//! ## Learning: Interior Mutability for Shared Observers
//!
//! The store owns its observers as `Box<dyn SettingsObserver>`. When the
//! application also needs to read an observer's state (the layout shell,
//! for example) it registers an `Rc<RefCell<T>>` and keeps a clone.

use std::cell::RefCell;
use std::rc::Rc;

use crate::event::{EventBus, SettingsEvent};
use crate::settings::Settings;
use crate::storage::KeyValueStorage;
use crate::CoreResult;

/// Storage key holding the serialized settings object.
pub const SETTINGS_KEY: &str = "app-settings";

/// Receives the full settings after load and after every change.
pub trait SettingsObserver {
    fn settings_changed(&mut self, settings: &Settings);
}

impl<T: SettingsObserver + ?Sized> SettingsObserver for Rc<RefCell<T>> {
    fn settings_changed(&mut self, settings: &Settings) {
        self.borrow_mut().settings_changed(settings);
    }
}

/// Holds the current settings and keeps storage and observers in sync.
pub struct SettingsStore<S: KeyValueStorage> {
    settings: Settings,
    storage: S,
    observers: Vec<Box<dyn SettingsObserver>>,
    event_bus: Option<EventBus>,
}

impl<S: KeyValueStorage> SettingsStore<S> {
    /// Opens the store, loading persisted settings from `storage`.
    ///
    /// Missing, unreadable or malformed data falls back to defaults. This
    /// never fails.
    pub fn open(storage: S) -> Self {
        let settings = Self::load(&storage);
        Self {
            settings,
            storage,
            observers: Vec::new(),
            event_bus: None,
        }
    }

    fn load(storage: &S) -> Settings {
        let stored = match storage.get_item(SETTINGS_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                tracing::debug!("No stored settings, using defaults");
                return Settings::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings from storage: {}", e);
                return Settings::default();
            }
        };

        match Settings::from_json(&stored) {
            Ok(settings) => {
                tracing::debug!("Loaded settings: {:?}", settings);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse stored settings, discarding: {}", e);
                Settings::default()
            }
        }
    }

    /// Attaches an event bus and announces the loaded settings on it.
    pub fn with_event_bus(mut self, bus: EventBus) -> Self {
        bus.emit(SettingsEvent::Loaded(self.settings.clone()));
        self.event_bus = Some(bus);
        self
    }

    /// Registers an observer. It is immediately given the current settings.
    pub fn subscribe(&mut self, mut observer: impl SettingsObserver + 'static) {
        observer.settings_changed(&self.settings);
        self.observers.push(Box::new(observer));
    }

    /// Returns a copy of the current settings.
    pub fn get(&self) -> Settings {
        self.settings.clone()
    }

    /// Borrows the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Replaces the settings, persists them and notifies every observer.
    ///
    /// If writing to storage fails the new settings are still held and
    /// applied; the storage error is returned.
    pub fn set(&mut self, settings: Settings) -> CoreResult<()> {
        self.settings = settings;

        let persisted = self.persist();
        if let Err(e) = &persisted {
            tracing::error!("Failed to persist settings: {}", e);
        }

        for observer in &mut self.observers {
            observer.settings_changed(&self.settings);
        }
        if let Some(bus) = &self.event_bus {
            bus.emit(SettingsEvent::Changed(self.settings.clone()));
        }

        persisted
    }

    /// Cycles the color scheme `light -> dark -> system`.
    pub fn toggle_color_scheme(&mut self) -> CoreResult<()> {
        let mut settings = self.get();
        settings.color_scheme = settings.color_scheme.next();
        self.set(settings)
    }

    fn persist(&mut self) -> CoreResult<()> {
        let json = self.settings.to_json()?;
        self.storage.set_item(SETTINGS_KEY, &json)?;
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Consumes the store, returning its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }
}
