//! Event system for settings notifications.
//!
//! ## Learning: Observer Pattern in Rust
//!
//! Synchronous observers (see [`crate::store::SettingsObserver`]) run inside
//! `set` and are how the theme is reapplied. This bus is the asynchronous
//! side: anything that wants to react later (a status line, a logger, a
//! test) subscribes to a `tokio::sync::broadcast` channel and receives
//! events as values.

use tokio::sync::broadcast;

use crate::settings::Settings;

/// Events emitted by the settings store.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEvent {
    /// Settings were loaded from storage (or defaults were used)
    Loaded(Settings),
    /// Settings were replaced through `set`
    Changed(Settings),
}

/// Event bus for broadcasting settings events.
///
/// Lagged receivers don't block senders; they skip ahead.
pub struct EventBus {
    sender: broadcast::Sender<SettingsEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(64);
        Self { sender }
    }

    /// Emits an event to all subscribers.
    pub fn emit(&self, event: SettingsEvent) {
        // No receivers is fine
        let _ = self.sender.send(event);
    }

    /// Subscribes to all future events.
    pub fn subscribe(&self) -> broadcast::Receiver<SettingsEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

/// Helper for processing events asynchronously.
///
/// ```ignore
/// let mut handler = EventHandler::new(bus.subscribe());
/// tokio::spawn(async move {
///     while let Some(event) = handler.next().await {
///         if let SettingsEvent::Changed(settings) = event {
///             tracing::info!("theme is now {}", settings.theme);
///         }
///     }
/// });
/// ```
pub struct EventHandler {
    receiver: broadcast::Receiver<SettingsEvent>,
}

impl EventHandler {
    pub fn new(receiver: broadcast::Receiver<SettingsEvent>) -> Self {
        Self { receiver }
    }

    /// Waits for the next event. Returns `None` once every sender is gone.
    pub async fn next(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Settings event handler lagged, missed {} events", n);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Takes the next queued event without waiting, for synchronous callers.
    pub fn try_next(&mut self) -> Option<SettingsEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    tracing::warn!("Settings event handler lagged, missed {} events", n);
                    continue;
                }
                Err(_) => return None,
            }
        }
    }
}
