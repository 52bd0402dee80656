use crate::{CatalogError, Observer};
use std::sync::Arc;

/// Broadcasts messages to registered observers.
///
/// Observers are shared handles: the subject keeps each one alive for as
/// long as it stays registered, but does not otherwise control its lifetime.
/// Registering the same observer twice delivers every message to it twice.
#[derive(Clone, Default)]
pub struct Subject {
    observers: Vec<Arc<dyn Observer>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer` to the end of the registry.
    pub fn attach(&mut self, observer: Arc<dyn Observer>) {
        self.observers.push(observer);
        tracing::debug!(observers = self.observers.len(), "observer attached");
    }

    /// Delivers `message` to every observer in attachment order.
    ///
    /// Delivery is synchronous. The first observer that fails stops the
    /// broadcast and its error is returned; later observers are not called.
    pub fn notify(&self, message: &str) -> Result<(), CatalogError> {
        tracing::debug!(observers = self.observers.len(), msg = message, "notifying observers");
        for (position, observer) in self.observers.iter().enumerate() {
            if let Err(err) = observer.update(message) {
                tracing::warn!(position, error = %err, "observer update failed");
                return Err(err);
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}
