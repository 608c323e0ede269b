//! Tap registry - holds the listeners for the create-item tap.
//!
//! Listeners are kept sorted by weight (lower = higher priority, called first).
//! Listeners with equal weight are called in registration order.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use super::NodeListener;

/// A registered listener with its priority.
#[derive(Clone)]
pub struct TapHandler {
    /// The listener implementation.
    pub listener: Arc<dyn NodeListener>,
    /// Weight for ordering (lower = higher priority).
    pub weight: i32,
}

impl std::fmt::Debug for TapHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TapHandler")
            .field("listener", &self.listener.name())
            .field("weight", &self.weight)
            .finish()
    }
}

/// Ordered listeners for the create-item tap.
///
/// Registration takes `&self` so listeners can be added while the registry
/// is already shared with a loader.
#[derive(Debug, Default)]
pub struct TapRegistry {
    handlers: RwLock<Vec<TapHandler>>,
}

impl TapRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener at the given weight.
    pub fn register(&self, listener: Arc<dyn NodeListener>, weight: i32) {
        debug!(listener = %listener.name(), weight, "registered menu listener");

        let mut handlers = self.handlers.write();
        handlers.push(TapHandler { listener, weight });
        // Stable sort keeps registration order within a weight.
        handlers.sort_by_key(|h| h.weight);
    }

    /// Register a listener and return the registry, for building at startup.
    pub fn with_listener(self, listener: impl NodeListener + 'static, weight: i32) -> Self {
        self.register(Arc::new(listener), weight);
        self
    }

    /// Snapshot of the handlers, in call order.
    ///
    /// The lock is released before the snapshot is returned, so listeners may
    /// register further listeners while a dispatch is running.
    pub fn handlers(&self) -> Vec<TapHandler> {
        self.handlers.read().clone()
    }

    /// Names of the registered listeners, in call order.
    pub fn listener_names(&self) -> Vec<String> {
        self.handlers
            .read()
            .iter()
            .map(|h| h.listener.name().to_string())
            .collect()
    }

    /// Get the count of registered listeners.
    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    /// Check if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}
