//! Tap dispatcher - runs the create-item listeners for one node.
//!
//! Dispatch is synchronous: every listener runs, in weight order, before the
//! loader looks at the final decision.

use std::sync::Arc;

use tracing::trace;

use super::{NodeDecision, NodeEvent, TapRegistry};

/// Dispatcher for the create-item tap.
#[derive(Debug, Clone)]
pub struct TapDispatcher {
    registry: Arc<TapRegistry>,
}

impl TapDispatcher {
    /// Create a new tap dispatcher.
    pub fn new(registry: Arc<TapRegistry>) -> Self {
        Self { registry }
    }

    /// Create a dispatcher with no listeners.
    pub fn empty() -> Self {
        Self::new(Arc::new(TapRegistry::new()))
    }

    /// Get the tap registry for handler introspection.
    pub fn registry(&self) -> &TapRegistry {
        &self.registry
    }

    /// Dispatch an event to all listeners and return the final decision.
    ///
    /// Each listener gets the decision returned by the previous one; the
    /// first listener starts from [`NodeDecision::Proceed`] without an item.
    pub fn dispatch(&self, event: &NodeEvent<'_>) -> NodeDecision {
        let handlers = self.registry.handlers();
        let mut decision = NodeDecision::default();

        for handler in &handlers {
            decision = handler.listener.on_create_item(event, decision);
            trace!(
                listener = %handler.listener.name(),
                node = %event.node().name(),
                skip_node = decision.is_skip_node(),
                skip_children = decision.is_skip_children(),
                "menu listener ran"
            );
        }

        decision
    }
}

impl Default for TapDispatcher {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::{ItemFactory, MenuFactory, MenuOptions};
    use crate::models::MenuNode;
    use crate::tap::FnListener;

    #[test]
    fn dispatch_without_listeners_proceeds() {
        let dispatcher = TapDispatcher::empty();
        let node = MenuNode::new("about");
        let event = NodeEvent::new(&node, &ItemFactory);

        assert_eq!(dispatcher.dispatch(&event), NodeDecision::Proceed(None));
    }

    #[test]
    fn later_listener_sees_earlier_decision() {
        let registry = TapRegistry::new()
            .with_listener(
                FnListener::new("replace", |event, decision| {
                    decision.with_item(
                        event
                            .factory()
                            .create_item("custom", MenuOptions::default()),
                    )
                }),
                0,
            )
            .with_listener(
                FnListener::new("prune", |_, decision| decision.skip_children()),
                1,
            );
        let dispatcher = TapDispatcher::new(Arc::new(registry));
        let node = MenuNode::new("about");
        let event = NodeEvent::new(&node, &ItemFactory);

        let decision = dispatcher.dispatch(&event);
        assert!(decision.is_skip_children());
        assert_eq!(decision.item().unwrap().name, "custom");
    }

    #[test]
    fn later_listener_can_undo_skip() {
        let registry = TapRegistry::new()
            .with_listener(FnListener::new("skip", |_, _| NodeDecision::SkipNode), 0)
            .with_listener(FnListener::new("restore", |_, _| NodeDecision::default()), 5);
        let dispatcher = TapDispatcher::new(Arc::new(registry));
        let node = MenuNode::new("about");
        let event = NodeEvent::new(&node, &ItemFactory);

        assert_eq!(dispatcher.dispatch(&event), NodeDecision::default());
    }

    #[test]
    fn registry_accessor_returns_same_registry() {
        let registry = Arc::new(TapRegistry::new().with_listener(
            FnListener::new("noop", |_, decision| decision),
            0,
        ));
        let dispatcher = TapDispatcher::new(Arc::clone(&registry));

        assert_eq!(dispatcher.registry().len(), registry.len());
    }
}
