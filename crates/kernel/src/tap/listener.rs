//! Listener trait and the listeners shipped with the loader.

use super::{NodeDecision, NodeEvent};

/// A listener on the create-item tap.
///
/// Each listener receives the decision made by the listeners before it and
/// returns the decision to pass on. Returning `decision` unchanged abstains.
pub trait NodeListener: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Decide what to do with the node in `event`.
    fn on_create_item(&self, event: &NodeEvent<'_>, decision: NodeDecision) -> NodeDecision;
}

/// Adapts a closure into a listener.
pub struct FnListener<F> {
    name: String,
    func: F,
}

impl<F> FnListener<F>
where
    F: Fn(&NodeEvent<'_>, NodeDecision) -> NodeDecision + Send + Sync,
{
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> NodeListener for FnListener<F>
where
    F: Fn(&NodeEvent<'_>, NodeDecision) -> NodeDecision + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn on_create_item(&self, event: &NodeEvent<'_>, decision: NodeDecision) -> NodeDecision {
        (self.func)(event, decision)
    }
}

/// Leaves out nodes that are not displayable (display off, or no label).
///
/// A hidden menu root still produces an empty root item.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenNodeListener;

impl NodeListener for HiddenNodeListener {
    fn name(&self) -> &str {
        "hidden_node"
    }

    fn on_create_item(&self, event: &NodeEvent<'_>, decision: NodeDecision) -> NodeDecision {
        if event.node().options().display {
            decision
        } else {
            NodeDecision::SkipNode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ItemFactory;
    use crate::models::MenuNode;

    #[test]
    fn hidden_listener_skips_undisplayable() {
        let factory = ItemFactory;
        let hidden = MenuNode::new("draft").with_label("Draft").with_display(false);
        let event = NodeEvent::new(&hidden, &factory);

        let decision = HiddenNodeListener.on_create_item(&event, NodeDecision::default());
        assert!(decision.is_skip_node());
    }

    #[test]
    fn hidden_listener_abstains_for_visible() {
        let factory = ItemFactory;
        let visible = MenuNode::new("about").with_label("About");
        let event = NodeEvent::new(&visible, &factory);

        let decision = HiddenNodeListener.on_create_item(&event, NodeDecision::SkipChildren(None));
        assert_eq!(decision, NodeDecision::SkipChildren(None));
    }

    #[test]
    fn fn_listener_calls_closure() {
        let factory = ItemFactory;
        let node = MenuNode::new("about");
        let event = NodeEvent::new(&node, &factory);
        let listener = FnListener::new("skip_all", |_, _| NodeDecision::SkipNode);

        assert_eq!(listener.name(), "skip_all");
        assert!(
            listener
                .on_create_item(&event, NodeDecision::default())
                .is_skip_node()
        );
    }
}
