//! Trovato menu test utilities.
//!
//! Helpers for integration testing: menu fixtures, a builder for nested
//! node trees, and a listener that records what it was offered.

use std::sync::Arc;

use parking_lot::Mutex;
use uuid::Uuid;

use trovato_menu::{Menu, MenuNode, NodeDecision, NodeEvent, NodeListener};

/// Create a persisted-looking node with an id, label and URI derived from its name.
pub fn test_node(name: &str) -> MenuNode {
    MenuNode::new(name)
        .with_id(Uuid::now_v7())
        .with_label(title_case(name))
        .with_uri(format!("/{name}"))
}

/// The "main" menu with "about" and "contact" entries.
pub fn main_menu() -> Menu {
    TestMenu::new("main")
        .child(test_node("about"))
        .child(test_node("contact"))
        .build()
}

/// A three-level menu:
///
/// ```text
/// main
/// ├── products
/// │   ├── widgets
/// │   └── gadgets
/// │       └── mini
/// ├── blog
/// └── contact
/// ```
pub fn nested_menu() -> Menu {
    let gadgets = test_node("gadgets").with_child(test_node("mini"));
    let products = test_node("products")
        .with_child(test_node("widgets"))
        .with_child(gadgets);

    TestMenu::new("main")
        .child(products)
        .child(test_node("blog"))
        .child(test_node("contact"))
        .build()
}

/// A test menu builder for creating menu fixtures.
#[derive(Debug, Clone)]
pub struct TestMenu {
    root: MenuNode,
}

impl TestMenu {
    pub fn new(name: &str) -> Self {
        Self {
            root: MenuNode::new(name).with_label(title_case(name)),
        }
    }

    /// Append a child node.
    pub fn child(mut self, node: MenuNode) -> Self {
        self.root.children.push(node);
        self
    }

    /// Append a plain child created with [`test_node`].
    pub fn entry(self, name: &str) -> Self {
        self.child(test_node(name))
    }

    /// Hide the menu root itself.
    pub fn hidden(mut self) -> Self {
        self.root.display = false;
        self
    }

    pub fn build(self) -> Menu {
        Menu::from(self.root)
    }
}

/// A listener that records the name of every node it is offered and abstains.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener {
    seen: Arc<Mutex<Vec<String>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the nodes offered so far, in dispatch order.
    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().clone()
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }
}

impl NodeListener for RecordingListener {
    fn name(&self) -> &str {
        "recording"
    }

    fn on_create_item(&self, event: &NodeEvent<'_>, decision: NodeDecision) -> NodeDecision {
        self.seen.lock().push(event.node().name().to_string());
        decision
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
