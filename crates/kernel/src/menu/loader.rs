//! Node loader - converts a navigation node tree into a menu item tree.
//!
//! The tree is walked depth-first, pre-order. Before an item is built for a
//! node, the create-item tap runs; its listeners can leave the node out,
//! leave its children out, or hand over a ready-made item.

use std::any::{Any, type_name};
use std::sync::Arc;

use tracing::debug;

use super::{ItemFactory, MenuFactory, MenuItem, NavigationNode};
use crate::error::{LoaderError, LoaderResult};
use crate::models::{Menu, MenuNode};
use crate::tap::{NodeDecision, NodeEvent, TapDispatcher, TapRegistry};

/// Builds menu items from navigation nodes.
///
/// The loader keeps no per-call state, so one instance can serve concurrent
/// loads as long as the node trees are not mutated meanwhile.
#[derive(Clone)]
pub struct NodeLoader {
    factory: Arc<dyn MenuFactory>,
    dispatcher: TapDispatcher,
}

impl NodeLoader {
    /// Create a loader using the given item factory and tap dispatcher.
    pub fn new(factory: Arc<dyn MenuFactory>, dispatcher: TapDispatcher) -> Self {
        Self {
            factory,
            dispatcher,
        }
    }

    /// Create a loader with the default item factory.
    pub fn with_registry(registry: Arc<TapRegistry>) -> Self {
        Self::new(Arc::new(ItemFactory), TapDispatcher::new(registry))
    }

    /// Get the tap dispatcher.
    pub fn dispatcher(&self) -> &TapDispatcher {
        &self.dispatcher
    }

    /// Whether `data` is something this loader can convert.
    pub fn supports<T: Any>(&self, data: &T) -> bool {
        as_navigation_node(data).is_some()
    }

    /// Load a menu item tree from arbitrary data.
    ///
    /// Accepts [`Menu`], [`MenuNode`] and boxed [`NavigationNode`]s; anything
    /// else fails with [`LoaderError::UnsupportedInput`] before any listener runs.
    pub fn load<T: Any>(&self, data: &T) -> LoaderResult<MenuItem> {
        let Some(node) = as_navigation_node(data) else {
            return Err(LoaderError::UnsupportedInput {
                given: type_name::<T>().to_string(),
            });
        };
        self.load_node(node)
    }

    /// Load a menu item tree from a navigation node.
    ///
    /// Fails with [`LoaderError::NoItemAvailable`] if a listener skips `node`
    /// itself and it is not a menu root. Skipped nodes further down the tree
    /// are simply left out of their parent.
    pub fn load_node(&self, node: &dyn NavigationNode) -> LoaderResult<MenuItem> {
        if node.name().is_empty() {
            return Err(LoaderError::UnsupportedInput {
                given: "navigation node without a name".to_string(),
            });
        }

        let Some(item) = self.build(node)? else {
            return Err(LoaderError::NoItemAvailable {
                node: node.name().to_string(),
            });
        };

        debug!(node = %node.name(), items = item.count(), "menu loaded");
        Ok(item)
    }

    /// Build the item for `node` and its subtree, or `None` if it was skipped.
    fn build(&self, node: &dyn NavigationNode) -> LoaderResult<Option<MenuItem>> {
        let event = NodeEvent::new(node, self.factory.as_ref());

        let (replacement, skip_children) = match self.dispatcher.dispatch(&event) {
            NodeDecision::SkipNode => {
                if node.is_menu_root() {
                    debug!(node = %node.name(), "menu root skipped, using empty root");
                    return Ok(Some(self.factory.create_root()));
                }
                debug!(node = %node.name(), "menu node skipped");
                return Ok(None);
            }
            NodeDecision::Proceed(item) => (item, false),
            NodeDecision::SkipChildren(item) => (item, true),
        };

        let mut item = match replacement {
            Some(item) => item,
            None => self.factory.create_item(node.name(), node.options()),
        };

        if skip_children {
            return Ok(Some(item));
        }

        for child in node.children() {
            if child.name().is_empty() {
                debug!(parent = %node.name(), "ignoring child node without a name");
                continue;
            }
            if let Some(child_item) = self.build(child)?
                && !child_item.is_empty()
            {
                item.add_child(child_item);
            }
        }

        Ok(Some(item))
    }
}

impl std::fmt::Debug for NodeLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeLoader")
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

impl Default for NodeLoader {
    fn default() -> Self {
        Self::new(Arc::new(ItemFactory), TapDispatcher::empty())
    }
}

/// View `data` as a navigation node if its type is one the loader knows.
fn as_navigation_node<T: Any>(data: &T) -> Option<&dyn NavigationNode> {
    let data = data as &dyn Any;

    if let Some(menu) = data.downcast_ref::<Menu>() {
        return Some(menu);
    }
    if let Some(node) = data.downcast_ref::<MenuNode>() {
        return Some(node);
    }
    data.downcast_ref::<Box<dyn NavigationNode>>()
        .map(|boxed| boxed.as_ref())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::MenuOptions;
    use crate::tap::{FnListener, NodeListener};

    fn main_menu() -> Menu {
        let mut menu = Menu::new("main");
        menu.add_child(MenuNode::new("about").with_label("About"));
        menu.add_child(MenuNode::new("contact").with_label("Contact"));
        menu
    }

    fn loader_with(listener: impl NodeListener + 'static) -> NodeLoader {
        NodeLoader::with_registry(Arc::new(TapRegistry::new().with_listener(listener, 0)))
    }

    #[test]
    fn load_without_listeners_copies_tree() {
        let item = NodeLoader::default().load(&main_menu()).unwrap();

        assert_eq!(item.name, "main");
        assert_eq!(item.child_names(), vec!["about", "contact"]);
        assert_eq!(item.child("about").unwrap().options.label, "About");
    }

    #[test]
    fn load_rejects_unsupported_data() {
        let loader = NodeLoader::default();
        assert!(!loader.supports(&"main"));

        let err = loader.load(&"main").unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedInput { .. }));
        assert!(err.to_string().contains("&str"));
    }

    #[test]
    fn load_rejects_unnamed_node() {
        let err = NodeLoader::default().load(&MenuNode::new("")).unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedInput { .. }));
    }

    #[test]
    fn supports_boxed_nodes() {
        let boxed: Box<dyn NavigationNode> = Box::new(MenuNode::new("about"));
        let loader = NodeLoader::default();

        assert!(loader.supports(&boxed));
        assert_eq!(loader.load(&boxed).unwrap().name, "about");
    }

    #[test]
    fn skipped_child_is_left_out() {
        let loader = loader_with(FnListener::new("skip_contact", |event, decision| {
            if event.node().name() == "contact" {
                NodeDecision::SkipNode
            } else {
                decision
            }
        }));

        let item = loader.load(&main_menu()).unwrap();
        assert_eq!(item.child_names(), vec!["about"]);
    }

    #[test]
    fn skipped_menu_root_yields_empty_item() {
        let loader = loader_with(FnListener::new("skip_all", |_, _| NodeDecision::SkipNode));

        let item = loader.load(&main_menu()).unwrap();
        assert!(item.is_empty());
        assert_eq!(item.name, "");
    }

    #[test]
    fn skipped_plain_node_fails() {
        let loader = loader_with(FnListener::new("skip_all", |_, _| NodeDecision::SkipNode));
        let node = main_menu().into_node();

        let err = loader.load(&node).unwrap_err();
        assert_eq!(
            err,
            LoaderError::NoItemAvailable {
                node: "main".to_string()
            }
        );
    }

    #[test]
    fn skip_children_keeps_node() {
        let loader = loader_with(FnListener::new("prune", |_, decision| decision.skip_children()));

        let item = loader.load(&main_menu()).unwrap();
        assert_eq!(item.name, "main");
        assert!(item.children.is_empty());
    }

    #[test]
    fn replacement_still_gets_children() {
        let loader = loader_with(FnListener::new("rename_root", |event, decision| {
            if event.node().is_menu_root() {
                let options = MenuOptions {
                    label: "Site".to_string(),
                    ..Default::default()
                };
                decision.with_item(event.factory().create_item("site", options))
            } else {
                decision
            }
        }));

        let item = loader.load(&main_menu()).unwrap();
        assert_eq!(item.name, "site");
        assert_eq!(item.options.label, "Site");
        assert_eq!(item.child_names(), vec!["about", "contact"]);
    }

    #[test]
    fn unnamed_children_are_ignored() {
        let mut menu = main_menu();
        menu.add_child(MenuNode::new(""));

        let item = NodeLoader::default().load(&menu).unwrap();
        assert_eq!(item.children.len(), 2);
    }
}
