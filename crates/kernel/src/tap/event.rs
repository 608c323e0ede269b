//! The per-node event passed to listeners while a menu is loaded.

use crate::menu::{MenuFactory, MenuItem, NavigationNode};

/// Context handed to listeners for one node.
#[derive(Clone, Copy)]
pub struct NodeEvent<'a> {
    node: &'a dyn NavigationNode,
    factory: &'a dyn MenuFactory,
}

impl<'a> NodeEvent<'a> {
    pub fn new(node: &'a dyn NavigationNode, factory: &'a dyn MenuFactory) -> Self {
        Self { node, factory }
    }

    /// The node being converted.
    pub fn node(&self) -> &'a dyn NavigationNode {
        self.node
    }

    /// Factory for building replacement items.
    pub fn factory(&self) -> &'a dyn MenuFactory {
        self.factory
    }

    /// Build the item the loader would create for this node on its own.
    ///
    /// Useful for listeners that want to adjust the default item.
    pub fn default_item(&self) -> MenuItem {
        self.factory.create_item(self.node.name(), self.node.options())
    }
}

impl std::fmt::Debug for NodeEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeEvent")
            .field("node", &self.node.name())
            .field("menu_root", &self.node.is_menu_root())
            .finish()
    }
}

/// What the loader should do with a node.
///
/// `SkipNode` carries no item, so a skipped node can never also be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeDecision {
    /// Build the node (from the replacement, if given) and its children.
    Proceed(Option<MenuItem>),
    /// Build the node (from the replacement, if given) without its children.
    SkipChildren(Option<MenuItem>),
    /// Leave the node and its whole subtree out.
    SkipNode,
}

impl Default for NodeDecision {
    fn default() -> Self {
        Self::Proceed(None)
    }
}

impl NodeDecision {
    pub fn is_skip_node(&self) -> bool {
        matches!(self, Self::SkipNode)
    }

    pub fn is_skip_children(&self) -> bool {
        matches!(self, Self::SkipChildren(_))
    }

    /// The replacement item, if any.
    pub fn item(&self) -> Option<&MenuItem> {
        match self {
            Self::Proceed(item) | Self::SkipChildren(item) => item.as_ref(),
            Self::SkipNode => None,
        }
    }

    /// Keep the current replacement item (if any) but drop the children.
    pub fn skip_children(self) -> Self {
        match self {
            Self::Proceed(item) | Self::SkipChildren(item) => Self::SkipChildren(item),
            Self::SkipNode => Self::SkipNode,
        }
    }

    /// Replace the item, keeping the current children setting.
    pub fn with_item(self, item: MenuItem) -> Self {
        match self {
            Self::SkipChildren(_) => Self::SkipChildren(Some(item)),
            Self::Proceed(_) | Self::SkipNode => Self::Proceed(Some(item)),
        }
    }
}
