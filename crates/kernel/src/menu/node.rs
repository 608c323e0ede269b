//! The navigation node capability.

use super::MenuOptions;

/// Anything the loader can turn into a menu item.
///
/// Children are typed, so a node can only ever yield other navigation nodes.
/// Trees must be acyclic; the loader recurses without cycle detection.
pub trait NavigationNode {
    /// Name of the node, used as the item name. Must not be empty.
    fn name(&self) -> &str;

    /// Options snapshot for building the item.
    fn options(&self) -> MenuOptions;

    /// Child nodes, in display order.
    fn children(&self) -> Box<dyn Iterator<Item = &dyn NavigationNode> + '_>;

    /// Whether this node is the root of a named menu.
    fn is_menu_root(&self) -> bool {
        false
    }
}
