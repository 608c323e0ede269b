//! Generic menu items - the renderer-agnostic output of the loader.
//!
//! A [`MenuItem`] knows nothing about where it came from. Renderers and
//! templates consume the item tree; they never see menu nodes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Attributes;

/// Options used to build a menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children_attributes: Attributes,
    #[serde(default)]
    pub display: bool,
    #[serde(default)]
    pub display_children: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub route_parameters: BTreeMap<String, String>,
    #[serde(default)]
    pub route_absolute: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub link_attributes: Attributes,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub label_attributes: Attributes,
}

/// A node of the generated menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(flatten)]
    pub options: MenuOptions,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a childless item.
    pub fn new(name: impl Into<String>, options: MenuOptions) -> Self {
        Self {
            name: name.into(),
            options,
            children: Vec::new(),
        }
    }

    /// Attach a child item after any existing children.
    pub fn add_child(&mut self, child: MenuItem) {
        self.children.push(child);
    }

    /// Get a direct child by name.
    pub fn child(&self, name: &str) -> Option<&MenuItem> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Names of the direct children, in order.
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// An item with no name and no children, as produced for a skipped menu root.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.children.is_empty()
    }

    /// Number of items in this subtree, including this one.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MenuItem::count).sum::<usize>()
    }
}

/// Creates menu items.
///
/// Implementations can decorate items (e.g., resolve routes into URIs)
/// before they are attached to the tree.
pub trait MenuFactory: Send + Sync {
    /// Create an item from a name and an options snapshot.
    fn create_item(&self, name: &str, options: MenuOptions) -> MenuItem;

    /// Create an empty root item.
    fn create_root(&self) -> MenuItem {
        self.create_item("", MenuOptions::default())
    }
}

/// Factory that builds items from the options unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemFactory;

impl MenuFactory for ItemFactory {
    fn create_item(&self, name: &str, options: MenuOptions) -> MenuItem {
        MenuItem::new(name, options)
    }
}
