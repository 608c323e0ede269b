//! Menu node model.
//!
//! A menu node is one navigational entry: a name, a label, a link target
//! (either a URI or a named route), HTML attribute bags for the rendered
//! element, and an ordered list of child nodes. A [`Menu`] is the root node
//! of a named menu (e.g., "main", "footer").

use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::menu::{MenuOptions, NavigationNode};

/// HTML attribute map (attribute name -> value).
pub type Attributes = BTreeMap<String, String>;

/// A single navigational entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Identifier assigned by the content repository, if persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Machine name, also used as the generated item's name.
    #[serde(default)]
    pub name: String,

    /// Display text.
    #[serde(default)]
    pub label: String,

    /// Absolute or relative link target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Route name, an alternative to `uri`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    /// Parameters used when generating the route URL.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub route_parameters: BTreeMap<String, String>,

    /// Whether the generated route URL should be absolute.
    #[serde(default)]
    pub route_absolute: bool,

    /// Attributes of the rendered menu element (e.g., `class`, `style`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: Attributes,

    /// Attributes of the element wrapping the children.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children_attributes: Attributes,

    /// Attributes of the link element.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub link_attributes: Attributes,

    /// Attributes of the label element.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub label_attributes: Attributes,

    /// Whether this node is rendered at all.
    #[serde(default = "default_true")]
    pub display: bool,

    /// Whether the children of this node are rendered.
    #[serde(default = "default_true")]
    pub display_children: bool,

    /// Values not otherwise modeled, for use by listeners and renderers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extras: BTreeMap<String, JsonValue>,

    /// Child nodes, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

fn default_true() -> bool {
    true
}

impl MenuNode {
    /// Create a node with the given name and default settings.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            label: String::new(),
            uri: None,
            route: None,
            route_parameters: BTreeMap::new(),
            route_absolute: false,
            attributes: Attributes::new(),
            children_attributes: Attributes::new(),
            link_attributes: Attributes::new(),
            label_attributes: Attributes::new(),
            display: true,
            display_children: true,
            extras: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_route_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.route_parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_route_absolute(mut self, absolute: bool) -> Self {
        self.route_absolute = absolute;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_children_attributes(mut self, attributes: Attributes) -> Self {
        self.children_attributes = attributes;
        self
    }

    pub fn with_link_attributes(mut self, attributes: Attributes) -> Self {
        self.link_attributes = attributes;
        self
    }

    pub fn with_label_attributes(mut self, attributes: Attributes) -> Self {
        self.label_attributes = attributes;
        self
    }

    pub fn with_display(mut self, display: bool) -> Self {
        self.display = display;
        self
    }

    pub fn with_display_children(mut self, display_children: bool) -> Self {
        self.display_children = display_children;
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.extras.insert(key.into(), value);
        self
    }

    /// Append a child and return `self` for chaining.
    pub fn with_child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_id(&mut self, id: Option<Uuid>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_uri(&mut self, uri: Option<String>) {
        self.uri = uri;
    }

    pub fn set_route(&mut self, route: Option<String>) {
        self.route = route;
    }

    pub fn set_route_parameters(&mut self, parameters: BTreeMap<String, String>) {
        self.route_parameters = parameters;
    }

    pub fn set_route_absolute(&mut self, absolute: bool) {
        self.route_absolute = absolute;
    }

    pub fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub fn set_children_attributes(&mut self, attributes: Attributes) {
        self.children_attributes = attributes;
    }

    pub fn set_link_attributes(&mut self, attributes: Attributes) {
        self.link_attributes = attributes;
    }

    pub fn set_label_attributes(&mut self, attributes: Attributes) {
        self.label_attributes = attributes;
    }

    pub fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    pub fn set_display_children(&mut self, display_children: bool) {
        self.display_children = display_children;
    }

    pub fn set_extras(&mut self, extras: BTreeMap<String, JsonValue>) {
        self.extras = extras;
    }

    /// Get a single element attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Get a single element attribute, falling back to `default`.
    pub fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }

    /// Set a single element attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child node and return a reference to it.
    pub fn add_child(&mut self, child: MenuNode) -> &mut MenuNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Remove the first child equal to `child`.
    ///
    /// Returns false (and leaves the children untouched) if no such child exists.
    pub fn remove_child(&mut self, child: &MenuNode) -> bool {
        match self.children.iter().position(|c| c == child) {
            Some(index) => {
                self.children.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether this node can be displayed: it is set to display and has a label.
    pub fn is_displayable(&self) -> bool {
        self.display && !self.label.is_empty()
    }

    /// Snapshot of the options used to build a menu item from this node.
    ///
    /// The snapshot is owned; changing it does not affect the node.
    pub fn options(&self) -> MenuOptions {
        MenuOptions {
            uri: self.uri.clone(),
            route: self.route.clone(),
            label: self.label.clone(),
            attributes: self.attributes.clone(),
            children_attributes: self.children_attributes.clone(),
            display: self.is_displayable(),
            display_children: self.display_children,
            route_parameters: self.route_parameters.clone(),
            route_absolute: self.route_absolute,
            link_attributes: self.link_attributes.clone(),
            label_attributes: self.label_attributes.clone(),
        }
    }
}

impl NavigationNode for MenuNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn options(&self) -> MenuOptions {
        MenuNode::options(self)
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn NavigationNode> + '_> {
        Box::new(self.children.iter().map(|c| c as &dyn NavigationNode))
    }
}

/// Root node of a named menu.
///
/// A menu whose node gets skipped by a listener still produces an empty root
/// item, so renderers always receive a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu(MenuNode);

impl Menu {
    /// Create an empty menu with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(MenuNode::new(name))
    }

    /// Consume the menu, returning its root node.
    pub fn into_node(self) -> MenuNode {
        self.0
    }
}

impl From<MenuNode> for Menu {
    fn from(node: MenuNode) -> Self {
        Self(node)
    }
}

impl Deref for Menu {
    type Target = MenuNode;

    fn deref(&self) -> &MenuNode {
        &self.0
    }
}

impl DerefMut for Menu {
    fn deref_mut(&mut self) -> &mut MenuNode {
        &mut self.0
    }
}

impl NavigationNode for Menu {
    fn name(&self) -> &str {
        &self.0.name
    }

    fn options(&self) -> MenuOptions {
        self.0.options()
    }

    fn children(&self) -> Box<dyn Iterator<Item = &dyn NavigationNode> + '_> {
        NavigationNode::children(&self.0)
    }

    fn is_menu_root(&self) -> bool {
        true
    }
}
