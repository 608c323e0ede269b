#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Menu node model tests.

use std::collections::BTreeMap;

use trovato_menu::{Menu, MenuNode, NavigationNode};
use trovato_menu_test_utils::{TestMenu, nested_menu, test_node};

#[test]
fn test_fixture_nodes_are_persisted_and_displayable() {
    let node = test_node("about");

    assert!(node.id.is_some());
    assert_eq!(node.label, "About");
    assert!(node.is_displayable());
}

#[test]
fn test_options_snapshot_covers_all_fields() {
    let mut link = BTreeMap::new();
    link.insert("rel".to_string(), "nofollow".to_string());
    let mut label = BTreeMap::new();
    label.insert("class".to_string(), "label".to_string());
    let mut children = BTreeMap::new();
    children.insert("class".to_string(), "submenu".to_string());

    let node = MenuNode::new("blog")
        .with_label("Blog")
        .with_uri("/blog")
        .with_route("blog_index")
        .with_route_parameter("page", "1")
        .with_route_absolute(true)
        .with_attribute("id", "blog")
        .with_children_attributes(children.clone())
        .with_link_attributes(link.clone())
        .with_label_attributes(label.clone())
        .with_display_children(false);

    let options = node.options();
    assert_eq!(options.uri.as_deref(), Some("/blog"));
    assert_eq!(options.route.as_deref(), Some("blog_index"));
    assert_eq!(options.label, "Blog");
    assert_eq!(options.attributes.get("id").map(String::as_str), Some("blog"));
    assert_eq!(options.children_attributes, children);
    assert!(options.display);
    assert!(!options.display_children);
    assert_eq!(options.route_parameters.get("page").map(String::as_str), Some("1"));
    assert!(options.route_absolute);
    assert_eq!(options.link_attributes, link);
    assert_eq!(options.label_attributes, label);
}

#[test]
fn test_extras_do_not_leak_into_options() {
    let node = test_node("about").with_extra("icon", serde_json::json!("info"));

    assert_eq!(node.extras.get("icon"), Some(&serde_json::json!("info")));
    let options = serde_json::to_value(node.options()).unwrap();
    assert!(options.get("icon").is_none());
}

#[test]
fn test_navigation_children_in_order() {
    let menu = nested_menu();
    let names: Vec<_> = NavigationNode::children(&menu).map(|c| c.name()).collect();

    assert_eq!(names, vec!["products", "blog", "contact"]);
}

#[test]
fn test_menu_builder() {
    let menu = TestMenu::new("footer").entry("imprint").entry("privacy").build();

    assert_eq!(menu.name, "footer");
    assert_eq!(menu.label, "Footer");
    assert!(menu.is_menu_root());
    assert_eq!(menu.children.len(), 2);
}

#[test]
fn test_menu_round_trips_through_json() {
    let menu = nested_menu();
    let json = serde_json::to_string(&menu).unwrap();
    let parsed: Menu = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, menu);
}
