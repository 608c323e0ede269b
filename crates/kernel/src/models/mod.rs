//! Menu content models.

pub mod menu_node;

pub use menu_node::{Attributes, Menu, MenuNode};
