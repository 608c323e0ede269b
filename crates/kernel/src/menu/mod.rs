//! Menu system for navigation trees.
//!
//! Menus are stored as trees of menu nodes and provide:
//! - Conversion into renderer-agnostic menu items
//! - A create-item tap so plugins can prune or replace entries
//! - Menu documents read from a directory

mod document;
mod item;
mod loader;
mod node;

pub use document::{DocumentFormat, MenuDocuments};
pub use item::{ItemFactory, MenuFactory, MenuItem, MenuOptions};
pub use loader::NodeLoader;
pub use node::NavigationNode;
