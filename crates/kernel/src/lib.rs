//! Trovato Menu Library
//!
//! Converts trees of menu nodes into renderer-agnostic menu items, with a
//! create-item tap that lets plugins prune or replace entries on the way.
//! The `trovato-menu` binary renders menu documents from the command line.

pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod tap;

pub use config::Config;
pub use error::{DocumentError, LoaderError, LoaderResult};
pub use menu::{
    ItemFactory, MenuDocuments, MenuFactory, MenuItem, MenuOptions, NavigationNode, NodeLoader,
};
pub use models::{Menu, MenuNode};
pub use tap::{
    FnListener, HiddenNodeListener, NodeDecision, NodeEvent, NodeListener, TapDispatcher,
    TapRegistry,
};
