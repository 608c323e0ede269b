//! Tap system for menu extension points.
//!
//! While a menu is loaded, every node is offered to the listeners of the
//! create-item tap. Listeners are called in weight order (lower = higher
//! priority) and can skip the node, skip its children, or supply their own
//! item.

mod dispatcher;
mod event;
mod listener;
mod registry;

pub use dispatcher::TapDispatcher;
pub use event::{NodeDecision, NodeEvent};
pub use listener::{FnListener, HiddenNodeListener, NodeListener};
pub use registry::{TapHandler, TapRegistry};
