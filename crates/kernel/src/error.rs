//! Menu loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a node tree into menu items.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoaderError {
    /// The data handed to the loader is not a navigation node.
    #[error("menu loader can only handle data implementing NavigationNode, \"{given}\" given")]
    UnsupportedInput { given: String },

    /// A listener skipped a node that is not a menu root, leaving nothing to return.
    #[error("no menu available to skip node '{node}'")]
    NoItemAvailable { node: String },
}

/// Errors raised while reading menu documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// No document exists for the requested menu.
    #[error("menu '{name}' not found in {}", .dir.display())]
    MenuNotFound { name: String, dir: PathBuf },

    /// The document's file extension is not a known format.
    #[error("unsupported menu document format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Result type alias using LoaderError.
pub type LoaderResult<T> = Result<T, LoaderError>;
