//! Markdown note files on disk, independent of the in-memory note collection.

pub mod error;
pub mod slug;
pub mod writer;

pub use error::VaultError;
pub use slug::slugify;
pub use writer::{render, VaultWriter};
