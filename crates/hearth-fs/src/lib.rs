//! Filesystem layout bootstrapping and file utilities for hearth.
//!
//! Everything the CLI puts on disk goes through this crate:
//! - `layout`: root resolution and the fixed directory tree
//! - `ops`: recursive copy, clear, and write primitives
//! - `editor`: launching an external text editor
//! - `exit`: process exit helpers

pub mod editor;
pub mod error;
pub mod exit;
pub mod layout;
pub mod ops;

pub use error::{FsError, Result};
pub use layout::{Layout, Migration, resolve_root};
