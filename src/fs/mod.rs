//! File System Module
//!
//! The virtual file system backing the terminal: a single in-memory node
//! tree with path resolution and navigation primitives. No knowledge of
//! commands lives here.

pub mod types;
pub mod vfs;

pub use types::{FsError, Node};
pub use vfs::{VirtualFileSystem, DEFAULT_HOME};
