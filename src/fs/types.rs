//! File System Types
//!
//! Core types for the virtual file system.

use std::collections::HashMap;
use thiserror::Error;

/// File system errors. Display strings match the POSIX message suffixes the
/// command handlers interpolate into their output.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    #[error("No such file or directory")]
    NotFound,

    #[error("Not a directory")]
    NotDirectory,

    #[error("Is a directory")]
    IsDirectory,

    #[error("File exists")]
    AlreadyExists,

    #[error("Directory not empty")]
    NotEmpty,
}

/// A node in the virtual tree: either a directory holding named children or
/// a file holding text content.
///
/// A node's `name` always equals its key in the parent's children map; the
/// only code that inserts nodes ([`crate::fs::VirtualFileSystem`]) keeps the
/// two in sync.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Directory {
        name: String,
        children: HashMap<String, Node>,
    },
    File {
        name: String,
        content: String,
    },
}

impl Node {
    /// Create an empty directory node.
    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            children: HashMap::new(),
        }
    }

    /// Create a file node with the given content.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Node::File {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } => name,
            Node::File { name, .. } => name,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    /// Rename the node. Callers re-inserting a detached or cloned node under
    /// a new key go through this so name and key never diverge.
    pub fn rename(&mut self, new_name: impl Into<String>) {
        match self {
            Node::Directory { name, .. } => *name = new_name.into(),
            Node::File { name, .. } => *name = new_name.into(),
        }
    }

    pub fn children(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Directory { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    /// Child names in lexicographic order. Empty for files.
    pub fn sorted_child_names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = match self {
            Node::Directory { children, .. } => children.keys().collect(),
            Node::File { .. } => Vec::new(),
        };
        names.sort();
        names
    }

    /// Insert a child under a directory node, replacing any existing entry
    /// with the same name. No-op on file nodes; callers check first.
    pub fn insert_child(&mut self, child: Node) -> Option<Node> {
        match self {
            Node::Directory { children, .. } => {
                children.insert(child.name().to_string(), child)
            }
            Node::File { .. } => None,
        }
    }

    /// Total content bytes under this node (files count their content
    /// length, directories sum their descendants).
    pub fn size(&self) -> usize {
        match self {
            Node::File { content, .. } => content.len(),
            Node::Directory { children, .. } => children.values().map(Node::size).sum(),
        }
    }
}
