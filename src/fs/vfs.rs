//! Virtual File System
//!
//! Owns the node tree and the current working path. Path *resolution* is
//! pure string algebra and cannot fail; *navigation* checks the tree and
//! can. Commands resolve first, then navigate, so "bad syntax" never exists
//! and "missing target" is reported uniformly.

use std::collections::HashMap;

use super::types::{FsError, Node};

/// Starting (and `cd` default) working directory for every session.
pub const DEFAULT_HOME: &str = "/home/user";

/// In-memory hierarchical filesystem for one session.
pub struct VirtualFileSystem {
    root: Node,
    current_path: String,
}

impl VirtualFileSystem {
    /// Create a fresh tree: `/`, `/home/user` and `/tmp`, cwd `/home/user`.
    pub fn new() -> Self {
        let mut home = Node::directory("home");
        home.insert_child(Node::directory("user"));

        let mut root = Node::directory("/");
        root.insert_child(home);
        root.insert_child(Node::directory("tmp"));

        Self {
            root,
            current_path: DEFAULT_HOME.to_string(),
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Set the working directory. Callers (`cd`) validate that `path` is an
    /// existing directory before switching.
    pub fn set_current_path(&mut self, path: String) {
        self.current_path = path;
    }

    /// Walk an absolute path against the tree. `/` is the root itself;
    /// otherwise each non-empty segment is looked up in the children map of
    /// the node so far. Missing segments and segments addressed into a file
    /// both yield `None`.
    pub fn navigate(&self, path: &str) -> Option<&Node> {
        if path == "/" {
            return Some(&self.root);
        }
        let mut current = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match current {
                Node::Directory { children, .. } => current = children.get(segment)?,
                Node::File { .. } => return None,
            }
        }
        Some(current)
    }

    fn navigate_mut(&mut self, path: &str) -> Option<&mut Node> {
        if path == "/" {
            return Some(&mut self.root);
        }
        let mut current = &mut self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match current {
                Node::Directory { children, .. } => current = children.get_mut(segment)?,
                Node::File { .. } => return None,
            }
        }
        Some(current)
    }

    /// Turn a possibly relative path into an absolute one, without checking
    /// existence. Rules, in priority order: absolute paths pass through
    /// unchanged; empty or `.` is the cwd; bare `..` is the cwd's parent;
    /// a `./` prefix is stripped; a `../` prefix walks a segment stack from
    /// the cwd (`..` pops, `.` and empty segments are skipped, anything else
    /// is pushed); any other name is appended under the cwd.
    pub fn resolve_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            return path.to_string();
        }
        if path.is_empty() || path == "." {
            return self.current_path.clone();
        }
        if path == ".." {
            return Self::parent_path(&self.current_path);
        }

        let path = path.strip_prefix("./").unwrap_or(path);

        if path.starts_with("../") {
            let mut segments: Vec<&str> = self
                .current_path
                .split('/')
                .filter(|s| !s.is_empty())
                .collect();
            for segment in path.split('/') {
                match segment {
                    ".." => {
                        segments.pop();
                    }
                    "." | "" => {}
                    name => segments.push(name),
                }
            }
            return join_segments(&segments);
        }

        if self.current_path == "/" {
            format!("/{}", path)
        } else {
            format!("{}/{}", self.current_path, path)
        }
    }

    /// Absolute path with the last non-empty segment removed. The root's
    /// parent is the root.
    pub fn parent_path(path: &str) -> String {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() <= 1 {
            return "/".to_string();
        }
        join_segments(&segments[..segments.len() - 1])
    }

    /// Last non-empty segment of a path, or `/` for the root.
    pub fn base_name(path: &str) -> String {
        path.split('/')
            .filter(|s| !s.is_empty())
            .last()
            .unwrap_or("/")
            .to_string()
    }

    /// Join a child name onto an absolute directory path.
    pub fn join_path(base: &str, name: &str) -> String {
        if base == "/" {
            format!("/{}", name)
        } else {
            format!("{}/{}", base, name)
        }
    }

    /// Read a file's content at an absolute path.
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        match self.navigate(path) {
            None => Err(FsError::NotFound),
            Some(Node::Directory { .. }) => Err(FsError::IsDirectory),
            Some(Node::File { content, .. }) => Ok(content),
        }
    }

    /// Children map of the directory at an absolute path.
    pub fn read_dir(&self, path: &str) -> Result<&HashMap<String, Node>, FsError> {
        match self.navigate(path) {
            None => Err(FsError::NotFound),
            Some(Node::File { .. }) => Err(FsError::NotDirectory),
            Some(Node::Directory { children, .. }) => Ok(children),
        }
    }

    /// Create an empty directory at an absolute path. The parent must be an
    /// existing directory and the name must be free.
    pub fn make_directory(&mut self, path: &str) -> Result<(), FsError> {
        if path == "/" {
            return Err(FsError::AlreadyExists);
        }
        let name = Self::base_name(path);
        let parent = Self::parent_path(path);
        match self.navigate_mut(&parent) {
            None => Err(FsError::NotFound),
            Some(Node::File { .. }) => Err(FsError::NotDirectory),
            Some(Node::Directory { children, .. }) => {
                if children.contains_key(&name) {
                    return Err(FsError::AlreadyExists);
                }
                children.insert(name.clone(), Node::directory(name));
                Ok(())
            }
        }
    }

    /// Create an empty file at an absolute path if nothing is there yet.
    /// Idempotent: an existing entry (file or directory) is left untouched.
    pub fn touch_file(&mut self, path: &str) -> Result<(), FsError> {
        if path == "/" {
            return Ok(());
        }
        let name = Self::base_name(path);
        let parent = Self::parent_path(path);
        match self.navigate_mut(&parent) {
            None => Err(FsError::NotFound),
            Some(Node::File { .. }) => Err(FsError::NotDirectory),
            Some(Node::Directory { children, .. }) => {
                children
                    .entry(name.clone())
                    .or_insert_with(|| Node::file(name, ""));
                Ok(())
            }
        }
    }

    /// Create or overwrite the file at an absolute path with `content`.
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        if path == "/" {
            return Err(FsError::IsDirectory);
        }
        let name = Self::base_name(path);
        let parent = Self::parent_path(path);
        match self.navigate_mut(&parent) {
            None => Err(FsError::NotFound),
            Some(Node::File { .. }) => Err(FsError::NotDirectory),
            Some(Node::Directory { children, .. }) => {
                children.insert(name.clone(), Node::file(name, content));
                Ok(())
            }
        }
    }

    /// Remove the empty directory at an absolute path. The root is never
    /// removable.
    pub fn remove_directory(&mut self, path: &str) -> Result<(), FsError> {
        if path == "/" {
            return Err(FsError::NotEmpty);
        }
        let occupied = match self.navigate(path) {
            None => return Err(FsError::NotFound),
            Some(Node::File { .. }) => return Err(FsError::NotDirectory),
            Some(Node::Directory { children, .. }) => !children.is_empty(),
        };
        if occupied {
            return Err(FsError::NotEmpty);
        }
        self.detach(path);
        Ok(())
    }

    /// Remove the file at an absolute path. Refuses directories.
    pub fn remove_file(&mut self, path: &str) -> Result<(), FsError> {
        let is_directory = match self.navigate(path) {
            None => return Err(FsError::NotFound),
            Some(node) => node.is_directory(),
        };
        if is_directory {
            return Err(FsError::IsDirectory);
        }
        self.detach(path);
        Ok(())
    }

    /// Insert a node under the directory at `parent`, replacing any existing
    /// entry with the same name.
    pub fn attach(&mut self, parent: &str, node: Node) -> Result<(), FsError> {
        match self.navigate_mut(parent) {
            None => Err(FsError::NotFound),
            Some(Node::File { .. }) => Err(FsError::NotDirectory),
            Some(dir) => {
                dir.insert_child(node);
                Ok(())
            }
        }
    }

    /// Detach the node at an absolute path from its parent and return it.
    /// The root never detaches.
    pub fn detach(&mut self, path: &str) -> Option<Node> {
        if path == "/" {
            return None;
        }
        let name = Self::base_name(path);
        match self.navigate_mut(&Self::parent_path(path)) {
            Some(Node::Directory { children, .. }) => children.remove(&name),
            _ => None,
        }
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn join_segments(segments: &[&str]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_home_and_tmp() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.current_path(), "/home/user");
        assert!(fs.navigate("/home/user").is_some_and(Node::is_directory));
        assert!(fs.navigate("/tmp").is_some_and(Node::is_directory));
    }

    #[test]
    fn test_navigate_root_and_missing() {
        let fs = VirtualFileSystem::new();
        assert!(fs.navigate("/").is_some());
        assert!(fs.navigate("/nope").is_none());
        assert!(fs.navigate("/home/nope/deeper").is_none());
    }

    #[test]
    fn test_navigate_through_file_fails() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/tmp/f.txt", "x").unwrap();
        assert!(fs.navigate("/tmp/f.txt").is_some());
        assert!(fs.navigate("/tmp/f.txt/deeper").is_none());
    }

    #[test]
    fn test_navigate_collapses_empty_segments() {
        let fs = VirtualFileSystem::new();
        assert!(fs.navigate("//home///user").is_some());
    }

    #[test]
    fn test_resolve_absolute_passthrough() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path("/a/b"), "/a/b");
        // Idempotent on absolute paths.
        let once = fs.resolve_path("relative/name");
        assert_eq!(fs.resolve_path(&once), once);
    }

    #[test]
    fn test_resolve_dot_and_empty() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path(""), "/home/user");
        assert_eq!(fs.resolve_path("."), "/home/user");
    }

    #[test]
    fn test_resolve_dotdot() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path(".."), "/home");
        fs.set_current_path("/".to_string());
        assert_eq!(fs.resolve_path(".."), "/");
    }

    #[test]
    fn test_resolve_dot_slash_prefix() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path("./docs"), "/home/user/docs");
    }

    #[test]
    fn test_resolve_dotdot_slash_walk() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path("../other"), "/home/other");
        assert_eq!(fs.resolve_path("../../tmp"), "/tmp");
        assert_eq!(fs.resolve_path("../../../../x"), "/x");
        assert_eq!(fs.resolve_path("../.././tmp"), "/tmp");
    }

    #[test]
    fn test_resolve_plain_relative() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(fs.resolve_path("notes.txt"), "/home/user/notes.txt");
        fs.set_current_path("/".to_string());
        assert_eq!(fs.resolve_path("tmp"), "/tmp");
    }

    #[test]
    fn test_parent_path_and_base_name() {
        assert_eq!(VirtualFileSystem::parent_path("/a/b/c"), "/a/b");
        assert_eq!(VirtualFileSystem::parent_path("/a"), "/");
        assert_eq!(VirtualFileSystem::parent_path("/"), "/");
        assert_eq!(VirtualFileSystem::base_name("/a/b/c"), "c");
        assert_eq!(VirtualFileSystem::base_name("/"), "/");
    }

    #[test]
    fn test_make_directory() {
        let mut fs = VirtualFileSystem::new();
        fs.make_directory("/home/user/docs").unwrap();
        assert!(fs.navigate("/home/user/docs").is_some_and(Node::is_directory));
        assert_eq!(
            fs.make_directory("/home/user/docs"),
            Err(FsError::AlreadyExists)
        );
        assert_eq!(fs.make_directory("/nope/docs"), Err(FsError::NotFound));
        assert_eq!(fs.make_directory("/"), Err(FsError::AlreadyExists));
    }

    #[test]
    fn test_make_directory_under_file() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/tmp/f", "x").unwrap();
        assert_eq!(fs.make_directory("/tmp/f/d"), Err(FsError::NotDirectory));
    }

    #[test]
    fn test_touch_is_idempotent() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/tmp/f", "keep me").unwrap();
        fs.touch_file("/tmp/f").unwrap();
        assert_eq!(fs.read_file("/tmp/f"), Ok("keep me"));
        fs.touch_file("/tmp/new").unwrap();
        assert_eq!(fs.read_file("/tmp/new"), Ok(""));
        assert_eq!(fs.touch_file("/nope/f"), Err(FsError::NotFound));
    }

    #[test]
    fn test_write_file_overwrites() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/tmp/f", "one").unwrap();
        fs.write_file("/tmp/f", "two").unwrap();
        assert_eq!(fs.read_file("/tmp/f"), Ok("two"));
        assert_eq!(fs.write_file("/", "x"), Err(FsError::IsDirectory));
    }

    #[test]
    fn test_read_file_type_errors() {
        let fs = VirtualFileSystem::new();
        assert_eq!(fs.read_file("/tmp"), Err(FsError::IsDirectory));
        assert_eq!(fs.read_file("/nope"), Err(FsError::NotFound));
    }

    #[test]
    fn test_read_dir_type_errors() {
        let mut fs = VirtualFileSystem::new();
        fs.write_file("/tmp/f", "").unwrap();
        assert_eq!(fs.read_dir("/tmp/f"), Err(FsError::NotDirectory));
        assert_eq!(fs.read_dir("/nope"), Err(FsError::NotFound));
    }

    #[test]
    fn test_remove_directory_refuses_non_empty_and_root() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(fs.remove_directory("/home"), Err(FsError::NotEmpty));
        assert_eq!(fs.remove_directory("/"), Err(FsError::NotEmpty));
        fs.make_directory("/tmp/empty").unwrap();
        fs.remove_directory("/tmp/empty").unwrap();
        assert!(fs.navigate("/tmp/empty").is_none());
    }

    #[test]
    fn test_remove_file_refuses_directories() {
        let mut fs = VirtualFileSystem::new();
        assert_eq!(fs.remove_file("/tmp"), Err(FsError::IsDirectory));
        fs.write_file("/tmp/f", "x").unwrap();
        fs.remove_file("/tmp/f").unwrap();
        assert!(fs.navigate("/tmp/f").is_none());
    }

    #[test]
    fn test_attach_and_detach() {
        let mut fs = VirtualFileSystem::new();
        fs.attach("/tmp", Node::file("f", "hi")).unwrap();
        assert_eq!(fs.read_file("/tmp/f"), Ok("hi"));
        let node = fs.detach("/tmp/f").unwrap();
        assert_eq!(node.name(), "f");
        assert!(fs.navigate("/tmp/f").is_none());
        // The root never detaches.
        assert!(fs.detach("/").is_none());
        assert!(fs.navigate("/home").is_some());
    }
}
