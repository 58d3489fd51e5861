//! In-memory VFS tree
//!
//! The tree is an owned value threaded by reference through every command.

pub mod node;
pub mod path;

pub use node::{ContentKind, DirectoryNode, FileContent, FileNode, Node, NodeRef};
pub use path::ResolveError;

/// Root handle of the virtual filesystem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vfs {
    root: DirectoryNode,
}

impl Vfs {
    /// Empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_root(root: DirectoryNode) -> Self {
        Vfs { root }
    }

    pub fn root_dir(&self) -> &DirectoryNode {
        &self.root
    }

    pub fn root_dir_mut(&mut self) -> &mut DirectoryNode {
        &mut self.root
    }

    /// Resolve `path` from the root.
    pub fn resolve(&self, path: &str) -> Option<NodeRef<'_>> {
        path::resolve(path, &self.root)
    }

    /// Mutable node below the root; `None` for paths naming the root itself.
    pub fn resolve_mut(&mut self, path: &str) -> Option<&mut Node> {
        path::resolve_mut(path, &mut self.root)
    }

    /// Mutable directory at `path`, the root included.
    pub fn resolve_dir_mut(&mut self, path: &str) -> Result<&mut DirectoryNode, ResolveError> {
        path::resolve_dir_mut(path, &mut self.root)
    }
}
