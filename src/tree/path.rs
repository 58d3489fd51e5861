//! Path resolution over the node tree
//!
//! Paths are slash-delimited. Empty segments and `.` stay on the current node;
//! every other segment must name a child of the current directory. There is no
//! parent (`..`) navigation: a `..` segment is looked up like any other name.

use crate::tree::node::{DirectoryNode, Node, NodeRef};

/// Why a directory lookup failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// A segment is missing, or an intermediate segment is a file
    NotFound,
    /// The final segment names a file
    NotADirectory,
}

/// Segments of `path` that actually move the cursor
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".")
}

/// Resolve `path` starting at the directory `start`.
///
/// Returns `None` as soon as a segment is missing or a file would have to be
/// descended through.
pub fn resolve<'a>(path: &str, start: &'a DirectoryNode) -> Option<NodeRef<'a>> {
    let mut current = NodeRef::Directory(start);
    for segment in segments(path) {
        current = NodeRef::from(current.as_dir()?.get(segment)?);
    }
    Some(current)
}

/// Mutable access to a node strictly below `start`.
///
/// A path without segments names `start` itself and yields `None`, so the
/// starting directory can never be replaced through this handle.
pub fn resolve_mut<'a>(path: &str, start: &'a mut DirectoryNode) -> Option<&'a mut Node> {
    let mut rest: Vec<&str> = segments(path).collect();
    let last = rest.pop()?;
    let mut current = start;
    for segment in rest {
        current = current.get_mut(segment)?.as_dir_mut()?;
    }
    current.get_mut(last)
}

/// Mutable access to the directory at `path`, `start` itself included.
pub fn resolve_dir_mut<'a>(
    path: &str,
    start: &'a mut DirectoryNode,
) -> Result<&'a mut DirectoryNode, ResolveError> {
    let segments: Vec<&str> = segments(path).collect();
    let count = segments.len();
    let mut current = start;
    for (i, segment) in segments.into_iter().enumerate() {
        current = match current.get_mut(segment) {
            Some(Node::Directory(dir)) => dir,
            Some(Node::File(_)) if i + 1 == count => return Err(ResolveError::NotADirectory),
            Some(Node::File(_)) | None => return Err(ResolveError::NotFound),
        };
    }
    Ok(current)
}

/// Split a path into its parent path and final name component.
///
/// A bare name has the empty parent, which resolves to the root.
pub fn split_parent(path: &str) -> (&str, &str) {
    match path.rfind('/') {
        Some(0) => ("/", &path[1..]),
        Some(i) => (&path[..i], &path[i + 1..]),
        None => ("", path),
    }
}
