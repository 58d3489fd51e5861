//! Filesystem node types

/// How a file's content was stored in the backing document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Text,
    Binary,
}

/// File content as loaded from the document
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Plain string value
    Text(String),
    /// `.bin` value: the decoded bytes and their text rendering
    Binary { raw: Vec<u8>, text: String },
    /// Non-string, non-object JSON value, kept verbatim
    Value(serde_json::Value),
}

/// File node representation
#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    pub content: FileContent,
}

impl FileNode {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: FileContent::Text(content.into()),
        }
    }

    pub fn binary(raw: Vec<u8>, text: impl Into<String>) -> Self {
        Self {
            content: FileContent::Binary {
                raw,
                text: text.into(),
            },
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self.content {
            FileContent::Binary { .. } => ContentKind::Binary,
            FileContent::Text(_) | FileContent::Value(_) => ContentKind::Text,
        }
    }

    /// Text view of the content
    pub fn as_text(&self) -> String {
        match &self.content {
            FileContent::Text(s) => s.clone(),
            FileContent::Binary { text, .. } => text.clone(),
            FileContent::Value(v) => v.to_string(),
        }
    }
}

/// Directory node representation
///
/// Children keep insertion order; names are unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryNode {
    children: Vec<(String, Node)>,
}

impl DirectoryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Insert a child, overwriting any sibling with the same name in place.
    ///
    /// Returns the replaced node, if any.
    pub fn insert(&mut self, name: impl Into<String>, node: Node) -> Option<Node> {
        let name = name.into();
        match self.get_mut(&name) {
            Some(existing) => Some(std::mem::replace(existing, node)),
            None => {
                self.children.push((name, node));
                None
            }
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(n, node)| (n.as_str(), node))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// VFS node type
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    File(FileNode),
    Directory(DirectoryNode),
}

impl Node {
    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub fn as_dir(&self) -> Option<&DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_dir_mut(&mut self) -> Option<&mut DirectoryNode> {
        match self {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Node::File(file) => Some(file),
            Node::Directory(_) => None,
        }
    }
}

/// Borrowed view of a resolved node, including the root directory
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    File(&'a FileNode),
    Directory(&'a DirectoryNode),
}

impl<'a> NodeRef<'a> {
    pub fn is_dir(self) -> bool {
        matches!(self, NodeRef::Directory(_))
    }

    pub fn as_dir(self) -> Option<&'a DirectoryNode> {
        match self {
            NodeRef::Directory(dir) => Some(dir),
            NodeRef::File(_) => None,
        }
    }

    pub fn as_file(self) -> Option<&'a FileNode> {
        match self {
            NodeRef::File(file) => Some(file),
            NodeRef::Directory(_) => None,
        }
    }

    /// Owned deep copy of the node
    pub fn to_node(self) -> Node {
        match self {
            NodeRef::File(file) => Node::File(file.clone()),
            NodeRef::Directory(dir) => Node::Directory(dir.clone()),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::File(file) => NodeRef::File(file),
            Node::Directory(dir) => NodeRef::Directory(dir),
        }
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<DirectoryNode> for Node {
    fn from(dir: DirectoryNode) -> Self {
        Node::Directory(dir)
    }
}
