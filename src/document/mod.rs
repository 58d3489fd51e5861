//! Document persistence
//!
//! Loads the VFS from a JSON document on disk, seeding a default document when
//! none exists yet.

pub mod codec;

pub use codec::{decode_tree, encode_tree, DecodePolicy, BINARY_SUFFIX};

use crate::error::DocumentError;
use crate::tree::{DirectoryNode, FileNode, Vfs};
use std::path::Path;
use tracing::{debug, info};

/// Load the VFS from `path`, creating the seed document first if it is missing.
pub fn load_document(path: &Path, policy: DecodePolicy) -> Result<Vfs, DocumentError> {
    if !path.exists() {
        info!(path = %path.display(), "Document not found, creating default");
        create_default_document(path)?;
    }

    let raw = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    let vfs = decode_tree(&value, policy)?;
    info!(
        path = %path.display(),
        entries = vfs.root_dir().len(),
        policy = ?policy,
        "Loaded document"
    );
    Ok(vfs)
}

/// The tree written by [`create_default_document`]
pub fn default_tree() -> Vfs {
    let mut bin = DirectoryNode::new();
    bin.insert(
        "test.bin",
        FileNode::binary(b"binary data".to_vec(), "binary data").into(),
    );

    let mut docs = DirectoryNode::new();
    docs.insert("doc.txt", FileNode::text("Documentation here").into());

    let mut root = DirectoryNode::new();
    root.insert("readme.txt", FileNode::text("Welcome to VFS").into());
    root.insert("bin", bin.into());
    root.insert("docs", docs.into());
    Vfs::from_root(root)
}

/// Write the seed document to `path`.
pub fn create_default_document(path: &Path) -> Result<(), DocumentError> {
    save_document(path, &default_tree())
}

/// Write `vfs` to `path` as pretty-printed JSON.
pub fn save_document(path: &Path, vfs: &Vfs) -> Result<(), DocumentError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(&encode_tree(vfs))?;
    std::fs::write(path, text)?;
    debug!(path = %path.display(), "Wrote document");
    Ok(())
}
