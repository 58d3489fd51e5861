//! JSON value <-> node tree conversion
//!
//! Objects become directories. String values under keys ending in `.bin` hold
//! base64 and are decoded to bytes, then to text according to [`DecodePolicy`].
//! Every other value is kept as-is.

use crate::error::DocumentError;
use crate::tree::{DirectoryNode, FileContent, FileNode, Node, Vfs};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reserved suffix marking base64-encoded file content
pub const BINARY_SUFFIX: &str = ".bin";

/// How decoded `.bin` bytes are turned into text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Invalid UTF-8 sequences are dropped
    #[default]
    Lossy,
    /// Invalid UTF-8 fails the load
    Strict,
}

impl DecodePolicy {
    pub fn decode(&self, bytes: &[u8]) -> Result<String, std::str::Utf8Error> {
        match self {
            DecodePolicy::Lossy => Ok(bytes
                .utf8_chunks()
                .map(|chunk| chunk.valid())
                .collect::<String>()),
            DecodePolicy::Strict => std::str::from_utf8(bytes).map(str::to_string),
        }
    }
}

fn is_binary_key(name: &str) -> bool {
    name.ends_with(BINARY_SUFFIX)
}

/// Build a tree from a parsed document.
pub fn decode_tree(raw: &Value, policy: DecodePolicy) -> Result<Vfs, DocumentError> {
    match raw {
        Value::Object(map) => Ok(Vfs::from_root(decode_dir(map, policy, "")?)),
        other => Err(DocumentError::Format(format!(
            "document root must be a JSON object, found {}",
            json_type_name(other)
        ))),
    }
}

fn decode_dir(
    map: &Map<String, Value>,
    policy: DecodePolicy,
    prefix: &str,
) -> Result<DirectoryNode, DocumentError> {
    let mut dir = DirectoryNode::new();
    for (name, value) in map {
        let path = format!("{}/{}", prefix, name);
        let node = match value {
            Value::Object(children) => Node::Directory(decode_dir(children, policy, &path)?),
            Value::String(encoded) if is_binary_key(name) => {
                Node::File(decode_binary(encoded, policy, &path)?)
            }
            Value::String(text) => Node::File(FileNode::text(text.clone())),
            other => Node::File(FileNode {
                content: FileContent::Value(other.clone()),
            }),
        };
        dir.insert(name.clone(), node);
    }
    Ok(dir)
}

fn decode_binary(encoded: &str, policy: DecodePolicy, path: &str) -> Result<FileNode, DocumentError> {
    let raw = STANDARD
        .decode(encoded.trim())
        .map_err(|e| DocumentError::Format(format!("{}: invalid base64: {}", path, e)))?;
    let text = policy
        .decode(&raw)
        .map_err(|e| DocumentError::Format(format!("{}: invalid UTF-8: {}", path, e)))?;
    Ok(FileNode::binary(raw, text))
}

/// Inverse of [`decode_tree`].
///
/// Binary files are re-encoded from their raw bytes, so a loaded document
/// encodes back to itself.
pub fn encode_tree(vfs: &Vfs) -> Value {
    Value::Object(encode_dir(vfs.root_dir()))
}

fn encode_dir(dir: &DirectoryNode) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, node) in dir.iter() {
        let value = match node {
            Node::Directory(children) => Value::Object(encode_dir(children)),
            Node::File(file) => encode_file(name, file),
        };
        map.insert(name.to_string(), value);
    }
    map
}

fn encode_file(name: &str, file: &FileNode) -> Value {
    match (&file.content, is_binary_key(name)) {
        (FileContent::Binary { raw, .. }, true) => Value::String(STANDARD.encode(raw)),
        (FileContent::Text(text), true) => Value::String(STANDARD.encode(text.as_bytes())),
        (FileContent::Binary { text, .. }, false) => Value::String(text.clone()),
        (FileContent::Text(text), false) => Value::String(text.clone()),
        (FileContent::Value(v), _) => v.clone(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
