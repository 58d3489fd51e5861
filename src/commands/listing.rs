//! Read-only structural commands: `ls`, `cd`, `tree`

use crate::error::CommandError;
use crate::tree::{DirectoryNode, Node, NodeRef, Vfs};

fn path_arg<'a>(args: &'a [String], default: &'a str) -> &'a str {
    args.first().map(String::as_str).unwrap_or(default)
}

/// `ls [path]`: child names of a directory, in stored order.
pub fn ls(vfs: &Vfs, args: &[String]) -> Result<String, CommandError> {
    let path = path_arg(args, ".");
    match vfs.resolve(path) {
        Some(NodeRef::Directory(dir)) => Ok(dir.names().collect::<Vec<_>>().join(" ")),
        Some(NodeRef::File(_)) => Ok(path.to_string()),
        None => Err(CommandError::NotFound(format!(
            "ls: cannot access '{}': No such file or directory",
            path
        ))),
    }
}

/// `cd [path]`: validates the target only. The shell keeps no cursor.
pub fn cd(vfs: &Vfs, args: &[String]) -> Result<String, CommandError> {
    let path = path_arg(args, "/");
    if path == ".." {
        return Err(CommandError::UpFromRoot);
    }
    match vfs.resolve(path) {
        Some(NodeRef::Directory(_)) => Ok(format!("cd: {}", path)),
        Some(NodeRef::File(_)) => Err(CommandError::NotADirectory(format!(
            "cd: not a directory: {}",
            path
        ))),
        None => Err(CommandError::NotFound(format!(
            "cd: no such directory: {}",
            path
        ))),
    }
}

/// `tree [path]`: box-drawing rendering of a directory's descendants.
pub fn tree(vfs: &Vfs, args: &[String]) -> Result<String, CommandError> {
    let path = path_arg(args, ".");
    match vfs.resolve(path) {
        Some(NodeRef::Directory(dir)) => Ok(render_tree(dir)),
        Some(NodeRef::File(_)) => Err(CommandError::NotADirectory(format!(
            "tree: '{}': Not a directory",
            path
        ))),
        None => Err(CommandError::NotFound(format!(
            "tree: cannot access '{}': No such file or directory",
            path
        ))),
    }
}

/// Render `dir` depth-first, one entry per line, without a trailing newline.
pub fn render_tree(dir: &DirectoryNode) -> String {
    let mut output = String::new();
    render_children(dir, "", &mut output);
    if output.ends_with('\n') {
        output.pop();
    }
    output
}

fn render_children(dir: &DirectoryNode, prefix: &str, output: &mut String) {
    let count = dir.len();
    for (i, (name, node)) in dir.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(name);
        output.push('\n');

        if let Node::Directory(children) = node {
            let child_prefix = if is_last {
                format!("{}    ", prefix)
            } else {
                format!("{}│   ", prefix)
            };
            render_children(children, &child_prefix, output);
        }
    }
}
