//! `cp <src> <dst>`: deep copy of a node within the tree

use crate::error::CommandError;
use crate::tree::path::split_parent;
use crate::tree::{NodeRef, ResolveError, Vfs};
use tracing::info;

pub fn cp(vfs: &mut Vfs, args: &[String]) -> Result<String, CommandError> {
    let (src, dst) = match args {
        [src, dst] => (src.as_str(), dst.as_str()),
        [] => {
            return Err(CommandError::Argument("cp: missing file operand".to_string()));
        }
        [src] => {
            return Err(CommandError::Argument(format!(
                "cp: missing destination file operand after '{}'",
                src
            )));
        }
        [_, _, extra, ..] => {
            return Err(CommandError::Argument(format!(
                "cp: extra operand '{}'",
                extra
            )));
        }
    };

    let (src_parent, src_name) = split_parent(src);
    let source = vfs
        .resolve(src_parent)
        .and_then(NodeRef::as_dir)
        .and_then(|dir| dir.get(src_name))
        .cloned()
        .ok_or_else(|| {
            CommandError::NotFound(format!(
                "cp: cannot stat '{}': No such file or directory",
                src
            ))
        })?;

    let (dst_parent, dst_name) = split_parent(dst);
    let name = if dst_name.is_empty() || dst_name == "." {
        src_name
    } else {
        dst_name
    };
    let dir = vfs.resolve_dir_mut(dst_parent).map_err(|e| match e {
        ResolveError::NotFound => CommandError::NotFound(format!(
            "cp: cannot stat '{}': No such file or directory",
            dst
        )),
        ResolveError::NotADirectory => {
            CommandError::NotADirectory(format!("cp: cannot stat '{}': Not a directory", dst))
        }
    })?;

    let replaced = dir.insert(name, source).is_some();
    info!(src, dst, replaced, "Copied node");
    Ok(format!("cp: '{}' -> '{}'", src, dst))
}
