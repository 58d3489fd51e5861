//! Shared access to a VFS from several threads
//!
//! The shell itself is single-threaded. Embedders that share one tree between
//! threads go through [`SharedVfs`], which guards the whole tree with a single
//! read-write lock: read-only commands run under the read guard, `cp` under the
//! write guard.

use crate::commands;
use crate::error::CommandError;
use crate::tree::Vfs;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a lock-guarded tree
#[derive(Clone, Default)]
pub struct SharedVfs {
    inner: Arc<RwLock<Vfs>>,
}

impl SharedVfs {
    pub fn new(vfs: Vfs) -> Self {
        Self {
            inner: Arc::new(RwLock::new(vfs)),
        }
    }

    /// Execute an engine command, taking the write guard only for mutations.
    pub fn execute(&self, name: &str, args: &[String]) -> Result<String, CommandError> {
        if commands::is_mutating(name) {
            let mut vfs = self.inner.write();
            commands::execute(&mut vfs, name, args)
        } else {
            let vfs = self.inner.read();
            commands::execute_read_only(&vfs, name, args)
        }
    }

    /// Copy of the current tree
    pub fn snapshot(&self) -> Vfs {
        self.inner.read().clone()
    }
}
