//! Configuration sources.

pub mod environment;
pub mod local_file;
