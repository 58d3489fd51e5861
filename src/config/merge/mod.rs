//! Source composition for [`ShellConfig`](crate::config::ShellConfig).

pub(crate) mod merge_policy;
pub mod service;
