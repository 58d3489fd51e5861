//! Integration tests for the VFS shell

mod command_contracts;
mod document_loading;
mod path_properties;
mod script_execution;
mod support;
