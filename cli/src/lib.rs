//! Solty CLI library.
//!
//! This crate provides the command-line interface for inspecting the type registry.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
