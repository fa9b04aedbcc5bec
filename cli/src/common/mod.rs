//! Common utilities shared across CLI commands.

pub mod error;
pub mod panic;
pub mod session;

pub use error::CliResult;
