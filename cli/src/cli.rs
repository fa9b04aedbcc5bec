//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand, ValueEnum};
use solty_types::{FunctionKind, StateMutability};

/// Solty - inspect the type registry of the contract compiler
#[derive(Parser, Debug)]
#[command(name = "solty", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub session: SessionArgs,
}

/// Sizing hints for the session; they never change the output.
#[derive(Args, Debug, Default, Clone)]
pub struct SessionArgs {
    /// Bytes reserved up front for the type arena
    #[arg(long, global = true, value_name = "BYTES")]
    pub arena_capacity: Option<usize>,

    /// Initial capacity of the string literal table
    #[arg(long, global = true, value_name = "N")]
    pub string_literal_capacity: Option<usize>,

    /// Initial capacity of each declaration-keyed store
    #[arg(long, global = true, value_name = "N")]
    pub declaration_capacity: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve elementary type names such as `uint`, `bytes32` or `string memory`
    Resolve(ResolveArgs),

    /// Build a function type from elementary parameter and return type names
    Signature(SignatureArgs),
}

/// Arguments for the `resolve` command.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Type names to resolve
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Print registry statistics after the types
    #[arg(long)]
    pub stats: bool,
}

/// Arguments for the `signature` command.
#[derive(Args, Debug)]
pub struct SignatureArgs {
    /// Comma-separated parameter type names
    #[arg(long, value_delimiter = ',')]
    pub params: Vec<String>,

    /// Comma-separated return type names
    #[arg(long, value_delimiter = ',')]
    pub returns: Vec<String>,

    /// How the function is called
    #[arg(long, default_value = "internal")]
    pub kind: Kind,

    /// State mutability of the function
    #[arg(long, default_value = "nonpayable")]
    pub mutability: Mutability,

    /// Accept any number of arguments of any type
    #[arg(long)]
    pub arbitrary_parameters: bool,
}

/// Function kinds selectable from the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Kind {
    #[default]
    Internal,
    External,
    Event,
}

impl From<Kind> for FunctionKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Internal => FunctionKind::Internal,
            Kind::External => FunctionKind::External,
            Kind::Event => FunctionKind::Event,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Mutability {
    Pure,
    View,
    #[default]
    Nonpayable,
    Payable,
}

impl From<Mutability> for StateMutability {
    fn from(mutability: Mutability) -> Self {
        match mutability {
            Mutability::Pure => StateMutability::Pure,
            Mutability::View => StateMutability::View,
            Mutability::Nonpayable => StateMutability::NonPayable,
            Mutability::Payable => StateMutability::Payable,
        }
    }
}
