//! Type representations for the semantic analysis of contracts.
//!
//! This crate only describes types; it never decides which objects are shared.
//! The registry in `solty-core` creates every [`Type`] in an arena and hands
//! out `&'a Type<'a>` references that stay valid for the whole session.
//!
//! # Example
//!
//! ```
//! use solty_types::{IntegerType, Signedness, Type};
//!
//! let uint = Type::Integer(IntegerType { bits: 256, signedness: Signedness::Unsigned });
//! assert_eq!(uint.to_string(), "uint256");
//! ```

#![no_std]
extern crate alloc;

pub mod decl;
mod display;
mod flags;
mod kind;
pub mod num;
mod ty;

pub use decl::{
    ContractDefinition, ContractKind, DeclRef, Declaration, EnumDefinition, EventDefinition,
    FunctionDefinition, FunctionTypeName, ModifierDefinition, NamedDeclaration, SourceUnit,
    StructDefinition, VariableDeclaration, Visibility,
};
pub use flags::FunctionFlags;
pub use kind::{Category, DataLocation, FunctionKind, MagicKind, Signedness, StateMutability};
pub use num::{ArenaRational, ArenaUint};
pub use ty::{
    AddressType, ArrayBase, ArrayType, ContractType, EnumType, FixedBytesType, FixedPointType,
    FunctionType, IntegerType, MagicType, MappingType, ModifierType, ModuleType,
    RationalNumberType, Reference, StringLiteralType, StructType, TupleType, Type, TypeType,
};

// Types are copied around freely and live in an arena that never runs destructors.
static_assertions::assert_impl_all!(Type<'static>: Copy);
static_assertions::const_assert!(core::mem::size_of::<Type<'static>>() <= 128);
static_assertions::const_assert!(!core::mem::needs_drop::<Type<'static>>());
