//! Declaration records the registry keys types on.
//!
//! These are owned by the syntax tree, which outlives every type built from
//! them. The registry never looks inside a definition to compare two of them:
//! definitions are identities, and [`DeclRef`] compares by address.

use core::{fmt, hash, ops::Deref};

use crate::kind::StateMutability;
use crate::ty::Type;

/// Anything a [`DeclRef`] can point at.
pub trait NamedDeclaration {
    fn name(&self) -> &str;
}

/// A non-owning reference to a declaration with pointer-based equality.
///
/// Two `DeclRef`s are equal if and only if they point to the same
/// declaration, even if two distinct declarations happen to have the same
/// name and contents.
pub struct DeclRef<'a, T>(&'a T);

impl<'a, T> DeclRef<'a, T> {
    pub fn new(decl: &'a T) -> Self {
        Self(decl)
    }

    pub fn get(&self) -> &'a T {
        self.0
    }
}

impl<T> Clone for DeclRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DeclRef<'_, T> {}

impl<T> Deref for DeclRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.0
    }
}

impl<T> PartialEq for DeclRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0, other.0)
    }
}

impl<T> Eq for DeclRef<'_, T> {}

impl<T> hash::Hash for DeclRef<'_, T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.0, state)
    }
}

impl<T: NamedDeclaration> fmt::Debug for DeclRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:p}", self.0.name(), self.0)
    }
}

impl<'a, T> From<&'a T> for DeclRef<'a, T> {
    fn from(decl: &'a T) -> Self {
        Self(decl)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Default,
    Private,
    Internal,
    Public,
    External,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContractKind {
    #[default]
    Contract,
    Interface,
    Library,
}

/// A parsed source file.
#[derive(Debug)]
pub struct SourceUnit<'a> {
    pub path: &'a str,
}

#[derive(Debug)]
pub struct ContractDefinition<'a> {
    pub name: &'a str,
    pub kind: ContractKind,
}

#[derive(Debug)]
pub struct EnumDefinition<'a> {
    pub name: &'a str,
    pub members: &'a [&'a str],
}

#[derive(Debug)]
pub struct StructDefinition<'a> {
    pub name: &'a str,
    pub members: &'a [VariableDeclaration<'a>],
}

/// A variable with its resolved type: a parameter, a struct member or a
/// state variable.
#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub name: &'a str,
    pub ty: &'a Type<'a>,
    pub visibility: Visibility,
    pub is_state_variable: bool,
    pub is_indexed: bool,
}

impl<'a> VariableDeclaration<'a> {
    /// A local variable, parameter or member with default visibility.
    pub fn new(name: &'a str, ty: &'a Type<'a>) -> Self {
        Self {
            name,
            ty,
            visibility: Visibility::Default,
            is_state_variable: false,
            is_indexed: false,
        }
    }

    /// A public state variable, which gets an implicit getter.
    pub fn public_state(name: &'a str, ty: &'a Type<'a>) -> Self {
        Self {
            visibility: Visibility::Public,
            is_state_variable: true,
            ..Self::new(name, ty)
        }
    }
}

#[derive(Debug)]
pub struct FunctionDefinition<'a> {
    pub name: &'a str,
    pub parameters: &'a [VariableDeclaration<'a>],
    pub return_parameters: &'a [VariableDeclaration<'a>],
    pub visibility: Visibility,
    pub state_mutability: StateMutability,
}

#[derive(Debug)]
pub struct EventDefinition<'a> {
    pub name: &'a str,
    pub parameters: &'a [VariableDeclaration<'a>],
    pub is_anonymous: bool,
}

#[derive(Debug)]
pub struct ModifierDefinition<'a> {
    pub name: &'a str,
    pub parameters: &'a [VariableDeclaration<'a>],
}

/// A function type written in source, e.g. `function (uint) external returns (bool)`.
#[derive(Debug)]
pub struct FunctionTypeName<'a> {
    pub parameter_types: &'a [&'a Type<'a>],
    pub return_parameter_types: &'a [&'a Type<'a>],
    pub visibility: Visibility,
    pub state_mutability: StateMutability,
}

macro_rules! impl_named {
    ($($ty:ident => $field:ident),* $(,)?) => {
        $(
            impl NamedDeclaration for $ty<'_> {
                fn name(&self) -> &str {
                    self.$field
                }
            }
        )*
    };
}

impl_named! {
    SourceUnit => path,
    ContractDefinition => name,
    EnumDefinition => name,
    StructDefinition => name,
    VariableDeclaration => name,
    FunctionDefinition => name,
    EventDefinition => name,
    ModifierDefinition => name,
}

/// The declaration a function type was derived from.
///
/// Function types keep it for diagnostics and code generation; it is never
/// part of their equality.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Declaration<'a> {
    Function(DeclRef<'a, FunctionDefinition<'a>>),
    Variable(DeclRef<'a, VariableDeclaration<'a>>),
    Event(DeclRef<'a, EventDefinition<'a>>),
    Modifier(DeclRef<'a, ModifierDefinition<'a>>),
}

impl<'a> Declaration<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Declaration::Function(decl) => decl.get().name,
            Declaration::Variable(decl) => decl.get().name,
            Declaration::Event(decl) => decl.get().name,
            Declaration::Modifier(decl) => decl.get().name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decl_ref_identity() {
        let a = ContractDefinition {
            name: "C",
            kind: ContractKind::Contract,
        };
        let b = ContractDefinition {
            name: "C",
            kind: ContractKind::Contract,
        };

        // Same contents, different declarations.
        assert_ne!(DeclRef::new(&a), DeclRef::new(&b));
        assert_eq!(DeclRef::new(&a), DeclRef::from(&a));
        assert_eq!(DeclRef::new(&a).name, "C");
    }
}
