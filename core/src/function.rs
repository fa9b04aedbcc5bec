//! Function types, derived from declarations or described explicitly.
//!
//! Function types are never shared. Their equality ignores parameter names and
//! the originating declaration, so derive them freely and compare with `==`.

use alloc::vec::Vec;

use solty_types::{
    ArrayBase, DataLocation, DeclRef, Declaration, EventDefinition, FunctionDefinition,
    FunctionFlags, FunctionKind, FunctionType, FunctionTypeName, StateMutability, Type,
    VariableDeclaration, Visibility,
};

use crate::error::{Result, precondition};
use crate::provider::TypeProvider;

/// Everything needed to build a function type that has no declaration to
/// derive it from, such as the builtins.
///
/// Start from [`FunctionSignature::new`] and override what differs:
///
/// ```
/// # use solty_core::FunctionSignature;
/// # use solty_types::{FunctionKind, StateMutability};
/// let signature = FunctionSignature {
///     state_mutability: StateMutability::Pure,
///     ..FunctionSignature::new(FunctionKind::Keccak256)
/// };
/// assert!(signature.parameter_names.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FunctionSignature<'s, 'a> {
    pub parameter_types: &'s [&'a Type<'a>],
    pub return_parameter_types: &'s [&'a Type<'a>],
    /// Empty, or one name per parameter.
    pub parameter_names: &'s [&'s str],
    /// Empty, or one name per return parameter.
    pub return_parameter_names: &'s [&'s str],
    pub kind: FunctionKind,
    pub state_mutability: StateMutability,
    pub flags: FunctionFlags,
    pub declaration: Option<Declaration<'a>>,
}

impl<'s, 'a> FunctionSignature<'s, 'a> {
    /// A non-payable function of `kind` without parameters.
    pub fn new(kind: FunctionKind) -> Self {
        Self {
            parameter_types: &[],
            return_parameter_types: &[],
            parameter_names: &[],
            return_parameter_names: &[],
            kind,
            state_mutability: StateMutability::NonPayable,
            flags: FunctionFlags::empty(),
            declaration: None,
        }
    }
}

impl<'a> TypeProvider<'a> {
    /// The function type described by `signature`. Missing names become empty
    /// strings.
    pub fn function_type(&self, signature: FunctionSignature<'_, 'a>) -> Result<&'a Type<'a>> {
        let parameter_names = self.parameter_names(
            signature.parameter_names,
            signature.parameter_types.len(),
        )?;
        let return_parameter_names = self.parameter_names(
            signature.return_parameter_names,
            signature.return_parameter_types.len(),
        )?;

        Ok(self.alloc_fresh(Type::Function(FunctionType {
            parameter_types: self.arena.alloc_slice_copy(signature.parameter_types),
            return_parameter_types: self.arena.alloc_slice_copy(signature.return_parameter_types),
            parameter_names,
            return_parameter_names,
            kind: signature.kind,
            state_mutability: signature.state_mutability,
            flags: signature.flags,
            declaration: signature.declaration,
        })))
    }

    /// The type of a function definition, as seen from inside its contract
    /// (`is_internal`) or by external callers.
    pub fn function_type_for_definition(
        &self,
        definition: &'a FunctionDefinition<'a>,
        is_internal: bool,
    ) -> &'a Type<'a> {
        let kind = if is_internal {
            FunctionKind::Internal
        } else {
            FunctionKind::External
        };
        let (parameter_types, parameter_names) = self.split_variables(definition.parameters);
        let (return_parameter_types, return_parameter_names) =
            self.split_variables(definition.return_parameters);

        self.alloc_fresh(Type::Function(FunctionType {
            parameter_types,
            return_parameter_types,
            parameter_names,
            return_parameter_names,
            kind,
            state_mutability: definition.state_mutability,
            flags: FunctionFlags::empty(),
            declaration: Some(Declaration::Function(DeclRef::new(definition))),
        }))
    }

    /// The implicit getter of a public state variable.
    ///
    /// Every mapping level adds its key as a parameter and every array level
    /// adds a `uint256` index; byte arrays are returned whole. A struct result
    /// is returned member by member, leaving out mappings and arrays other
    /// than byte arrays. Returned reference types live in memory.
    pub fn function_type_for_getter(
        &self,
        variable: &'a VariableDeclaration<'a>,
    ) -> Result<&'a Type<'a>> {
        precondition!(
            variable.is_state_variable,
            "`{}` is not a state variable and has no getter",
            variable.name
        );

        let mut parameter_types = Vec::new();
        let mut result = variable.ty;
        loop {
            match result {
                Type::Mapping(mapping) => {
                    parameter_types
                        .push(self.with_location_if_reference(DataLocation::Memory, mapping.key));
                    result = mapping.value;
                }
                Type::Array(array) => match array.base {
                    ArrayBase::Element(element) => {
                        parameter_types.push(self.uint256());
                        result = element;
                    }
                    ArrayBase::Bytes | ArrayBase::String => break,
                },
                _ => break,
            }
        }

        let mut return_parameter_types = Vec::new();
        let mut return_parameter_names = Vec::new();
        if let Type::Struct(strukt) = result {
            for member in strukt.definition.get().members {
                let skipped = match member.ty {
                    Type::Mapping(_) => true,
                    Type::Array(array) => !array.is_byte_array(),
                    _ => false,
                };
                if !skipped {
                    return_parameter_types
                        .push(self.with_location_if_reference(DataLocation::Memory, member.ty));
                    return_parameter_names.push(member.name);
                }
            }
        } else {
            return_parameter_types
                .push(self.with_location_if_reference(DataLocation::Memory, result));
            return_parameter_names.push("");
        }

        let parameter_names = self
            .arena
            .alloc_slice_fill_copy(parameter_types.len(), "");
        Ok(self.alloc_fresh(Type::Function(FunctionType {
            parameter_types: self.arena.alloc_slice_copy(&parameter_types),
            return_parameter_types: self.arena.alloc_slice_copy(&return_parameter_types),
            parameter_names,
            return_parameter_names: self.arena.alloc_slice_copy(&return_parameter_names),
            kind: FunctionKind::External,
            state_mutability: StateMutability::View,
            flags: FunctionFlags::empty(),
            declaration: Some(Declaration::Variable(DeclRef::new(variable))),
        })))
    }

    /// The type of `emit E(...)`.
    pub fn function_type_for_event(&self, definition: &'a EventDefinition<'a>) -> &'a Type<'a> {
        let (parameter_types, parameter_names) = self.split_variables(definition.parameters);

        self.alloc_fresh(Type::Function(FunctionType {
            parameter_types,
            return_parameter_types: &[],
            parameter_names,
            return_parameter_names: &[],
            kind: FunctionKind::Event,
            state_mutability: StateMutability::NonPayable,
            flags: FunctionFlags::empty(),
            declaration: Some(Declaration::Event(DeclRef::new(definition))),
        }))
    }

    /// The type named by a function type name such as
    /// `function (uint) external returns (bool)`.
    pub fn function_type_for_type_name(&self, type_name: &FunctionTypeName<'a>) -> &'a Type<'a> {
        let kind = if type_name.visibility == Visibility::External {
            FunctionKind::External
        } else {
            FunctionKind::Internal
        };

        self.alloc_fresh(Type::Function(FunctionType {
            parameter_types: type_name.parameter_types,
            return_parameter_types: type_name.return_parameter_types,
            parameter_names: self
                .arena
                .alloc_slice_fill_copy(type_name.parameter_types.len(), ""),
            return_parameter_names: self
                .arena
                .alloc_slice_fill_copy(type_name.return_parameter_types.len(), ""),
            kind,
            state_mutability: type_name.state_mutability,
            flags: FunctionFlags::empty(),
            declaration: None,
        }))
    }

    /// A builtin function type given by elementary type names, e.g.
    /// `(["bytes memory"], ["bytes32"])` for `keccak256`.
    ///
    /// Each name is read with
    /// [`from_elementary_type_name_str`](TypeProvider::from_elementary_type_name_str).
    pub fn function_type_from_signature(
        &self,
        parameter_types: &[&str],
        return_parameter_types: &[&str],
        kind: FunctionKind,
        arbitrary_parameters: bool,
        state_mutability: StateMutability,
    ) -> Result<&'a Type<'a>> {
        let parameter_types = self.resolve_names(parameter_types)?;
        let return_parameter_types = self.resolve_names(return_parameter_types)?;
        let mut flags = FunctionFlags::empty();
        flags.set(FunctionFlags::ARBITRARY_PARAMETERS, arbitrary_parameters);

        self.function_type(FunctionSignature {
            parameter_types: &parameter_types,
            return_parameter_types: &return_parameter_types,
            state_mutability,
            flags,
            ..FunctionSignature::new(kind)
        })
    }

    fn resolve_names(&self, names: &[&str]) -> Result<Vec<&'a Type<'a>>> {
        names
            .iter()
            .map(|name| self.from_elementary_type_name_str(name))
            .collect()
    }

    fn parameter_names(&self, names: &[&str], len: usize) -> Result<&'a [&'a str]> {
        if names.is_empty() {
            return Ok(self.arena.alloc_slice_fill_copy(len, ""));
        }
        precondition!(
            names.len() == len,
            "{} names given for {len} parameters",
            names.len()
        );
        let names: Vec<&'a str> = names
            .iter()
            .map(|name| &*self.arena.alloc_str(name))
            .collect();
        Ok(self.arena.alloc_slice_copy(&names))
    }

    fn split_variables(
        &self,
        variables: &'a [VariableDeclaration<'a>],
    ) -> (&'a [&'a Type<'a>], &'a [&'a str]) {
        let types = self
            .arena
            .alloc_slice_fill_iter(variables.iter().map(|variable| variable.ty));
        let names = self
            .arena
            .alloc_slice_fill_iter(variables.iter().map(|variable| variable.name));
        (types, names)
    }
}
