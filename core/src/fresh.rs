//! Families that allocate a new object on every request.
//!
//! Nothing here is deduplicated: two calls with the same arguments return two
//! objects that compare equal with `==` but are never [`Type::same`].

use num_bigint::BigUint;
use num_rational::BigRational;
use solty_types::{
    ArenaRational, ArenaUint, ArrayBase, ArrayType, Category, DataLocation, DeclRef, MagicKind,
    MagicType, ModifierDefinition, ModifierType, ModuleType, RationalNumberType, Reference,
    SourceUnit, TupleType, Type,
};
use tracing::trace;

use crate::error::{InternalCompilerError, Result, precondition};
use crate::provider::TypeProvider;

impl<'a> TypeProvider<'a> {
    pub(crate) fn alloc_fresh(&self, ty: Type<'a>) -> &'a Type<'a> {
        self.fresh.set(self.fresh.get() + 1);
        trace!(category = ?ty.category(), "New fresh type");
        self.alloc(ty)
    }

    /// A tuple of `components`; `None` marks an empty slot.
    pub fn tuple_type(&self, components: &[Option<&'a Type<'a>>]) -> &'a Type<'a> {
        let components = self.arena.alloc_slice_copy(components);
        self.alloc_fresh(Type::Tuple(TupleType { components }))
    }

    /// A new `bytes` or `string` at `location`.
    ///
    /// The storage and memory variants are also available as singletons, see
    /// [`TypeProvider::bytes_type`].
    pub fn byte_array_type(&self, location: DataLocation, is_string: bool) -> &'a Type<'a> {
        let base = if is_string {
            ArrayBase::String
        } else {
            ArrayBase::Bytes
        };
        self.alloc_fresh(Type::Array(ArrayType {
            reference: Reference::pointer(location),
            base,
            length: None,
        }))
    }

    /// A dynamically sized `base[]`.
    pub fn array_type(&self, location: DataLocation, base: &'a Type<'a>) -> &'a Type<'a> {
        self.alloc_fresh(Type::Array(ArrayType {
            reference: Reference::pointer(location),
            base: ArrayBase::Element(base),
            length: None,
        }))
    }

    /// `base[length]`.
    pub fn static_array_type(
        &self,
        location: DataLocation,
        base: &'a Type<'a>,
        length: &BigUint,
    ) -> &'a Type<'a> {
        let length = ArenaUint::alloc(self.arena, length);
        self.alloc_fresh(Type::Array(ArrayType {
            reference: Reference::pointer(location),
            base: ArrayBase::Element(base),
            length: Some(length),
        }))
    }

    /// The type of a number literal with the exact value `value`.
    pub fn rational_number_type(
        &self,
        value: &BigRational,
        compatible_bytes_type: Option<&'a Type<'a>>,
    ) -> &'a Type<'a> {
        let value = ArenaRational::alloc(self.arena, value);
        self.alloc_fresh(Type::RationalNumber(RationalNumberType {
            value,
            compatible_bytes_type,
        }))
    }

    pub fn module_type(&self, source_unit: &'a SourceUnit<'a>) -> &'a Type<'a> {
        self.alloc_fresh(Type::Module(ModuleType {
            source_unit: DeclRef::new(source_unit),
        }))
    }

    pub fn modifier_type(&self, definition: &'a ModifierDefinition<'a>) -> &'a Type<'a> {
        let parameter_types = self
            .arena
            .alloc_slice_fill_iter(definition.parameters.iter().map(|parameter| parameter.ty));
        self.alloc_fresh(Type::Modifier(ModifierType {
            definition: DeclRef::new(definition),
            parameter_types,
        }))
    }

    /// `type(C)` for the contract type `contract`.
    pub fn meta_type(&self, contract: &'a Type<'a>) -> Result<&'a Type<'a>> {
        precondition!(
            contract.category() == Category::Contract,
            "only contracts are supported for meta types, got `{contract}`"
        );
        Ok(self.alloc_fresh(Type::Magic(MagicType {
            kind: MagicKind::MetaType,
            type_argument: Some(contract),
        })))
    }

    /// `ty` moved to `location`.
    ///
    /// Returns `ty` itself when it already has this location and pointer-ness,
    /// otherwise a new copy. Copies are not shared, even between identical
    /// requests. Elements of arrays are moved along with the array.
    pub fn with_location(
        &self,
        ty: &'a Type<'a>,
        location: DataLocation,
        is_pointer: bool,
    ) -> Result<&'a Type<'a>> {
        let reference = Reference::new(location, is_pointer);
        match ty.reference() {
            None => Err(InternalCompilerError::precondition(alloc::format!(
                "only arrays and structs have a data location, got `{ty}`"
            ))),
            Some(current) if current == reference => Ok(ty),
            Some(_) => Ok(self.relocate(ty, reference)),
        }
    }

    /// `ty` moved to `location` as a pointer if it is a reference type,
    /// otherwise `ty` unchanged.
    pub fn with_location_if_reference(
        &self,
        location: DataLocation,
        ty: &'a Type<'a>,
    ) -> &'a Type<'a> {
        let reference = Reference::pointer(location);
        match ty.reference() {
            Some(current) if current != reference => self.relocate(ty, reference),
            _ => ty,
        }
    }

    fn relocate(&self, ty: &'a Type<'a>, reference: Reference) -> &'a Type<'a> {
        let relocated = match *ty {
            Type::Array(array) => {
                let base = match array.base {
                    ArrayBase::Element(element) => ArrayBase::Element(
                        self.with_location_if_reference(reference.location, element),
                    ),
                    base => base,
                };
                Type::Array(ArrayType {
                    reference,
                    base,
                    ..array
                })
            }
            other => match other.relocated(reference) {
                Some(relocated) => relocated,
                None => return ty,
            },
        };

        self.relocations.set(self.relocations.get() + 1);
        trace!(from = ?ty.reference(), to = ?reference, "Relocated {ty}");
        self.alloc(relocated)
    }
}
