//! Families that keep at most one object per key.
//!
//! String literals and fixed point numbers are keyed by plain values and live
//! in hash maps. The declaration-keyed families are few per session and are
//! found by a linear scan comparing whole `Type` values, which for them means
//! declaration identity plus the remaining fields.

use solty_types::{
    ContractDefinition, ContractType, DataLocation, DeclRef, EnumDefinition, EnumType,
    FixedPointType, MappingType, Reference, Signedness, StringLiteralType, StructDefinition,
    StructType, Type, TypeType,
};
use tracing::trace;

use crate::error::{Result, precondition};
use crate::provider::{Store, TypeProvider};

impl<'a> TypeProvider<'a> {
    /// The type of the string literal `value`, shared by every literal with
    /// the same text.
    pub fn string_literal_type(&self, value: &str) -> &'a Type<'a> {
        if let Some(ty) = self.string_literals.borrow().get(value).copied() {
            return ty;
        }

        let value: &'a str = self.arena.alloc_str(value);
        let ty = self.alloc(Type::StringLiteral(StringLiteralType { value }));
        self.string_literals.borrow_mut().insert(value, ty);
        trace!(value, "New string literal type");
        ty
    }

    /// `fixedMxN` / `ufixedMxN`.
    ///
    /// Signed and unsigned types live in separate tables and never alias.
    pub fn fixed_point_type(
        &self,
        total_bits: u16,
        fractional_digits: u16,
        signedness: Signedness,
    ) -> Result<&'a Type<'a>> {
        precondition!(
            (8..=256).contains(&total_bits) && total_bits % 8 == 0,
            "invalid fixed point width: {total_bits}"
        );
        precondition!(
            fractional_digits <= 80,
            "invalid number of fractional digits: {fractional_digits}"
        );

        let table = match signedness {
            Signedness::Signed => &self.signed_fixed_points,
            Signedness::Unsigned => &self.unsigned_fixed_points,
        };
        let mut table = table.borrow_mut();
        let ty = table
            .entry((total_bits, fractional_digits))
            .or_insert_with(|| {
                trace!(total_bits, fractional_digits, ?signedness, "New fixed point type");
                self.alloc(Type::FixedPoint(FixedPointType {
                    total_bits,
                    fractional_digits,
                    signedness,
                }))
            });
        Ok(*ty)
    }

    /// The type of a contract, or of `super` inside it when `is_super` is set.
    pub fn contract_type(
        &self,
        definition: &'a ContractDefinition<'a>,
        is_super: bool,
    ) -> &'a Type<'a> {
        let candidate = Type::Contract(ContractType {
            definition: DeclRef::new(definition),
            is_super,
        });
        self.intern(&self.contracts, candidate)
    }

    pub fn enum_type(&self, definition: &'a EnumDefinition<'a>) -> &'a Type<'a> {
        let candidate = Type::Enum(EnumType {
            definition: DeclRef::new(definition),
        });
        self.intern(&self.enums, candidate)
    }

    /// A struct at `location`, as a pointer. Other pointer-ness comes from
    /// [`TypeProvider::with_location`].
    pub fn struct_type(
        &self,
        definition: &'a StructDefinition<'a>,
        location: DataLocation,
    ) -> &'a Type<'a> {
        let candidate = Type::Struct(StructType {
            definition: DeclRef::new(definition),
            reference: Reference::pointer(location),
        });
        self.intern(&self.structs, candidate)
    }

    /// The type of the type name `actual` used as an expression.
    pub fn type_type(&self, actual: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(&self.type_types, Type::TypeType(TypeType { actual }))
    }

    /// `mapping(key => value)`, shared between value-equal keys and values
    /// even when those are distinct objects.
    pub fn mapping_type(&self, key: &'a Type<'a>, value: &'a Type<'a>) -> &'a Type<'a> {
        self.intern(&self.mappings, Type::Mapping(MappingType { key, value }))
    }

    fn intern(&self, store: &Store<'a>, candidate: Type<'a>) -> &'a Type<'a> {
        let mut store = store.borrow_mut();
        if let Some(existing) = store.iter().find(|existing| ***existing == candidate) {
            return *existing;
        }

        let ty = self.alloc(candidate);
        store.push(ty);
        trace!(category = ?ty.category(), entries = store.len(), "New cached type");
        ty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ProviderOptions;
    use crate::test_utils::init_test_logging;
    use alloc::string::{String, ToString};
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;
    use solty_types::{ContractKind, VariableDeclaration};

    #[test]
    fn test_string_literals_by_text() {
        init_test_logging();
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        let owned = String::from("hello");
        let a = types.string_literal_type(&owned);
        drop(owned);
        let b = types.string_literal_type("hello");
        let c = types.string_literal_type("world");

        assert!(Type::same(a, b));
        assert!(!Type::same(a, c));
        assert_eq!(a.to_string(), "literal_string \"hello\"");
        assert_eq!(types.stats().string_literals, 2);
    }

    #[test]
    fn test_fixed_point_signedness() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        let signed = types.fixed_point_type(128, 18, Signedness::Signed).unwrap();
        let unsigned = types
            .fixed_point_type(128, 18, Signedness::Unsigned)
            .unwrap();

        assert!(!Type::same(signed, unsigned));
        assert_eq!(signed.to_string(), "fixed128x18");
        assert_eq!(unsigned.to_string(), "ufixed128x18");
        assert!(Type::same(
            signed,
            types.fixed_point_type(128, 18, Signedness::Signed).unwrap()
        ));
        assert_eq!(types.stats().fixed_points, 2);
    }

    #[test]
    fn test_fixed_point_preconditions() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        assert!(types.fixed_point_type(0, 0, Signedness::Signed).is_err());
        assert!(types.fixed_point_type(100, 0, Signedness::Signed).is_err());
        assert!(types.fixed_point_type(8, 81, Signedness::Unsigned).is_err());
        assert!(types.fixed_point_type(8, 80, Signedness::Unsigned).is_ok());
        assert_eq!(types.stats().fixed_points, 1);
    }

    #[test]
    fn test_declaration_identity() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());
        let a: &ContractDefinition<'_> = arena.alloc(ContractDefinition {
            name: "A",
            kind: ContractKind::Contract,
        });
        // Same name, different declaration.
        let b: &ContractDefinition<'_> = arena.alloc(ContractDefinition {
            name: "A",
            kind: ContractKind::Contract,
        });

        assert!(Type::same(types.contract_type(a, false), types.contract_type(a, false)));
        assert!(!Type::same(types.contract_type(a, false), types.contract_type(b, false)));
        assert_eq!(types.stats().contracts, 2);
    }

    #[test]
    fn test_struct_per_location() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());
        let members = arena.alloc([VariableDeclaration::new("x", types.uint256())]);
        let s: &StructDefinition<'_> = arena.alloc(StructDefinition {
            name: "S",
            members,
        });

        let storage = types.struct_type(s, DataLocation::Storage);
        let memory = types.struct_type(s, DataLocation::Memory);
        assert!(!Type::same(storage, memory));
        assert!(Type::same(storage, types.struct_type(s, DataLocation::Storage)));
        assert_eq!(storage.to_string(), "struct S storage pointer");
        assert_eq!(memory.to_string(), "struct S memory");
    }

    #[test]
    fn test_type_type_by_value() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        let t1 = types.tuple_type(&[Some(types.bool_type())]);
        let t2 = types.tuple_type(&[Some(types.bool_type())]);
        assert!(Type::same(types.type_type(t1), types.type_type(t2)));
        assert_eq!(types.stats().type_types, 1);
    }
}
