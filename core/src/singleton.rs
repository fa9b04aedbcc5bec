//! Types that exist exactly once per session.

use bumpalo::Bump;
use solty_types::{
    AddressType, ArrayBase, ArrayType, DataLocation, FixedBytesType, IntegerType, MagicKind,
    MagicType, Reference, Signedness, StateMutability, TupleType, Type,
};

use crate::error::{InternalCompilerError, Result, precondition};
use crate::provider::TypeProvider;

const WIDTHS: usize = 32;

/// Every fixed-cardinality family, built eagerly by [`SingletonTable::new`].
pub(crate) struct SingletonTable<'a> {
    bool_type: &'a Type<'a>,
    inaccessible_dynamic: &'a Type<'a>,
    address: &'a Type<'a>,
    payable_address: &'a Type<'a>,
    bytes_storage: &'a Type<'a>,
    bytes_memory: &'a Type<'a>,
    string_storage: &'a Type<'a>,
    string_memory: &'a Type<'a>,
    empty_tuple: &'a Type<'a>,
    /// `int8` ... `int256`, indexed by `bits / 8 - 1`.
    ints: [&'a Type<'a>; WIDTHS],
    /// `uint8` ... `uint256`, indexed by `bits / 8 - 1`.
    uints: [&'a Type<'a>; WIDTHS],
    /// `bytes1` ... `bytes32`, indexed by `bytes - 1`.
    fixed_bytes: [&'a Type<'a>; WIDTHS],
    magic: [&'a Type<'a>; MagicKind::SINGLETONS.len()],
}

impl<'a> SingletonTable<'a> {
    pub(crate) const LEN: usize = 9 + 3 * WIDTHS + MagicKind::SINGLETONS.len();

    pub(crate) fn new(arena: &'a Bump) -> Self {
        Self {
            bool_type: alloc(arena, Type::Bool),
            inaccessible_dynamic: alloc(arena, Type::InaccessibleDynamic),
            address: alloc(arena, address(StateMutability::NonPayable)),
            payable_address: alloc(arena, address(StateMutability::Payable)),
            bytes_storage: alloc(arena, byte_array(DataLocation::Storage, ArrayBase::Bytes)),
            bytes_memory: alloc(arena, byte_array(DataLocation::Memory, ArrayBase::Bytes)),
            string_storage: alloc(arena, byte_array(DataLocation::Storage, ArrayBase::String)),
            string_memory: alloc(arena, byte_array(DataLocation::Memory, ArrayBase::String)),
            empty_tuple: alloc(arena, Type::Tuple(TupleType { components: &[] })),
            ints: integer_types(arena, Signedness::Signed),
            uints: integer_types(arena, Signedness::Unsigned),
            fixed_bytes: core::array::from_fn(|index| {
                alloc(
                    arena,
                    Type::FixedBytes(FixedBytesType {
                        bytes: index as u8 + 1,
                    }),
                )
            }),
            magic: MagicKind::SINGLETONS.map(|kind| {
                alloc(
                    arena,
                    Type::Magic(MagicType {
                        kind,
                        type_argument: None,
                    }),
                )
            }),
        }
    }
}

fn alloc<'a>(arena: &'a Bump, ty: Type<'a>) -> &'a Type<'a> {
    arena.alloc(ty)
}

fn address<'a>(state_mutability: StateMutability) -> Type<'a> {
    Type::Address(AddressType { state_mutability })
}

fn byte_array<'a>(location: DataLocation, base: ArrayBase<'a>) -> Type<'a> {
    Type::Array(ArrayType {
        reference: Reference::pointer(location),
        base,
        length: None,
    })
}

/// Index `i` holds the `(i + 1) * 8` bit integer.
fn integer_types<'a>(arena: &'a Bump, signedness: Signedness) -> [&'a Type<'a>; WIDTHS] {
    core::array::from_fn(|index| {
        alloc(
            arena,
            Type::Integer(IntegerType {
                bits: (index as u16 + 1) * 8,
                signedness,
            }),
        )
    })
}

impl<'a> TypeProvider<'a> {
    pub fn bool_type(&self) -> &'a Type<'a> {
        self.table.bool_type
    }

    pub fn inaccessible_dynamic_type(&self) -> &'a Type<'a> {
        self.table.inaccessible_dynamic
    }

    /// Non-payable `address`.
    pub fn address_type(&self) -> &'a Type<'a> {
        self.table.address
    }

    pub fn payable_address_type(&self) -> &'a Type<'a> {
        self.table.payable_address
    }

    /// `address` or `address payable`; no other mutability applies to addresses.
    pub fn address_type_for(&self, state_mutability: StateMutability) -> Result<&'a Type<'a>> {
        match state_mutability {
            StateMutability::NonPayable => Ok(self.table.address),
            StateMutability::Payable => Ok(self.table.payable_address),
            other => Err(InternalCompilerError::precondition(alloc::format!(
                "addresses cannot be {}",
                other.as_str()
            ))),
        }
    }

    /// `bytes storage pointer`.
    pub fn bytes_type(&self) -> &'a Type<'a> {
        self.table.bytes_storage
    }

    pub fn bytes_memory_type(&self) -> &'a Type<'a> {
        self.table.bytes_memory
    }

    /// `string storage pointer`.
    pub fn string_type(&self) -> &'a Type<'a> {
        self.table.string_storage
    }

    pub fn string_memory_type(&self) -> &'a Type<'a> {
        self.table.string_memory
    }

    /// The empty tuple `()`, shared because it is requested so often.
    ///
    /// [`TypeProvider::tuple_type`] with no members still allocates.
    pub fn empty_tuple_type(&self) -> &'a Type<'a> {
        self.table.empty_tuple
    }

    /// `intN` / `uintN`; `bits` must be a multiple of 8 between 8 and 256.
    pub fn integer_type(&self, bits: u16, signedness: Signedness) -> Result<&'a Type<'a>> {
        precondition!(
            (8..=256).contains(&bits) && bits % 8 == 0,
            "invalid integer width: {bits}"
        );
        let index = usize::from(bits / 8 - 1);
        Ok(match signedness {
            Signedness::Signed => self.table.ints[index],
            Signedness::Unsigned => self.table.uints[index],
        })
    }

    pub fn uint256(&self) -> &'a Type<'a> {
        self.table.uints[WIDTHS - 1]
    }

    pub fn int256(&self) -> &'a Type<'a> {
        self.table.ints[WIDTHS - 1]
    }

    /// `bytes1` ... `bytes32`.
    pub fn fixed_bytes_type(&self, bytes: u8) -> Result<&'a Type<'a>> {
        precondition!(
            (1..=32).contains(&bytes),
            "invalid fixed bytes width: {bytes}"
        );
        Ok(self.table.fixed_bytes[usize::from(bytes - 1)])
    }

    /// `byte`, an alias of `bytes1`.
    pub fn byte_type(&self) -> &'a Type<'a> {
        self.table.fixed_bytes[0]
    }

    /// `block`, `msg`, `tx` or `abi`. Meta types wrap a contract and come from
    /// [`TypeProvider::meta_type`] instead.
    pub fn magic_type(&self, kind: MagicKind) -> Result<&'a Type<'a>> {
        match MagicKind::SINGLETONS.iter().position(|k| *k == kind) {
            Some(index) => Ok(self.table.magic[index]),
            None => Err(InternalCompilerError::precondition(
                "MetaType is handled separately, use `meta_type`",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ProviderOptions;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_integer_widths_follow_index() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        for (i, ty) in types.table.uints.iter().enumerate() {
            let bits = (i + 1) * 8;
            assert_eq!(ty.to_string(), alloc::format!("uint{bits}"));
        }
        for (i, ty) in types.table.ints.iter().enumerate() {
            let bits = (i + 1) * 8;
            assert_eq!(ty.to_string(), alloc::format!("int{bits}"));
        }
    }

    #[test]
    fn test_invalid_widths() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        for bits in [0, 7, 12, 264, 512] {
            let err = types.integer_type(bits, Signedness::Signed).unwrap_err();
            assert!(err.is_precondition(), "{bits}: {err}");
        }
        assert!(types.fixed_bytes_type(0).is_err());
        assert!(types.fixed_bytes_type(33).is_err());
    }

    #[test]
    fn test_byte_is_bytes1() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());
        assert!(Type::same(types.byte_type(), types.fixed_bytes_type(1).unwrap()));
    }

    #[test]
    fn test_addresses() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        assert_eq!(types.address_type().to_string(), "address");
        assert_eq!(types.payable_address_type().to_string(), "address payable");
        assert!(Type::same(
            types.address_type_for(StateMutability::Payable).unwrap(),
            types.payable_address_type()
        ));
        assert!(types.address_type_for(StateMutability::View).is_err());
    }

    #[test]
    fn test_byte_arrays() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        assert_eq!(types.bytes_type().to_string(), "bytes storage pointer");
        assert_eq!(types.bytes_memory_type().to_string(), "bytes memory");
        assert_eq!(types.string_type().to_string(), "string storage pointer");
        assert_eq!(types.string_memory_type().to_string(), "string memory");
    }

    #[test]
    fn test_magic_types() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        assert_eq!(types.magic_type(MagicKind::Message).unwrap().to_string(), "msg");
        assert!(Type::same(
            types.magic_type(MagicKind::Block).unwrap(),
            types.magic_type(MagicKind::Block).unwrap()
        ));
        let err = types.magic_type(MagicKind::MetaType).unwrap_err();
        assert!(err.is_precondition());
        assert!(err.message().contains("meta_type"));
    }
}
