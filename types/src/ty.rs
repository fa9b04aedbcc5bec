use crate::decl::{
    ContractDefinition, ContractKind, DeclRef, Declaration, EnumDefinition, ModifierDefinition,
    SourceUnit, StructDefinition,
};
use crate::flags::FunctionFlags;
use crate::kind::{Category, DataLocation, FunctionKind, MagicKind, Signedness, StateMutability};
use crate::num::{ArenaRational, ArenaUint};

/// A type of the contract language.
///
/// Types are created by the registry and borrowed from its arena for the
/// whole compilation session (`'a`).
///
/// `PartialEq` is **value equality**: two distinct objects describing the same
/// type compare equal. Whether two equal types are also the same object
/// depends on the family that produced them; use [`Type::same`] to compare
/// identities.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Type<'a> {
    Bool,
    /// The return type of an external call whose dynamic result cannot be decoded.
    InaccessibleDynamic,
    Integer(IntegerType),
    FixedBytes(FixedBytesType),
    FixedPoint(FixedPointType),
    Address(AddressType),
    Array(ArrayType<'a>),
    StringLiteral(StringLiteralType<'a>),
    RationalNumber(RationalNumberType<'a>),
    Tuple(TupleType<'a>),
    Function(FunctionType<'a>),
    Contract(ContractType<'a>),
    Enum(EnumType<'a>),
    Struct(StructType<'a>),
    Mapping(MappingType<'a>),
    Module(ModuleType<'a>),
    /// The type of a type name used as an expression, e.g. `uint` in `uint(x)`.
    TypeType(TypeType<'a>),
    Modifier(ModifierType<'a>),
    Magic(MagicType<'a>),
}

impl<'a> Type<'a> {
    pub fn category(&self) -> Category {
        match self {
            Type::Bool => Category::Bool,
            Type::InaccessibleDynamic => Category::InaccessibleDynamic,
            Type::Integer(_) => Category::Integer,
            Type::FixedBytes(_) => Category::FixedBytes,
            Type::FixedPoint(_) => Category::FixedPoint,
            Type::Address(_) => Category::Address,
            Type::Array(_) => Category::Array,
            Type::StringLiteral(_) => Category::StringLiteral,
            Type::RationalNumber(_) => Category::RationalNumber,
            Type::Tuple(_) => Category::Tuple,
            Type::Function(_) => Category::Function,
            Type::Contract(_) => Category::Contract,
            Type::Enum(_) => Category::Enum,
            Type::Struct(_) => Category::Struct,
            Type::Mapping(_) => Category::Mapping,
            Type::Module(_) => Category::Module,
            Type::TypeType(_) => Category::TypeType,
            Type::Modifier(_) => Category::Modifier,
            Type::Magic(_) => Category::Magic,
        }
    }

    /// Identity comparison: both references point to the same object.
    pub fn same(a: &Type<'_>, b: &Type<'_>) -> bool {
        core::ptr::eq(a as *const Type<'_> as *const u8, b as *const Type<'_> as *const u8)
    }

    /// Location and pointer-ness of array and struct types.
    pub fn reference(&self) -> Option<Reference> {
        match self {
            Type::Array(array) => Some(array.reference),
            Type::Struct(strukt) => Some(strukt.reference),
            _ => None,
        }
    }

    pub fn is_reference_type(&self) -> bool {
        self.reference().is_some()
    }

    /// A copy of this reference type moved to `reference`.
    ///
    /// Returns `None` for value types.
    pub fn relocated(&self, reference: Reference) -> Option<Type<'a>> {
        match *self {
            Type::Array(array) => Some(Type::Array(ArrayType { reference, ..array })),
            Type::Struct(strukt) => Some(Type::Struct(StructType { reference, ..strukt })),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayType<'a>> {
        match self {
            Type::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionType<'a>> {
        match self {
            Type::Function(function) => Some(function),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&MappingType<'a>> {
        match self {
            Type::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_magic(&self) -> Option<&MagicType<'a>> {
        match self {
            Type::Magic(magic) => Some(magic),
            _ => None,
        }
    }
}

/// Data location plus whether the value is accessed through a pointer
/// (`storage pointer`) or is the referenced object itself (`storage ref`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
    pub location: DataLocation,
    pub is_pointer: bool,
}

impl Reference {
    pub fn new(location: DataLocation, is_pointer: bool) -> Self {
        Self {
            location,
            is_pointer,
        }
    }

    /// How reference types are created unless a caller says otherwise.
    pub fn pointer(location: DataLocation) -> Self {
        Self::new(location, true)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntegerType {
    pub bits: u16,
    pub signedness: Signedness,
}

/// `bytes1` ... `bytes32`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedBytesType {
    pub bytes: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FixedPointType {
    pub total_bits: u16,
    pub fractional_digits: u16,
    pub signedness: Signedness,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressType {
    pub state_mutability: StateMutability,
}

impl AddressType {
    pub fn is_payable(&self) -> bool {
        self.state_mutability == StateMutability::Payable
    }
}

/// What an array stores.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ArrayBase<'a> {
    /// `bytes`: packed byte array.
    Bytes,
    /// `string`: packed byte array with string semantics.
    String,
    Element(&'a Type<'a>),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrayType<'a> {
    pub reference: Reference,
    pub base: ArrayBase<'a>,
    /// `None` for dynamically sized arrays.
    pub length: Option<ArenaUint<'a>>,
}

impl<'a> ArrayType<'a> {
    pub fn is_byte_array(&self) -> bool {
        matches!(self.base, ArrayBase::Bytes | ArrayBase::String)
    }

    pub fn is_string(&self) -> bool {
        matches!(self.base, ArrayBase::String)
    }

    pub fn is_dynamically_sized(&self) -> bool {
        self.length.is_none()
    }

    /// The element type, `None` for byte arrays.
    pub fn element(&self) -> Option<&'a Type<'a>> {
        match self.base {
            ArrayBase::Element(element) => Some(element),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StringLiteralType<'a> {
    pub value: &'a str,
}

/// The type of a number literal before it is converted to a sized type.
#[derive(Copy, Clone, Debug)]
pub struct RationalNumberType<'a> {
    pub value: ArenaRational<'a>,
    /// A fixed bytes type the literal is implicitly convertible to (hex literals).
    pub compatible_bytes_type: Option<&'a Type<'a>>,
}

impl PartialEq for RationalNumberType<'_> {
    fn eq(&self, other: &Self) -> bool {
        // The compatible bytes type is a conversion hint, not part of the type.
        self.value == other.value
    }
}

/// Components may be empty, e.g. the left-hand side of `(, x) = f()`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TupleType<'a> {
    pub components: &'a [Option<&'a Type<'a>>],
}

#[derive(Copy, Clone, Debug)]
pub struct FunctionType<'a> {
    pub parameter_types: &'a [&'a Type<'a>],
    pub return_parameter_types: &'a [&'a Type<'a>],
    pub parameter_names: &'a [&'a str],
    pub return_parameter_names: &'a [&'a str],
    pub kind: FunctionKind,
    pub state_mutability: StateMutability,
    pub flags: FunctionFlags,
    pub declaration: Option<Declaration<'a>>,
}

impl<'a> FunctionType<'a> {
    pub fn takes_arbitrary_parameters(&self) -> bool {
        self.flags.contains(FunctionFlags::ARBITRARY_PARAMETERS)
    }

    pub fn gas_set(&self) -> bool {
        self.flags.contains(FunctionFlags::GAS_SET)
    }

    pub fn value_set(&self) -> bool {
        self.flags.contains(FunctionFlags::VALUE_SET)
    }

    pub fn bound(&self) -> bool {
        self.flags.contains(FunctionFlags::BOUND)
    }

    pub fn has_declaration(&self) -> bool {
        self.declaration.is_some()
    }
}

impl PartialEq for FunctionType<'_> {
    fn eq(&self, other: &Self) -> bool {
        // Names and the originating declaration are provenance only.
        self.kind == other.kind
            && self.state_mutability == other.state_mutability
            && self.flags == other.flags
            && self.parameter_types == other.parameter_types
            && self.return_parameter_types == other.return_parameter_types
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContractType<'a> {
    pub definition: DeclRef<'a, ContractDefinition<'a>>,
    /// The type of `super` inside the contract.
    pub is_super: bool,
}

impl ContractType<'_> {
    pub fn is_library(&self) -> bool {
        self.definition.kind == ContractKind::Library
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnumType<'a> {
    pub definition: DeclRef<'a, EnumDefinition<'a>>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StructType<'a> {
    pub definition: DeclRef<'a, StructDefinition<'a>>,
    pub reference: Reference,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MappingType<'a> {
    pub key: &'a Type<'a>,
    pub value: &'a Type<'a>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ModuleType<'a> {
    pub source_unit: DeclRef<'a, SourceUnit<'a>>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TypeType<'a> {
    pub actual: &'a Type<'a>,
}

#[derive(Copy, Clone, Debug)]
pub struct ModifierType<'a> {
    pub definition: DeclRef<'a, ModifierDefinition<'a>>,
    pub parameter_types: &'a [&'a Type<'a>],
}

impl PartialEq for ModifierType<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.parameter_types == other.parameter_types
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MagicType<'a> {
    pub kind: MagicKind,
    /// The contract type described by a `MetaType`, `None` for the other kinds.
    pub type_argument: Option<&'a Type<'a>>,
}
