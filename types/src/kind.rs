//! Small enums shared by the type variants.

/// Discriminant of a [`Type`](crate::Type), without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Address,
    Integer,
    RationalNumber,
    StringLiteral,
    Bool,
    FixedPoint,
    Array,
    FixedBytes,
    Contract,
    Struct,
    Function,
    Enum,
    Tuple,
    Mapping,
    TypeType,
    Modifier,
    Magic,
    Module,
    InaccessibleDynamic,
}

/// Where the value of a reference type lives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataLocation {
    Storage,
    CallData,
    Memory,
}

impl DataLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            DataLocation::Storage => "storage",
            DataLocation::CallData => "calldata",
            DataLocation::Memory => "memory",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StateMutability {
    Pure,
    View,
    #[default]
    NonPayable,
    Payable,
}

impl StateMutability {
    pub fn as_str(self) -> &'static str {
        match self {
            StateMutability::Pure => "pure",
            StateMutability::View => "view",
            StateMutability::NonPayable => "nonpayable",
            StateMutability::Payable => "payable",
        }
    }
}

/// Signedness of integer and fixed point types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Signedness {
    Unsigned,
    Signed,
}

impl Signedness {
    pub fn is_signed(self) -> bool {
        self == Signedness::Signed
    }
}

/// Kinds of the global "magic" variables.
///
/// `MetaType` is never part of the singleton table: a meta type always wraps
/// the contract type it describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MagicKind {
    /// `block`
    Block,
    /// `msg`
    Message,
    /// `tx`
    Transaction,
    /// `abi`
    Abi,
    /// `type(C)`
    MetaType,
}

impl MagicKind {
    /// The kinds that exist exactly once per session.
    pub const SINGLETONS: [MagicKind; 4] = [
        MagicKind::Block,
        MagicKind::Message,
        MagicKind::Transaction,
        MagicKind::Abi,
    ];
}

/// How a function type is called, or which builtin it stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// Stack-call using plain JUMP.
    Internal,
    /// External call using CALL.
    External,
    /// External call using DELEGATECALL.
    DelegateCall,
    /// Low-level `address.call`.
    BareCall,
    /// Low-level `address.delegatecall`.
    BareDelegateCall,
    /// Low-level `address.staticcall`.
    BareStaticCall,
    /// External call using CREATE.
    Creation,
    Send,
    Transfer,
    Keccak256,
    Selfdestruct,
    Revert,
    EcRecover,
    Sha256,
    Ripemd160,
    Log0,
    Log1,
    Log2,
    Log3,
    Log4,
    /// Event emission.
    Event,
    /// `.gas(...)` modifier on an external function.
    SetGas,
    /// `.value(...)` modifier on an external function.
    SetValue,
    BlockHash,
    AddMod,
    MulMod,
    ArrayPush,
    ArrayPop,
    ByteArrayPush,
    /// `new T[](n)`.
    ObjectCreation,
    Assert,
    Require,
    AbiEncode,
    AbiEncodePacked,
    AbiEncodeWithSelector,
    AbiEncodeWithSignature,
    AbiDecode,
    GasLeft,
    /// `type(C)`.
    MetaType,
    /// The function type of a declaration that cannot be called directly.
    Declaration,
}

impl FunctionKind {
    pub fn is_external(self) -> bool {
        matches!(
            self,
            FunctionKind::External
                | FunctionKind::DelegateCall
                | FunctionKind::BareCall
                | FunctionKind::BareDelegateCall
                | FunctionKind::BareStaticCall
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic_singletons_exclude_meta_type() {
        assert!(!MagicKind::SINGLETONS.contains(&MagicKind::MetaType));
        assert_eq!(MagicKind::SINGLETONS.len(), 4);
    }

    #[test]
    fn test_default_mutability() {
        assert_eq!(StateMutability::default(), StateMutability::NonPayable);
        assert!(StateMutability::Pure < StateMutability::Payable);
    }

    #[test]
    fn test_external_kinds() {
        assert!(FunctionKind::External.is_external());
        assert!(FunctionKind::BareStaticCall.is_external());
        assert!(!FunctionKind::Internal.is_external());
        assert!(!FunctionKind::Event.is_external());
    }
}
