//! Canonical, source-like names of types (`uint256`, `string memory`, ...).

use core::fmt::{self, Display, Formatter, Write};

use crate::kind::{DataLocation, MagicKind, Signedness, StateMutability};
use crate::ty::{ArrayBase, FunctionType, Reference, Type};

impl Display for Reference {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.location {
            DataLocation::Storage if self.is_pointer => f.write_str("storage pointer"),
            DataLocation::Storage => f.write_str("storage ref"),
            location => f.write_str(location.as_str()),
        }
    }
}

impl Display for Type<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Type::Bool => f.write_str("bool"),
            Type::InaccessibleDynamic => f.write_str("inaccessible dynamic type"),
            Type::Integer(int) => {
                let prefix = match int.signedness {
                    Signedness::Signed => "int",
                    Signedness::Unsigned => "uint",
                };
                write!(f, "{prefix}{}", int.bits)
            }
            Type::FixedBytes(fixed) => write!(f, "bytes{}", fixed.bytes),
            Type::FixedPoint(fixed) => {
                let prefix = match fixed.signedness {
                    Signedness::Signed => "fixed",
                    Signedness::Unsigned => "ufixed",
                };
                write!(f, "{prefix}{}x{}", fixed.total_bits, fixed.fractional_digits)
            }
            Type::Address(address) if address.is_payable() => f.write_str("address payable"),
            Type::Address(_) => f.write_str("address"),
            Type::Array(array) => {
                match array.base {
                    ArrayBase::Bytes => f.write_str("bytes")?,
                    ArrayBase::String => f.write_str("string")?,
                    ArrayBase::Element(element) => match array.length {
                        Some(length) => write!(f, "{element}[{length}]")?,
                        None => write!(f, "{element}[]")?,
                    },
                }
                write!(f, " {}", array.reference)
            }
            Type::StringLiteral(literal) => write!(f, "literal_string {:?}", literal.value),
            Type::RationalNumber(rational) if rational.value.is_integer() => {
                write!(f, "int_const {}", rational.value)
            }
            Type::RationalNumber(rational) => write!(f, "rational_const {}", rational.value),
            Type::Tuple(tuple) => {
                f.write_str("tuple(")?;
                for (i, component) in tuple.components.iter().enumerate() {
                    if i > 0 {
                        f.write_char(',')?;
                    }
                    if let Some(component) = component {
                        write!(f, "{component}")?;
                    }
                }
                f.write_char(')')
            }
            Type::Function(function) => fmt_function(function, f),
            Type::Contract(contract) => {
                f.write_str(if contract.is_library() {
                    "library "
                } else {
                    "contract "
                })?;
                if contract.is_super {
                    f.write_str("super ")?;
                }
                f.write_str(contract.definition.name)
            }
            Type::Enum(enum_type) => write!(f, "enum {}", enum_type.definition.name),
            Type::Struct(strukt) => {
                write!(f, "struct {} {}", strukt.definition.name, strukt.reference)
            }
            Type::Mapping(mapping) => write!(f, "mapping({} => {})", mapping.key, mapping.value),
            Type::Module(module) => write!(f, "module {:?}", module.source_unit.path),
            Type::TypeType(type_type) => write!(f, "type({})", type_type.actual),
            Type::Modifier(modifier) => {
                f.write_str("modifier (")?;
                fmt_list(modifier.parameter_types, f)?;
                f.write_char(')')
            }
            Type::Magic(magic) => match (magic.kind, magic.type_argument) {
                (MagicKind::Block, _) => f.write_str("block"),
                (MagicKind::Message, _) => f.write_str("msg"),
                (MagicKind::Transaction, _) => f.write_str("tx"),
                (MagicKind::Abi, _) => f.write_str("abi"),
                (MagicKind::MetaType, Some(argument)) => write!(f, "type({argument})"),
                (MagicKind::MetaType, None) => f.write_str("type()"),
            },
        }
    }
}

fn fmt_list(types: &[&Type<'_>], f: &mut Formatter<'_>) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

fn fmt_function(function: &FunctionType<'_>, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str("function ")?;
    if let Some(declaration) = function.declaration {
        f.write_str(declaration.name())?;
    }
    f.write_char('(')?;
    fmt_list(function.parameter_types, f)?;
    if function.takes_arbitrary_parameters() {
        f.write_str(if function.parameter_types.is_empty() {
            "..."
        } else {
            ",..."
        })?;
    }
    f.write_char(')')?;
    if function.state_mutability != StateMutability::NonPayable {
        write!(f, " {}", function.state_mutability.as_str())?;
    }
    if function.kind.is_external() {
        f.write_str(" external")?;
    }
    if !function.return_parameter_types.is_empty() {
        f.write_str(" returns (")?;
        fmt_list(function.return_parameter_types, f)?;
        f.write_char(')')?;
    }
    if function.gas_set() {
        f.write_str(" gas")?;
    }
    if function.value_set() {
        f.write_str(" value")?;
    }
    if function.bound() {
        f.write_str(" bound_to")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ty::{ArrayType, IntegerType, MappingType, TupleType};
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    const UINT8: Type<'static> = Type::Integer(IntegerType {
        bits: 8,
        signedness: Signedness::Unsigned,
    });

    #[test]
    fn test_reference_names() {
        assert_eq!(
            Reference::new(DataLocation::Storage, true).to_string(),
            "storage pointer"
        );
        assert_eq!(
            Reference::new(DataLocation::Storage, false).to_string(),
            "storage ref"
        );
        assert_eq!(
            Reference::new(DataLocation::CallData, true).to_string(),
            "calldata"
        );
    }

    #[test]
    fn test_composite_names() {
        let array = Type::Array(ArrayType {
            reference: Reference::pointer(DataLocation::Memory),
            base: ArrayBase::Element(&UINT8),
            length: None,
        });
        assert_eq!(array.to_string(), "uint8[] memory");

        let mapping = Type::Mapping(MappingType {
            key: &UINT8,
            value: &Type::Bool,
        });
        assert_eq!(mapping.to_string(), "mapping(uint8 => bool)");

        let components: &[Option<&Type<'_>>] = &[Some(&UINT8), None, Some(&Type::Bool)];
        let tuple = Type::Tuple(TupleType { components });
        assert_eq!(tuple.to_string(), "tuple(uint8,,bool)");
    }
}
