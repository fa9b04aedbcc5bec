//! Elementary type names (`uint256`, `bytes32`, `fixed128x18`, ...).
//!
//! The lexer decides which token was written; the dispatcher here only maps an
//! already classified token to the matching registry accessor.

use core::fmt;

use solty_types::{Category, DataLocation, Signedness, StateMutability, Type};
use tracing::trace;

use crate::error::{InternalCompilerError, Result, precondition};
use crate::provider::TypeProvider;

/// Token categories a classifier produces for a type position.
///
/// The last four are not elementary type names and exist so that callers can
/// hand over whatever the lexer produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Int,
    UInt,
    IntM,
    UIntM,
    Byte,
    Bytes,
    BytesM,
    Fixed,
    UFixed,
    FixedMxN,
    UFixedMxN,
    Address,
    Bool,
    String,
    Var,
    Identifier,
    Mapping,
    Function,
}

impl Token {
    pub fn is_elementary_type_name(self) -> bool {
        !matches!(
            self,
            Token::Var | Token::Identifier | Token::Mapping | Token::Function
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Token::Int => "int",
            Token::UInt => "uint",
            Token::IntM => "intM",
            Token::UIntM => "uintM",
            Token::Byte => "byte",
            Token::Bytes => "bytes",
            Token::BytesM => "bytesM",
            Token::Fixed => "fixed",
            Token::UFixed => "ufixed",
            Token::FixedMxN => "fixedMxN",
            Token::UFixedMxN => "ufixedMxN",
            Token::Address => "address",
            Token::Bool => "bool",
            Token::String => "string",
            Token::Var => "var",
            Token::Identifier => "identifier",
            Token::Mapping => "mapping",
            Token::Function => "function",
        }
    }
}

/// A classified elementary type name with its size parameters.
///
/// `first_number` is the bit width of `intM`/`uintM`/`fixedMxN`, or the byte
/// width of `bytesM`; `second_number` is the `N` of `fixedMxN`. Both are zero
/// for tokens without parameters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ElementaryTypeNameToken {
    pub token: Token,
    pub first_number: u16,
    pub second_number: u16,
}

impl ElementaryTypeNameToken {
    pub fn new(token: Token, first_number: u16, second_number: u16) -> Self {
        Self {
            token,
            first_number,
            second_number,
        }
    }

    /// Classify a keyword the way the lexer does.
    ///
    /// Sized names with an invalid size (`uint7`, `bytes33`) are ordinary
    /// identifiers, as are all other words.
    pub fn classify(word: &str) -> Self {
        let plain = |token| Self::new(token, 0, 0);
        match word {
            "int" => return plain(Token::Int),
            "uint" => return plain(Token::UInt),
            "byte" => return plain(Token::Byte),
            "bytes" => return plain(Token::Bytes),
            "fixed" => return plain(Token::Fixed),
            "ufixed" => return plain(Token::UFixed),
            "address" => return plain(Token::Address),
            "bool" => return plain(Token::Bool),
            "string" => return plain(Token::String),
            "var" => return plain(Token::Var),
            "mapping" => return plain(Token::Mapping),
            "function" => return plain(Token::Function),
            _ => {}
        }

        let sized = if let Some(size) = word.strip_prefix("uint") {
            parse_bits(size).map(|bits| Self::new(Token::UIntM, bits, 0))
        } else if let Some(size) = word.strip_prefix("int") {
            parse_bits(size).map(|bits| Self::new(Token::IntM, bits, 0))
        } else if let Some(size) = word.strip_prefix("bytes") {
            parse_number(size)
                .filter(|bytes| (1..=32).contains(bytes))
                .map(|bytes| Self::new(Token::BytesM, bytes, 0))
        } else if let Some(size) = word.strip_prefix("ufixed") {
            parse_fixed(size).map(|(m, n)| Self::new(Token::UFixedMxN, m, n))
        } else if let Some(size) = word.strip_prefix("fixed") {
            parse_fixed(size).map(|(m, n)| Self::new(Token::FixedMxN, m, n))
        } else {
            None
        };
        sized.unwrap_or_else(|| plain(Token::Identifier))
    }
}

fn parse_number(digits: &str) -> Option<u16> {
    let leading_zero = digits.len() > 1 && digits.starts_with('0');
    if digits.is_empty() || leading_zero || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn parse_bits(digits: &str) -> Option<u16> {
    parse_number(digits).filter(|bits| (8..=256).contains(bits) && bits % 8 == 0)
}

fn parse_fixed(size: &str) -> Option<(u16, u16)> {
    let (m, n) = size.split_once('x')?;
    let m = parse_bits(m)?;
    let n = parse_number(n).filter(|n| *n <= 80)?;
    Some((m, n))
}

impl fmt::Display for ElementaryTypeNameToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Token::IntM => write!(f, "int{}", self.first_number),
            Token::UIntM => write!(f, "uint{}", self.first_number),
            Token::BytesM => write!(f, "bytes{}", self.first_number),
            Token::FixedMxN => write!(f, "fixed{}x{}", self.first_number, self.second_number),
            Token::UFixedMxN => write!(f, "ufixed{}x{}", self.first_number, self.second_number),
            token => f.write_str(token.as_str()),
        }
    }
}

impl<'a> TypeProvider<'a> {
    /// The type named by an elementary type name token.
    ///
    /// `int`/`uint` are 256 bits wide, `fixed`/`ufixed` are `128x18`, and
    /// `bytes`/`string` are storage pointers.
    pub fn from_elementary_type_name(
        &self,
        name: ElementaryTypeNameToken,
    ) -> Result<&'a Type<'a>> {
        let m = name.first_number;
        let n = name.second_number;
        match name.token {
            Token::IntM => self.integer_type(m, Signedness::Signed),
            Token::UIntM => self.integer_type(m, Signedness::Unsigned),
            Token::Byte => Ok(self.byte_type()),
            Token::BytesM => {
                let bytes = u8::try_from(m).map_err(|_| {
                    InternalCompilerError::precondition(alloc::format!(
                        "invalid fixed bytes width: {m}"
                    ))
                })?;
                self.fixed_bytes_type(bytes)
            }
            Token::FixedMxN => self.fixed_point_type(m, n, Signedness::Signed),
            Token::UFixedMxN => self.fixed_point_type(m, n, Signedness::Unsigned),
            Token::Int => Ok(self.int256()),
            Token::UInt => Ok(self.uint256()),
            Token::Fixed => self.fixed_point_type(128, 18, Signedness::Signed),
            Token::UFixed => self.fixed_point_type(128, 18, Signedness::Unsigned),
            Token::Address => Ok(self.address_type()),
            Token::Bool => Ok(self.bool_type()),
            Token::Bytes => Ok(self.bytes_type()),
            Token::String => Ok(self.string_type()),
            Token::Var | Token::Identifier | Token::Mapping | Token::Function => {
                Err(InternalCompilerError::unreachable(alloc::format!(
                    "unable to convert `{}` to an elementary type",
                    name.token.as_str()
                )))
            }
        }
    }

    /// The type named by `text`: an elementary type name optionally followed
    /// by one space and a data location (reference types) or `payable`
    /// (`address`), e.g. `"string memory"` or `"address payable"`.
    ///
    /// Reference types default to `storage` and are always pointers.
    pub fn from_elementary_type_name_str(&self, text: &str) -> Result<&'a Type<'a>> {
        let (word, suffix) = match text.split_once(' ') {
            Some((word, suffix)) => (word, Some(suffix)),
            None => (text, None),
        };
        precondition!(
            !suffix.is_some_and(|suffix| suffix.contains(' ')),
            "cannot parse elementary type: {text:?}"
        );

        let token = ElementaryTypeNameToken::classify(word);
        let ty = self.from_elementary_type_name(token)?;
        trace!(text, %token, "Resolved elementary type name");

        if ty.is_reference_type() {
            let location = match suffix {
                None | Some("storage") => DataLocation::Storage,
                Some("calldata") => DataLocation::CallData,
                Some("memory") => DataLocation::Memory,
                Some(other) => {
                    return Err(InternalCompilerError::precondition(alloc::format!(
                        "unknown data location: {other:?}"
                    )));
                }
            };
            self.with_location(ty, location, true)
        } else if ty.category() == Category::Address {
            match suffix {
                None => Ok(self.address_type()),
                Some("payable") => self.address_type_for(StateMutability::Payable),
                Some(other) => Err(InternalCompilerError::precondition(alloc::format!(
                    "invalid state mutability for address type: {other:?}"
                ))),
            }
        } else {
            precondition!(
                suffix.is_none(),
                "storage location suffix only allowed for reference types: {text:?}"
            );
            Ok(ty)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ProviderOptions;
    use alloc::string::ToString;
    use bumpalo::Bump;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify() {
        assert_eq!(
            ElementaryTypeNameToken::classify("uint"),
            ElementaryTypeNameToken::new(Token::UInt, 0, 0)
        );
        assert_eq!(
            ElementaryTypeNameToken::classify("int64"),
            ElementaryTypeNameToken::new(Token::IntM, 64, 0)
        );
        assert_eq!(
            ElementaryTypeNameToken::classify("bytes32"),
            ElementaryTypeNameToken::new(Token::BytesM, 32, 0)
        );
        assert_eq!(
            ElementaryTypeNameToken::classify("ufixed64x10"),
            ElementaryTypeNameToken::new(Token::UFixedMxN, 64, 10)
        );
        assert_eq!(ElementaryTypeNameToken::classify("mapping").token, Token::Mapping);

        for word in ["uint7", "int264", "bytes0", "bytes33", "fixed8x81", "uint08", "foo", ""] {
            assert_eq!(
                ElementaryTypeNameToken::classify(word).token,
                Token::Identifier,
                "{word}"
            );
        }
    }

    #[test]
    fn test_token_display() {
        for word in ["uint", "int8", "bytes7", "fixed128x18", "ufixed", "address"] {
            assert_eq!(ElementaryTypeNameToken::classify(word).to_string(), word);
        }
    }

    #[test]
    fn test_default_widths() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());
        let resolve = |word| {
            types
                .from_elementary_type_name(ElementaryTypeNameToken::classify(word))
                .unwrap()
        };

        assert!(Type::same(resolve("int"), types.int256()));
        assert!(Type::same(resolve("uint"), types.uint256()));
        assert!(Type::same(resolve("byte"), types.fixed_bytes_type(1).unwrap()));
        assert_eq!(resolve("fixed").to_string(), "fixed128x18");
        assert_eq!(resolve("ufixed").to_string(), "ufixed128x18");
        assert!(Type::same(resolve("bytes"), types.bytes_type()));
        assert!(Type::same(resolve("string"), types.string_type()));
    }

    #[test]
    fn test_non_elementary_token_is_unreachable() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        for token in [Token::Var, Token::Identifier, Token::Mapping, Token::Function] {
            assert!(!token.is_elementary_type_name());
            let err = types
                .from_elementary_type_name(ElementaryTypeNameToken::new(token, 0, 0))
                .unwrap_err();
            assert!(err.is_unreachable(), "{token:?}");
        }
    }

    #[test]
    fn test_out_of_range_token_numbers() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        let err = types
            .from_elementary_type_name(ElementaryTypeNameToken::new(Token::BytesM, 300, 0))
            .unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn test_suffixes() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());
        let resolve = |text| types.from_elementary_type_name_str(text);

        assert!(Type::same(resolve("string").unwrap(), types.string_type()));
        assert!(Type::same(resolve("bytes storage").unwrap(), types.bytes_type()));
        assert_eq!(resolve("string memory").unwrap().to_string(), "string memory");
        assert_eq!(resolve("bytes calldata").unwrap().to_string(), "bytes calldata");
        assert!(Type::same(
            resolve("address payable").unwrap(),
            types.payable_address_type()
        ));
        assert!(Type::same(resolve("address").unwrap(), types.address_type()));

        for bad in ["string stack", "address memory", "uint256 memory", "bytes memory extra"] {
            assert!(resolve(bad).unwrap_err().is_precondition(), "{bad}");
        }
        assert!(resolve("foo").unwrap_err().is_unreachable());
    }
}
