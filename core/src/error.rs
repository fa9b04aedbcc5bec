//! Internal compiler faults raised by the registry.
//!
//! User input is validated before it reaches the registry, so everything here
//! is a broken contract between compiler components. Callers propagate these
//! with `?` up to the driver, which aborts the session and reports a compiler
//! bug instead of a user diagnostic.

use alloc::string::String;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalCompilerError {
    /// A case the caller promised could not happen, e.g. a non-elementary
    /// token handed to the elementary type dispatcher.
    #[error("unreachable: {0}")]
    Unreachable(String),

    /// A family accessor called outside its precondition, e.g.
    /// `magic_type(MetaType)` or `meta_type` of a struct.
    #[error("precondition violated: {0}")]
    Precondition(String),
}

impl InternalCompilerError {
    pub fn unreachable(message: impl Into<String>) -> Self {
        InternalCompilerError::Unreachable(message.into())
    }

    pub fn precondition(message: impl Into<String>) -> Self {
        InternalCompilerError::Precondition(message.into())
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, InternalCompilerError::Precondition(_))
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, InternalCompilerError::Unreachable(_))
    }

    pub fn message(&self) -> &str {
        match self {
            InternalCompilerError::Unreachable(message)
            | InternalCompilerError::Precondition(message) => message,
        }
    }
}

pub type Result<T, E = InternalCompilerError> = core::result::Result<T, E>;

/// Returns a precondition fault from the enclosing function unless `$cond` holds.
macro_rules! precondition {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::InternalCompilerError::Precondition(
                alloc::format!($($arg)+),
            ));
        }
    };
}

pub(crate) use precondition;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn checked(value: u8) -> Result<u8> {
        precondition!(value < 10, "{value} is too large");
        Ok(value)
    }

    #[test]
    fn test_precondition_macro() {
        assert_eq!(checked(3), Ok(3));

        let err = checked(12).unwrap_err();
        assert!(err.is_precondition());
        assert_eq!(err.message(), "12 is too large");
        assert_eq!(err.to_string(), "precondition violated: 12 is too large");
    }
}
