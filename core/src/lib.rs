//! The type registry of the compiler's semantic analysis.
//!
//! [`TypeProvider`] is the single authority that creates every [`Type`] used by
//! parsing, type checking and code generation. It owns all of them in an arena
//! and hands out `&'a Type<'a>` references that stay valid for the session.
//!
//! Families differ in how much sharing they guarantee:
//!
//! - **Singletons** (`bool`, `address`, `uintN`, `bytesN`, magic variables, ...)
//!   are built once when the provider is created. Repeated requests return the
//!   same object.
//! - **Structurally cached** families (string literals, fixed point numbers,
//!   contracts, enums, structs, mappings, `type(T)`) keep at most one object
//!   per key.
//! - **Fresh** families (functions, tuples, arrays, rational numbers, modules,
//!   modifiers, meta types, relocations) allocate on every call. Compare them
//!   with `==`, never by address.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use solty_core::{ProviderOptions, TypeProvider};
//! use solty_types::{Signedness, Type};
//!
//! let arena = Bump::new();
//! let types = TypeProvider::new(&arena, ProviderOptions::default());
//!
//! let a = types.integer_type(256, Signedness::Unsigned).unwrap();
//! let b = types.uint256();
//! assert!(Type::same(a, b));
//!
//! let t1 = types.tuple_type(&[Some(a), Some(types.bool_type())]);
//! let t2 = types.tuple_type(&[Some(b), Some(types.bool_type())]);
//! assert_eq!(t1, t2);
//! assert!(!Type::same(t1, t2));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

pub mod error;
pub mod options;
pub mod provider;

mod cache;
mod elementary;
mod fresh;
mod function;
mod singleton;

pub use elementary::{ElementaryTypeNameToken, Token};
pub use error::{InternalCompilerError, Result};
pub use function::FunctionSignature;
pub use options::{ProviderOptions, ProviderOptionsOverride};
pub use provider::{ProviderStats, TypeProvider};

pub use solty_types::Type;

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with TRACE level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    }
}
