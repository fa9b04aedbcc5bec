//! Solty - the type registry of a smart-contract compiler
//!
//! # Overview
//!
//! Every type used by parsing, type checking and code generation is created
//! by one [`TypeProvider`] per compilation. The provider owns all of them in
//! an arena and hands out references that stay valid for the whole run.
//!
//! - Singletons (`bool`, `address`, `uint8` ... `uint256`, `bytes1` ...
//!   `bytes32`, `msg`, ...) exist exactly once.
//! - Contracts, structs, enums, mappings, string literals, fixed point
//!   numbers and `type(T)` are cached: one object per key.
//! - Function types, tuples, arrays and the other composite types are
//!   created fresh on every request and compared by value.
//!
//! # Quick Start
//!
//! ```
//! use solty::{Session, SessionOptions, Type};
//!
//! let session = Session::new(SessionOptions::default());
//! let outcome = session
//!     .run(&Default::default(), |types| {
//!         let a = types.from_elementary_type_name_str("uint")?;
//!         let b = types.from_elementary_type_name_str("uint256")?;
//!         assert!(Type::same(a, b));
//!
//!         let m = types.mapping_type(types.address_type(), a);
//!         Ok(m.to_string())
//!     })
//!     .unwrap();
//! assert_eq!(outcome.value, "mapping(address => uint256)");
//! ```
//!
//! Embedders that manage the arena themselves use [`TypeProvider`] directly:
//!
//! ```
//! use bumpalo::Bump;
//! use solty::{ProviderOptions, TypeProvider};
//!
//! let arena = Bump::new();
//! let types = TypeProvider::new(&arena, ProviderOptions::default());
//! assert_eq!(types.string_memory_type().to_string(), "string memory");
//! ```

mod error;
pub mod error_renderer;
pub mod session;

pub use error::Error;
pub use error_renderer::{CharSet, RenderConfig, render_error, render_error_to};
pub use session::{Outcome, Session, SessionOptions, SessionOptionsOverride};

// Re-export the registry
pub use solty_core::{
    ElementaryTypeNameToken, FunctionSignature, InternalCompilerError, ProviderOptions,
    ProviderOptionsOverride, ProviderStats, Token, TypeProvider,
};

// Re-export the type model
pub use solty_types::{self as types, Type};
