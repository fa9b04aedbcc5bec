//! The registry itself: arena, singleton table and caches.

use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use bumpalo::Bump;
use hashbrown::HashMap;
use solty_types::Type;

use crate::options::ProviderOptions;
use crate::singleton::SingletonTable;

pub(crate) type Store<'a> = RefCell<Vec<&'a Type<'a>>>;
type FixedPointTable<'a> = RefCell<HashMap<(u16, u16), &'a Type<'a>>>;

/// Creates, deduplicates and owns every type of a compilation session.
///
/// Each type lives in the arena passed to [`TypeProvider::new`], which must
/// outlive every consumer of the returned references. Nothing is ever removed
/// or moved, so a reference handed out early stays valid while the registry
/// keeps growing.
///
/// The provider uses interior mutability and is meant to be driven by a single
/// thread through the phases of one compilation. Share `&TypeProvider` between
/// phases; do not share it between threads.
pub struct TypeProvider<'a> {
    pub(crate) arena: &'a Bump,
    options: ProviderOptions,
    pub(crate) table: SingletonTable<'a>,

    pub(crate) string_literals: RefCell<HashMap<&'a str, &'a Type<'a>>>,
    pub(crate) signed_fixed_points: FixedPointTable<'a>,
    pub(crate) unsigned_fixed_points: FixedPointTable<'a>,
    pub(crate) contracts: Store<'a>,
    pub(crate) enums: Store<'a>,
    pub(crate) structs: Store<'a>,
    pub(crate) type_types: Store<'a>,
    pub(crate) mappings: Store<'a>,

    pub(crate) fresh: Cell<usize>,
    pub(crate) relocations: Cell<usize>,
}

impl<'a> TypeProvider<'a> {
    /// Create a registry for one session, building the whole singleton table.
    pub fn new(arena: &'a Bump, options: ProviderOptions) -> Self {
        let table = SingletonTable::new(arena);
        let store = || RefCell::new(Vec::with_capacity(options.declaration_capacity));

        let provider = Self {
            arena,
            table,
            string_literals: RefCell::new(HashMap::with_capacity(
                options.string_literal_capacity,
            )),
            signed_fixed_points: RefCell::new(HashMap::new()),
            unsigned_fixed_points: RefCell::new(HashMap::new()),
            contracts: store(),
            enums: store(),
            structs: store(),
            type_types: store(),
            mappings: store(),
            fresh: Cell::new(0),
            relocations: Cell::new(0),
            options,
        };

        tracing::debug!(
            singletons = SingletonTable::LEN,
            options = ?provider.options,
            "Type provider created"
        );
        provider
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// The arena every type of this session lives in.
    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    /// Current size of each store.
    pub fn stats(&self) -> ProviderStats {
        ProviderStats {
            singletons: SingletonTable::LEN,
            string_literals: self.string_literals.borrow().len(),
            fixed_points: self.signed_fixed_points.borrow().len()
                + self.unsigned_fixed_points.borrow().len(),
            contracts: self.contracts.borrow().len(),
            enums: self.enums.borrow().len(),
            structs: self.structs.borrow().len(),
            type_types: self.type_types.borrow().len(),
            mappings: self.mappings.borrow().len(),
            fresh: self.fresh.get(),
            relocations: self.relocations.get(),
            arena_bytes: self.arena.allocated_bytes(),
        }
    }

    pub(crate) fn alloc(&self, ty: Type<'a>) -> &'a Type<'a> {
        self.arena.alloc(ty)
    }
}

impl fmt::Debug for TypeProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeProvider")
            .field("arena", &(self.arena as *const Bump))
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Number of objects in each store of a [`TypeProvider`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderStats {
    pub singletons: usize,
    pub string_literals: usize,
    pub fixed_points: usize,
    pub contracts: usize,
    pub enums: usize,
    pub structs: usize,
    pub type_types: usize,
    pub mappings: usize,
    /// Objects of the always-fresh families.
    pub fresh: usize,
    /// Copies made by `with_location`.
    pub relocations: usize,
    /// Bytes reserved by the arena, including its chunk overhead.
    pub arena_bytes: usize,
}

impl ProviderStats {
    /// Number of type objects owned by the registry.
    pub fn total(&self) -> usize {
        self.singletons
            + self.string_literals
            + self.fixed_points
            + self.contracts
            + self.enums
            + self.structs
            + self.type_types
            + self.mappings
            + self.fresh
            + self.relocations
    }
}

impl fmt::Display for ProviderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} types ({} singletons, {} cached, {} fresh, {} relocated), {} bytes",
            self.total(),
            self.singletons,
            self.string_literals
                + self.fixed_points
                + self.contracts
                + self.enums
                + self.structs
                + self.type_types
                + self.mappings,
            self.fresh,
            self.relocations,
            self.arena_bytes,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_provider_has_only_singletons() {
        let arena = Bump::new();
        let types = TypeProvider::new(&arena, ProviderOptions::default());

        let stats = types.stats();
        assert_eq!(stats.singletons, SingletonTable::LEN);
        assert_eq!(stats.total(), SingletonTable::LEN);
        assert!(stats.arena_bytes > 0);
    }

    #[test]
    fn test_options_are_kept() {
        let arena = Bump::new();
        let options = ProviderOptions {
            string_literal_capacity: 1,
            declaration_capacity: 2,
        };
        let types = TypeProvider::new(&arena, options.clone());
        assert_eq!(types.options(), &options);
        assert!(core::ptr::eq(types.arena(), &arena));
    }
}
