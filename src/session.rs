//! One compilation run: an arena, a registry and the options they were built with.

use bumpalo::Bump;
use solty_core::{
    InternalCompilerError, ProviderOptions, ProviderOptionsOverride, ProviderStats, TypeProvider,
};

use crate::Error;

/// Configuration of a [`Session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Bytes reserved up front for the type arena.
    pub arena_capacity: usize,
    pub provider: ProviderOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            arena_capacity: 16 * 1024,
            provider: ProviderOptions::default(),
        }
    }
}

impl SessionOptions {
    pub fn override_with(&mut self, overrides: &SessionOptionsOverride) {
        if let Some(capacity) = overrides.arena_capacity {
            self.arena_capacity = capacity;
        }
        self.provider.override_with(&overrides.provider);
    }
}

/// Partial [`SessionOptions`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOptionsOverride {
    pub arena_capacity: Option<usize>,
    pub provider: ProviderOptionsOverride,
}

/// What a successful run produced, plus the final registry statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    pub value: T,
    pub stats: ProviderStats,
}

/// Runs compilations, each with its own arena and [`TypeProvider`].
///
/// Types never outlive the run that created them: the arena and the registry
/// are dropped together when [`Session::run`] returns, whether the run
/// succeeded or was aborted by an internal fault.
///
/// # Example
///
/// ```
/// use solty::{Session, SessionOptions};
///
/// let session = Session::new(SessionOptions::default());
/// let outcome = session
///     .run(&Default::default(), |types| {
///         let ty = types.from_elementary_type_name_str("uint")?;
///         Ok(ty.to_string())
///     })
///     .unwrap();
/// assert_eq!(outcome.value, "uint256");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    options: SessionOptions,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Run `compile` against a fresh registry.
    ///
    /// An internal fault aborts the run and is returned as [`Error::Internal`].
    pub fn run<T>(
        &self,
        overrides: &SessionOptionsOverride,
        compile: impl for<'a> FnOnce(&TypeProvider<'a>) -> Result<T, InternalCompilerError>,
    ) -> Result<Outcome<T>, Error> {
        let mut options = self.options.clone();
        options.override_with(overrides);

        let arena = Bump::with_capacity(options.arena_capacity);
        let types = TypeProvider::new(&arena, options.provider);
        tracing::debug!(arena_capacity = options.arena_capacity, "Session started");

        match compile(&types) {
            Ok(value) => {
                let stats = types.stats();
                tracing::debug!(%stats, "Session finished");
                Ok(Outcome { value, stats })
            }
            Err(fault) => {
                tracing::error!(%fault, stats = %types.stats(), "Session aborted");
                Err(Error::Internal(fault))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use solty_types::MagicKind;

    #[test]
    fn test_run_reports_stats() {
        let session = Session::default();
        let outcome = session
            .run(&Default::default(), |types| {
                types.string_literal_type("a");
                types.string_literal_type("a");
                Ok(types.bool_type().to_string())
            })
            .unwrap();

        assert_eq!(outcome.value, "bool");
        assert_eq!(outcome.stats.string_literals, 1);
    }

    #[test]
    fn test_fault_aborts_run() {
        let session = Session::default();
        let err = session
            .run(&Default::default(), |types| {
                types.magic_type(MagicKind::MetaType)?;
                Ok(())
            })
            .unwrap_err();

        assert!(err.internal().is_precondition());
    }

    #[test]
    fn test_overrides_apply_to_one_run() {
        let session = Session::new(SessionOptions::default());
        let overrides = SessionOptionsOverride {
            provider: ProviderOptionsOverride {
                declaration_capacity: Some(1),
                ..Default::default()
            },
            ..Default::default()
        };

        let capacity = session
            .run(&overrides, |types| Ok(types.options().declaration_capacity))
            .unwrap()
            .value;
        assert_eq!(capacity, 1);
        assert_eq!(session.options(), &SessionOptions::default());
    }
}
