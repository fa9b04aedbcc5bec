//! Session configuration from command-line flags.

use solty::{ProviderOptionsOverride, SessionOptionsOverride};

use crate::cli::SessionArgs;

/// Map the global flags onto a session override; unset flags keep the defaults.
pub fn overrides(args: &SessionArgs) -> SessionOptionsOverride {
    SessionOptionsOverride {
        arena_capacity: args.arena_capacity,
        provider: ProviderOptionsOverride {
            string_literal_capacity: args.string_literal_capacity,
            declaration_capacity: args.declaration_capacity,
        },
    }
}
