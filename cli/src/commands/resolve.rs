//! The `resolve` command - print the canonical name of elementary type names.

use solty::{InternalCompilerError, Session, SessionOptions, SessionOptionsOverride};

use crate::cli::ResolveArgs;
use crate::common::CliResult;

/// Run the resolve command.
pub fn run(args: ResolveArgs, overrides: &SessionOptionsOverride) -> CliResult<()> {
    tracing::debug!(names = ?args.names, "Resolving type names");
    let session = Session::new(SessionOptions::default());
    let outcome = session.run(overrides, |types| {
        args.names
            .iter()
            .map(|name| -> Result<String, InternalCompilerError> {
                let ty = types.from_elementary_type_name_str(name)?;
                Ok(format!("{name} => {ty}"))
            })
            .collect::<Result<Vec<_>, _>>()
    })?;

    for line in &outcome.value {
        println!("{line}");
    }
    if args.stats {
        println!("{}", outcome.stats);
    }
    Ok(())
}
