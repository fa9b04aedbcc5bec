//! The `signature` command - build a function type from type names.

use solty::{Session, SessionOptions, SessionOptionsOverride};

use crate::cli::SignatureArgs;
use crate::common::CliResult;

/// Run the signature command.
pub fn run(args: SignatureArgs, overrides: &SessionOptionsOverride) -> CliResult<()> {
    let params: Vec<&str> = args.params.iter().map(String::as_str).collect();
    let returns: Vec<&str> = args.returns.iter().map(String::as_str).collect();

    tracing::debug!(?params, ?returns, kind = ?args.kind, "Building function type");
    let session = Session::new(SessionOptions::default());
    let outcome = session.run(overrides, |types| {
        let function = types.function_type_from_signature(
            &params,
            &returns,
            args.kind.into(),
            args.arbitrary_parameters,
            args.mutability.into(),
        )?;
        Ok(function.to_string())
    })?;

    println!("{}", outcome.value);
    Ok(())
}
