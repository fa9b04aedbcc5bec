use miette::Diagnostic;
use solty_core::InternalCompilerError;
use thiserror::Error;

/// Why a session was aborted.
///
/// The registry only fails on broken contracts between compiler components,
/// so every variant is reported as a compiler bug, never as a problem with
/// the user's code.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("internal compiler error: {0}")]
    #[diagnostic(
        code(solty::internal_compiler_error),
        help("this is a bug in the compiler; please report it with the input that triggered it")
    )]
    Internal(#[from] InternalCompilerError),
}

impl Error {
    /// The fault that aborted the session.
    pub fn internal(&self) -> &InternalCompilerError {
        match self {
            Error::Internal(fault) => fault,
        }
    }
}
