//! Error handling utilities for the CLI.

use solty::{Error, RenderConfig, render_error_to};

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, Error>;

/// Render an error to stderr and exit with code 1.
///
/// Every error that reaches here is a compiler bug, so the report is followed
/// by the fault kind and how to capture a trace for the bug report.
pub fn render_and_exit(error: Error, no_color: bool) -> ! {
    let config = RenderConfig {
        color: !no_color,
        ..Default::default()
    };
    render_error_to(&error, &mut std::io::stderr(), &config).ok();
    eprintln!("{}", bug_report_note(&error));
    std::process::exit(1);
}

fn bug_report_note(error: &Error) -> String {
    let kind = if error.internal().is_precondition() {
        "precondition"
    } else {
        "unreachable case"
    };
    format!(
        "note: the type registry aborted on a broken {kind}; \
         rerun with RUST_LOG=solty_core=trace and attach the output to the bug report"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use solty::InternalCompilerError;

    #[test]
    fn note_names_the_fault_kind() {
        let precondition = Error::from(InternalCompilerError::precondition("bad width"));
        assert!(bug_report_note(&precondition).contains("broken precondition"));

        let unreachable = Error::from(InternalCompilerError::unreachable("bad token"));
        assert!(bug_report_note(&unreachable).contains("broken unreachable case"));
        assert!(bug_report_note(&unreachable).contains("RUST_LOG=solty_core=trace"));
    }
}
