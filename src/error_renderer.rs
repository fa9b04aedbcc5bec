//! Error rendering using miette
//!
//! Internal faults carry no source location, so a report is the message, the
//! diagnostic code and the help text.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme, ThemeCharacters, ThemeStyles};
use std::io::Write;

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The character set to use for rendering.
    /// Defaults to Unicode for rich visual output.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        let characters = match self.charset {
            CharSet::Unicode => ThemeCharacters::unicode(),
            CharSet::Ascii => ThemeCharacters::ascii(),
        };
        let styles = if self.color {
            ThemeStyles::ansi()
        } else {
            ThemeStyles::none()
        };
        GraphicalTheme { characters, styles }
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use solty::{Session, render_error};
/// use solty_types::MagicKind;
///
/// let session = Session::default();
/// let result = session.run(&Default::default(), |types| {
///     types.magic_type(MagicKind::MetaType)?;
///     Ok(())
/// });
/// if let Err(e) = result {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let mut report = String::new();
    GraphicalReportHandler::new_themed(config.theme())
        .render_report(&mut report, error)
        .map_err(|_| std::io::Error::other("failed to format error report"))?;
    writer.write_all(report.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solty_core::InternalCompilerError;

    const UNICODE_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Unicode,
    };

    const ASCII_CONFIG: RenderConfig = RenderConfig {
        color: false,
        charset: CharSet::Ascii,
    };

    fn render_error_string(error: &Error, config: &RenderConfig) -> String {
        let mut buf = Vec::new();
        render_error_to(error, &mut buf, config).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn unreachable_token() -> Error {
        Error::from(InternalCompilerError::unreachable("bad token"))
    }

    #[test]
    fn test_report_contents() {
        let output = render_error_string(&unreachable_token(), &UNICODE_CONFIG);
        assert!(output.contains("solty::internal_compiler_error"), "{output}");
        assert!(output.contains("unreachable: bad token"), "{output}");
        assert!(output.contains("help:"), "{output}");
    }

    #[test]
    fn test_ascii_report_is_ascii() {
        let output = render_error_string(&unreachable_token(), &ASCII_CONFIG);
        assert!(output.is_ascii(), "{output}");
        assert!(output.contains("bad token"), "{output}");
    }

    #[test]
    fn test_no_color_has_no_escapes() {
        let output = render_error_string(&unreachable_token(), &UNICODE_CONFIG);
        assert!(!output.contains('\u{1b}'), "{output:?}");
    }

    #[test]
    fn test_charset_default_is_unicode() {
        assert_eq!(CharSet::default(), CharSet::Unicode);
    }

    #[test]
    fn test_render_config_default_charset() {
        let config = RenderConfig::default();
        assert_eq!(config.charset, CharSet::Unicode);
        assert!(config.color);
    }
}
