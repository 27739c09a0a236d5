//! Error and warning output on stderr, with color support.
//!
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use crate::convert::{Notification, Severity};
use crate::error::SvgToXamlError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_colors(Self::should_use_colors(mode))
    }

    /// Creates an error output formatter with explicit color control.
    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // Per <https://no-color.org>: presence of the variable (any value) disables color.
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a conversion notification to stderr.
    pub fn print_notification(&self, notification: &Notification) {
        let mut stderr = std::io::stderr().lock();
        self.write_notification(&mut stderr, notification);
    }

    /// Writes a conversion notification.
    ///
    /// The first line of the message is the headline; remaining non-empty lines become details.
    pub fn write_notification<W: Write>(&self, w: &mut W, notification: &Notification) {
        let mut lines = notification.message.lines().filter(|l| !l.trim().is_empty());
        let headline = lines.next().unwrap_or_default();
        let detail: Vec<&str> = lines.collect();
        let detail = (!detail.is_empty()).then(|| detail.join(" "));

        match notification.severity {
            Severity::Error => self.write_error(
                w,
                notification.title(),
                headline,
                detail.as_deref(),
                notification.help,
            ),
            Severity::Warning => {
                self.write_warning(w, headline, detail.as_deref(), notification.help);
            }
        }
    }

    /// Prints a command failure, with its source error as detail.
    pub fn print_error(&self, error: &SvgToXamlError) {
        let mut stderr = std::io::stderr().lock();
        self.write_failure(&mut stderr, error);
    }

    /// Writes a command failure.
    pub fn write_failure<W: Write>(&self, w: &mut W, error: &SvgToXamlError) {
        let detail = std::error::Error::source(error).map(ToString::to_string);
        self.write_error(
            w,
            error.error_type(),
            &error.to_string(),
            detail.as_deref(),
            None,
        );
    }

    /// Writes error to a writer.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr cannot be reported anywhere else.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    /// Writes warning to a writer.
    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
        self.write_tail(w, detail, suggestion);
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
