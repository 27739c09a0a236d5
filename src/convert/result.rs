use std::fmt;

use serde::Serialize;

use crate::error::SvgToXamlError;

/// Page that converts SVG shapes (rect, circle, ...) into `<path>` elements.
pub const SHAPE_TO_PATH_URL: &str = "https://thednp.github.io/svg-path-commander/convert.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Conditions that are reported but do not stop conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionWarning {
    /// The tree holds elements other than `svg`, `g` and `path`; they were ignored.
    UnsupportedElement,
    /// The element key is empty or whitespace; markup carries an empty key.
    BlankKey,
}

impl ConversionWarning {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnsupportedElement => {
                "SVG Contains elements that cannot be converted\n\nPlease use the SVG Shape to Path converter"
            }
            Self::BlankKey => "Element Key is Blank",
        }
    }

    #[must_use]
    pub const fn help(self) -> Option<&'static str> {
        match self {
            Self::UnsupportedElement => Some(SHAPE_TO_PATH_URL),
            Self::BlankKey => None,
        }
    }
}

/// A titled message for the caller to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub severity: Severity,
    /// `Warning` or `Error`, matching `severity`.
    pub title: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
}

impl Notification {
    #[must_use]
    pub fn warning(warning: ConversionWarning) -> Self {
        Self {
            severity: Severity::Warning,
            title: Severity::Warning.title(),
            message: warning.message().to_string(),
            help: warning.help(),
        }
    }

    /// Error notification for a failed conversion.
    ///
    /// Blank input is reported as-is; every other failure is prefixed with
    /// `Error converting SVG`.
    #[must_use]
    pub fn error(error: &SvgToXamlError) -> Self {
        let message = match error {
            SvgToXamlError::EmptyInput => error.to_string(),
            other => format!("Error converting SVG\n{other}"),
        };
        Self {
            severity: Severity::Error,
            title: Severity::Error.title(),
            message,
            help: None,
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl From<ConversionWarning> for Notification {
    fn from(warning: ConversionWarning) -> Self {
        Self::warning(warning)
    }
}

/// Outcome of one conversion: markup plus every notification raised on the way.
///
/// On failure the markup is empty and at least one notification has [`Severity::Error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    markup: String,
    notifications: Vec<Notification>,
}

impl ConversionResult {
    #[must_use]
    pub const fn converted(markup: String, notifications: Vec<Notification>) -> Self {
        Self {
            markup,
            notifications,
        }
    }

    #[must_use]
    pub const fn failed(notifications: Vec<Notification>) -> Self {
        Self {
            markup: String::new(),
            notifications,
        }
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.notifications.iter().any(Notification::is_error)
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.has_errors()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| !n.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter().filter(|n| n.is_error())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
