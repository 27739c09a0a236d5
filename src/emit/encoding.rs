use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// How attribute values (key, geometry, brush) are written into the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeEncoding {
    /// Inserted as-is.
    #[default]
    Verbatim,
    /// Markup-significant characters are replaced with entities.
    Escaped,
}

impl AttributeEncoding {
    #[must_use]
    pub const fn from_escape_flag(escape: bool) -> Self {
        if escape { Self::Escaped } else { Self::Verbatim }
    }

    #[must_use]
    pub fn apply(self, value: &str) -> Cow<'_, str> {
        match self {
            Self::Verbatim => Cow::Borrowed(value),
            Self::Escaped => escape_attribute(value),
        }
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }
    Cow::Owned(
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}
