use regex::Regex;

use crate::error::{Result, SvgToXamlError};

/// Brush used when no color can be found.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// `#` followed by exactly six hex digits. The trailing word boundary rejects longer hex runs
/// such as `#ABCDEF12`.
const HEX_COLOR_PATTERN: &str = r"#[a-fA-F0-9]{6}\b";

/// Finds `#RRGGBB` tokens in `style` and `fill` attribute values.
#[derive(Debug, Clone)]
pub struct ColorResolver {
    pattern: Regex,
    default_color: String,
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(HEX_COLOR_PATTERN).expect("Invalid regex"),
            default_color: DEFAULT_COLOR.to_string(),
        }
    }

    /// Use `color` instead of [`DEFAULT_COLOR`] as the fallback.
    ///
    /// # Errors
    /// Returns an error if `color` is not itself a `#RRGGBB` token.
    pub fn with_default_color(mut self, color: &str) -> Result<Self> {
        if !is_hex_color(color) {
            return Err(SvgToXamlError::Config(format!(
                "Invalid default color '{color}': expected '#' followed by six hex digits"
            )));
        }
        self.default_color = color.to_string();
        Ok(self)
    }

    #[must_use]
    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    /// First bounded `#RRGGBB` token in `input`, or the default color.
    ///
    /// Hex digit case is kept as written.
    #[must_use]
    pub fn resolve<'a>(&'a self, input: &'a str) -> &'a str {
        self.pattern
            .find(input)
            .map_or(self.default_color.as_str(), |found| found.as_str())
    }
}

/// Whether `value` is exactly `#RRGGBB`.
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
