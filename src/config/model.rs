use serde::{Deserialize, Serialize};

use crate::convert::Converter;
use crate::emit::{AttributeEncoding, OutputMode};
use crate::error::{Result, SvgToXamlError};
use crate::extract::{ColorResolver, DEFAULT_COLOR, is_hex_color};
use crate::svg::ParseOptions;

/// Template written by `svg-to-xaml init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# svg-to-xaml configuration

[convert]
# Output mode: "path", "drawing-brush" or "stream-geometry"
mode = "path"

# Default x:Key for the generated element (overridden by --key)
key = ""

# Escape & < > " ' in key, geometry and brush values.
# Off by default: values are copied into the markup unchanged.
escape_attributes = false

# Brush used by drawing-brush output when a path has no #RRGGBB color
default_color = "#FFFFFF"

[parser]
# Accept <!DOCTYPE> declarations
allow_dtd = true
"##;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub convert: ConvertConfig,

    #[serde(default)]
    pub parser: ParserConfig,
}

/// `[convert]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConvertConfig {
    #[serde(default)]
    pub mode: OutputMode,

    #[serde(default)]
    pub key: String,

    #[serde(default)]
    pub escape_attributes: bool,

    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            mode: OutputMode::default(),
            key: String::new(),
            escape_attributes: false,
            default_color: default_color(),
        }
    }
}

/// `[parser]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "default_true")]
    pub allow_dtd: bool,

    #[serde(default = "default_nodes_limit")]
    pub nodes_limit: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_dtd: true,
            nodes_limit: default_nodes_limit(),
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            allow_dtd: self.allow_dtd,
            nodes_limit: self.nodes_limit,
        }
    }
}

impl Config {
    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    /// Returns an error if `default_color` is not `#RRGGBB` or `nodes_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if !is_hex_color(&self.convert.default_color) {
            return Err(SvgToXamlError::Config(format!(
                "convert.default_color '{}' must be '#' followed by six hex digits",
                self.convert.default_color
            )));
        }
        if self.parser.nodes_limit == 0 {
            return Err(SvgToXamlError::Config(
                "parser.nodes_limit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build a [`Converter`] from these settings.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn converter(&self) -> Result<Converter> {
        self.validate()?;
        let colors = ColorResolver::new().with_default_color(&self.convert.default_color)?;
        Ok(Converter::new()
            .with_parse_options(self.parser.parse_options())
            .with_color_resolver(colors)
            .with_encoding(AttributeEncoding::from_escape_flag(
                self.convert.escape_attributes,
            )))
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

const fn default_true() -> bool {
    true
}

const fn default_nodes_limit() -> u32 {
    u32::MAX
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
