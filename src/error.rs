use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvgToXamlError {
    #[error("Input SVG is empty")]
    EmptyInput,

    #[error("Invalid SVG markup: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl SvgToXamlError {
    /// Short category name, used as the heading of CLI error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Input",
            Self::Parse(_) => "Parse",
            Self::Config(_) | Self::TomlParse(_) | Self::TomlSerialize(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Output",
        }
    }
}

pub type Result<T> = std::result::Result<T, SvgToXamlError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
