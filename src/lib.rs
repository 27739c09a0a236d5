pub mod cli;
pub mod commands;
pub mod config;
pub mod convert;
pub mod emit;
pub mod error;
pub mod extract;
pub mod logging;
pub mod output;
pub mod svg;

pub use convert::{ConversionResult, Converter, Notification, Severity, convert};
pub use emit::OutputMode;
pub use error::{Result, SvgToXamlError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONVERSION_FAILED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
