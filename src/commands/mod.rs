pub mod config;
pub mod convert;
pub mod init;
pub mod modes;

pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use convert::{read_input, run_convert, run_convert_impl};
pub use init::{run_init, run_init_impl};
pub use modes::{format_modes, run_modes};

use std::path::Path;

use crate::Result;
use crate::config::{Config, ConfigLoader, FileConfigLoader};

/// Load config from `path`, by discovery, or skip loading entirely.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read, parsed or validated.
pub fn load_config(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}
