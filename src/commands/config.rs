use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::{ErrorOutput, OutputFormat};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, SvgToXamlError};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|()| {
            println!("Configuration is valid: {}", config.display());
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), format, cli.no_config).map(|output| {
                print!("{output}");
            })
        }
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has invalid values.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(SvgToXamlError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the config cannot be loaded or serialized, or `format` is unknown.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: &str,
    no_config: bool,
) -> Result<String> {
    let config = super::load_config(config_path, no_config)?;

    match format.parse::<OutputFormat>().map_err(SvgToXamlError::Config)? {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&config)? + "\n"),
        OutputFormat::Text => format_config_text(&config),
    }
}

/// Effective configuration as TOML, preceded by a short summary.
///
/// # Errors
/// Returns an error if the config cannot be serialized.
pub fn format_config_text(config: &Config) -> Result<String> {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "# mode: {} ({})",
        config.convert.mode,
        config.convert.mode.label()
    );
    output.push_str(&toml::to_string_pretty(config)?);
    Ok(output)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
