use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::emit::OutputMode;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "svg-to-xaml")]
#[command(author, version, about = "Convert SVG icons into XAML markup")]
#[command(long_about = "Convert an SVG icon into a WPF Path, a WPF/Avalonia DrawingBrush or an \
    Avalonia StreamGeometry.\n\n\
    Exit codes:\n  \
    0 - Conversion succeeded\n  \
    1 - Conversion failed (or produced warnings with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert an SVG document to XAML
    Convert(ConvertArgs),

    /// List the available output modes
    Modes,

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// SVG file to convert ("-" or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Element key written as x:Key (overrides config)
    #[arg(short, long)]
    pub key: Option<String>,

    /// Output mode [possible values: path, drawing-brush, stream-geometry]
    #[arg(short, long)]
    pub mode: Option<OutputMode>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Escape markup characters in key, geometry and brush values
    #[arg(long)]
    pub escape: bool,

    /// Treat warnings as failures (exit code 1)
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".svg-to-xaml.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file (default: .svg-to-xaml.toml)
        #[arg(short, long, default_value = ".svg-to-xaml.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
