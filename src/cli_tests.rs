use std::path::PathBuf;

use super::*;

#[test]
fn cli_convert_reads_stdin_by_default() {
    let cli = Cli::parse_from(["svg-to-xaml", "convert"]);
    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.input, None);
            assert_eq!(args.key, None);
            assert_eq!(args.mode, None);
            assert_eq!(args.format, OutputFormat::Text);
            assert!(!args.escape);
            assert!(!args.strict);
        }
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn cli_convert_with_input_and_key() {
    let cli = Cli::parse_from(["svg-to-xaml", "convert", "icon.svg", "--key", "AppIcon"]);
    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.input, Some(PathBuf::from("icon.svg")));
            assert_eq!(args.key.as_deref(), Some("AppIcon"));
        }
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn cli_convert_with_mode() {
    let cli = Cli::parse_from(["svg-to-xaml", "convert", "-m", "drawing-brush"]);
    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.mode, Some(OutputMode::MultiColorDrawing));
        }
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn cli_convert_rejects_unknown_mode() {
    let result = Cli::try_parse_from(["svg-to-xaml", "convert", "--mode", "png"]);
    assert!(result.is_err());
}

#[test]
fn cli_convert_json_output_file() {
    let cli = Cli::parse_from([
        "svg-to-xaml",
        "convert",
        "icon.svg",
        "--format",
        "json",
        "-o",
        "icon.json",
    ]);
    match cli.command {
        Commands::Convert(args) => {
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.output, Some(PathBuf::from("icon.json")));
        }
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn cli_convert_flags() {
    let cli = Cli::parse_from(["svg-to-xaml", "convert", "--escape", "--strict"]);
    match cli.command {
        Commands::Convert(args) => {
            assert!(args.escape);
            assert!(args.strict);
        }
        _ => panic!("Expected Convert command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["svg-to-xaml", "-vv", "--quiet", "--no-config", "modes"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(cli.no_config);
    assert!(matches!(cli.command, Commands::Modes));
}

#[test]
fn cli_color_choice() {
    let cli = Cli::parse_from(["svg-to-xaml", "--color", "never", "modes"]);
    assert_eq!(ColorMode::from(cli.color), ColorMode::Never);
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["svg-to-xaml", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".svg-to-xaml.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_show() {
    let cli = Cli::parse_from(["svg-to-xaml", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert_eq!(config, None);
            assert_eq!(format, "json");
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn cli_config_validate_default_path() {
    let cli = Cli::parse_from(["svg-to-xaml", "config", "validate"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Validate { config },
        }) => {
            assert_eq!(config, PathBuf::from(".svg-to-xaml.toml"));
        }
        _ => panic!("Expected Config Validate command"),
    }
}
