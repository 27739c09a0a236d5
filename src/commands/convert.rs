use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::cli::{Cli, ConvertArgs};
use crate::convert::ConversionResult;
use crate::emit::AttributeEncoding;
use crate::output::{ConversionReport, ErrorOutput, OutputFormat};
use crate::{
    EXIT_CONFIG_ERROR, EXIT_CONVERSION_FAILED, EXIT_SUCCESS, Result, SvgToXamlError,
};

#[must_use]
pub fn run_convert(args: &ConvertArgs, cli: &Cli) -> i32 {
    match run_convert_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs one conversion and writes its output.
///
/// Returns the process exit code. Conversion problems are reported through notifications;
/// only configuration and I/O failures surface as errors.
///
/// # Errors
/// Returns an error if the config cannot be loaded, the input cannot be read, or the output
/// cannot be written.
pub fn run_convert_impl(args: &ConvertArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let config = super::load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    let mode = args.mode.unwrap_or(config.convert.mode);
    let key = args.key.clone().unwrap_or_else(|| config.convert.key.clone());
    let mut converter = config.converter()?;
    if args.escape {
        converter = converter.with_encoding(AttributeEncoding::Escaped);
    }

    // 3. Read input
    let svg_text = read_input(args.input.as_deref())?;
    debug!(bytes = svg_text.len(), %mode, "Read SVG input");

    // 4. Convert
    let result = converter.convert(&svg_text, &key, mode);

    // 5. Report notifications
    report_notifications(&result, cli);

    // 6. Format and write output
    let report = ConversionReport {
        mode,
        key: &key,
        result: &result,
    };
    if args.format == OutputFormat::Json || result.is_success() {
        let output = args.format.formatter().format(&report)?;
        write_output(args.output.as_deref(), &output)?;
    }

    // 7. Determine exit code
    if result.has_errors() || (args.strict && result.has_warnings()) {
        Ok(EXIT_CONVERSION_FAILED)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Reads SVG text from `path`, or from stdin when `path` is `None` or `-`.
///
/// # Errors
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| SvgToXamlError::FileRead {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn report_notifications(result: &ConversionResult, cli: &Cli) {
    let out = ErrorOutput::new(cli.color.into());
    for notification in result.notifications() {
        if notification.is_error() || !cli.quiet {
            out.print_notification(notification);
        }
    }
}

fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
        info!(path = %path.display(), "Wrote output");
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
