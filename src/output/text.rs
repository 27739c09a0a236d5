use crate::error::Result;

use super::{ConversionReport, OutputFormatter};

/// Emits the XAML markup unchanged.
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ConversionReport<'_>) -> Result<String> {
        Ok(report.result.markup().to_string())
    }
}
