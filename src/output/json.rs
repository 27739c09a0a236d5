use serde::Serialize;

use crate::convert::Notification;
use crate::emit::OutputMode;
use crate::error::Result;

use super::{ConversionReport, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    mode: OutputMode,
    key: &'a str,
    success: bool,
    markup: &'a str,
    notifications: &'a [Notification],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ConversionReport<'_>) -> Result<String> {
        let output = JsonOutput {
            mode: report.mode,
            key: report.key,
            success: report.result.is_success(),
            markup: report.result.markup(),
            notifications: report.result.notifications(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
