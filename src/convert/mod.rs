//! The conversion pipeline: parse, check, extract, emit.

mod result;

pub use result::{ConversionResult, ConversionWarning, Notification, SHAPE_TO_PATH_URL, Severity};

use tracing::{debug, warn};

use crate::emit::{AttributeEncoding, OutputMode};
use crate::error::{Result, SvgToXamlError};
use crate::extract::{ColorResolver, extract_paths};
use crate::svg::{ParseOptions, find_disallowed, parse_with_options};

/// Convert with default settings.
///
/// Never fails: errors are reported through [`ConversionResult::notifications`].
#[must_use]
pub fn convert(svg_text: &str, key: &str, mode: OutputMode) -> ConversionResult {
    Converter::new().convert(svg_text, key, mode)
}

/// Reusable conversion settings. Holds no per-call state.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    parse_options: ParseOptions,
    colors: ColorResolver,
    encoding: AttributeEncoding,
}

impl Converter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    #[must_use]
    pub fn with_color_resolver(mut self, colors: ColorResolver) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: AttributeEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub const fn encoding(&self) -> AttributeEncoding {
        self.encoding
    }

    /// Convert `svg_text` into `mode` markup keyed by `key`.
    ///
    /// Blank input and malformed markup produce an error notification and empty markup.
    /// A blank key or unsupported elements produce warnings next to the markup.
    #[must_use]
    pub fn convert(&self, svg_text: &str, key: &str, mode: OutputMode) -> ConversionResult {
        if svg_text.trim().is_empty() {
            warn!("Input SVG is empty");
            return ConversionResult::failed(vec![Notification::error(
                &SvgToXamlError::EmptyInput,
            )]);
        }

        let mut notifications = Vec::new();
        if key.trim().is_empty() {
            notifications.push(ConversionWarning::BlankKey.into());
        }

        match self.try_convert(svg_text, key, mode, &mut notifications) {
            Ok(markup) => ConversionResult::converted(markup, notifications),
            Err(err) => {
                warn!(error = %err, "SVG conversion failed");
                notifications.push(Notification::error(&err));
                ConversionResult::failed(notifications)
            }
        }
    }

    fn try_convert(
        &self,
        svg_text: &str,
        key: &str,
        mode: OutputMode,
        notifications: &mut Vec<Notification>,
    ) -> Result<String> {
        let document = parse_with_options(svg_text, &self.parse_options)?;

        if let Some(element) = find_disallowed(&document) {
            debug!(tag = element.tag(), "Found element that cannot be converted");
            notifications.push(ConversionWarning::UnsupportedElement.into());
        }

        let colors = mode.resolves_colors().then_some(&self.colors);
        let records = extract_paths(&document, colors);

        debug!(%mode, paths = records.len(), "Emitting markup");
        Ok(mode.emitter(self.encoding).emit(key, &records))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
