mod color;

pub use color::{ColorResolver, DEFAULT_COLOR, is_hex_color};

use tracing::{debug, trace};

use crate::svg::{Element, SvgDocument};

/// Tag of the only path-bearing element.
pub const PATH_TAG: &str = "path";

const GEOMETRY_ATTRIBUTE: &str = "d";
const STYLE_ATTRIBUTE: &str = "style";
const FILL_ATTRIBUTE: &str = "fill";

/// Geometry of one `<path>` and, for multi-color output, its brush.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRecord {
    geometry: String,
    color: Option<String>,
}

impl PathRecord {
    #[must_use]
    pub fn new(geometry: impl Into<String>) -> Self {
        Self {
            geometry: geometry.into(),
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Raw path data, passed through unchanged.
    #[must_use]
    pub fn geometry(&self) -> &str {
        &self.geometry
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }
}

/// Collect every `<path>` with non-empty path data, in document order.
///
/// With `colors` set, each record also carries the brush resolved from the element's `style`
/// (if non-blank), else its `fill` (if non-blank), else the resolver's default.
#[must_use]
pub fn extract_paths(document: &SvgDocument, colors: Option<&ColorResolver>) -> Vec<PathRecord> {
    let records: Vec<PathRecord> = document
        .descendants()
        .filter(|element| element.tag() == PATH_TAG)
        .filter_map(|element| {
            let record = to_record(element, colors);
            if record.is_none() {
                trace!("Skipping path without geometry");
            }
            record
        })
        .collect();

    debug!(paths = records.len(), "Extracted path records");
    records
}

fn to_record(element: &Element, colors: Option<&ColorResolver>) -> Option<PathRecord> {
    let geometry = element
        .attribute(GEOMETRY_ATTRIBUTE)
        .filter(|d| !d.is_empty())?;
    let record = PathRecord::new(geometry);

    Some(match colors {
        Some(resolver) => record.with_color(element_color(element, resolver)),
        None => record,
    })
}

fn element_color<'a>(element: &'a Element, resolver: &'a ColorResolver) -> &'a str {
    let non_blank = |name: &str| element.attribute(name).filter(|v| !v.trim().is_empty());

    non_blank(STYLE_ATTRIBUTE)
        .or_else(|| non_blank(FILL_ATTRIBUTE))
        .map_or(resolver.default_color(), |candidate| {
            resolver.resolve(candidate)
        })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
