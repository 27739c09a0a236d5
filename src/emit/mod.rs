//! XAML markup emitters, one per [`OutputMode`].

mod drawing_brush;
mod encoding;
mod mode;
mod path;
mod stream_geometry;

pub use drawing_brush::DrawingBrushEmitter;
pub use encoding::{AttributeEncoding, escape_attribute};
pub use mode::OutputMode;
pub use path::PathEmitter;
pub use stream_geometry::StreamGeometryEmitter;

use crate::extract::PathRecord;

/// Turns extracted path records into one XAML snippet.
pub trait MarkupEmitter {
    /// Emit markup keyed by `key`.
    ///
    /// An empty `records` slice still produces the wrapping elements.
    fn emit(&self, key: &str, records: &[PathRecord]) -> String;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
