use std::fmt::Write;

use crate::extract::PathRecord;

use super::{AttributeEncoding, MarkupEmitter};

/// Avalonia `<StreamGeometry>`: path data only, one line per record.
///
/// Meant for single-path icons. Multiple paths are written on consecutive lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamGeometryEmitter {
    encoding: AttributeEncoding,
}

impl StreamGeometryEmitter {
    #[must_use]
    pub const fn new(encoding: AttributeEncoding) -> Self {
        Self { encoding }
    }
}

impl MarkupEmitter for StreamGeometryEmitter {
    fn emit(&self, key: &str, records: &[PathRecord]) -> String {
        let mut output = String::new();
        let key = self.encoding.apply(key);

        let _ = writeln!(output, r#"<StreamGeometry x:Key="{key}">"#);
        for record in records {
            let _ = writeln!(output, "   {}", self.encoding.apply(record.geometry()));
        }
        output.push_str("</StreamGeometry>\n");
        output
    }
}
