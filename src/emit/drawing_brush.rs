use std::fmt::Write;

use crate::extract::{DEFAULT_COLOR, PathRecord};

use super::{AttributeEncoding, MarkupEmitter};

/// `<DrawingBrush>` with one `<GeometryDrawing>` per record.
///
/// Records are written in order, so later paths paint over earlier ones.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrawingBrushEmitter {
    encoding: AttributeEncoding,
}

impl DrawingBrushEmitter {
    #[must_use]
    pub const fn new(encoding: AttributeEncoding) -> Self {
        Self { encoding }
    }
}

impl MarkupEmitter for DrawingBrushEmitter {
    fn emit(&self, key: &str, records: &[PathRecord]) -> String {
        let mut output = String::new();
        let key = self.encoding.apply(key);

        let _ = writeln!(output, r#"<DrawingBrush x:Key="{key}" Stretch="Uniform">"#);
        output.push_str("    <DrawingBrush.Drawing>\n");
        output.push_str("        <DrawingGroup>\n");
        output.push_str("            <DrawingGroup.Children>\n");

        for record in records {
            let brush = self.encoding.apply(record.color().unwrap_or(DEFAULT_COLOR));
            let geometry = self.encoding.apply(record.geometry());
            let _ = writeln!(
                output,
                r#"               <GeometryDrawing Brush="{brush}" Geometry="{geometry}" />"#
            );
        }

        output.push_str("            </DrawingGroup.Children>\n");
        output.push_str("        </DrawingGroup>\n");
        output.push_str("    </DrawingBrush.Drawing>\n");
        output.push_str("</DrawingBrush>\n");
        output
    }
}
