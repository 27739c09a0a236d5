use std::fmt::Write;

use crate::extract::PathRecord;

use super::{AttributeEncoding, MarkupEmitter};

/// Fill used for the whole compound geometry.
pub const PATH_FILL: &str = "Black";

/// WPF `<Path>` wrapping every geometry in a single `<GeometryGroup>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathEmitter {
    encoding: AttributeEncoding,
}

impl PathEmitter {
    #[must_use]
    pub const fn new(encoding: AttributeEncoding) -> Self {
        Self { encoding }
    }
}

impl MarkupEmitter for PathEmitter {
    fn emit(&self, key: &str, records: &[PathRecord]) -> String {
        let mut output = String::new();
        let key = self.encoding.apply(key);

        let _ = writeln!(output, r#"<Path x:Key="{key}" Fill="{PATH_FILL}">"#);
        output.push_str("    <Path.Data>\n");
        output.push_str("        <GeometryGroup>\n");

        for record in records {
            let figures = self.encoding.apply(record.geometry());
            let _ = writeln!(output, r#"           <PathGeometry Figures="{figures}" />"#);
        }

        output.push_str("        </GeometryGroup>\n");
        output.push_str("    </Path.Data>\n");
        output.push_str("</Path>\n");
        output
    }
}
