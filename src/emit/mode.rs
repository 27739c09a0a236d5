use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    AttributeEncoding, DrawingBrushEmitter, MarkupEmitter, PathEmitter, StreamGeometryEmitter,
};

/// Target markup flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// WPF `<Path>` with a geometry group and a fixed black fill.
    #[default]
    #[serde(rename = "path")]
    SingleColorPath,
    /// `<DrawingBrush>` with one colored geometry drawing per path.
    #[serde(rename = "drawing-brush")]
    MultiColorDrawing,
    /// Avalonia `<StreamGeometry>` holding the raw path data.
    #[serde(rename = "stream-geometry")]
    StreamGeometry,
}

impl OutputMode {
    pub const ALL: [Self; 3] = [
        Self::SingleColorPath,
        Self::MultiColorDrawing,
        Self::StreamGeometry,
    ];

    /// Stable name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleColorPath => "path",
            Self::MultiColorDrawing => "drawing-brush",
            Self::StreamGeometry => "stream-geometry",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SingleColorPath => "WPF Path (Single Color)",
            Self::MultiColorDrawing => "WPF/Avalonia Drawing Brush (Multi Color)",
            Self::StreamGeometry => "Avalonia Stream Geometry (Single Color)",
        }
    }

    /// Whether path records need a resolved brush for this mode.
    #[must_use]
    pub const fn resolves_colors(self) -> bool {
        matches!(self, Self::MultiColorDrawing)
    }

    #[must_use]
    pub fn emitter(self, encoding: AttributeEncoding) -> Box<dyn MarkupEmitter> {
        match self {
            Self::SingleColorPath => Box::new(PathEmitter::new(encoding)),
            Self::MultiColorDrawing => Box::new(DrawingBrushEmitter::new(encoding)),
            Self::StreamGeometry => Box::new(StreamGeometryEmitter::new(encoding)),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "path" | "wpf-path" => Ok(Self::SingleColorPath),
            "drawing-brush" | "drawing" | "brush" => Ok(Self::MultiColorDrawing),
            "stream-geometry" | "stream" => Ok(Self::StreamGeometry),
            _ => Err(format!(
                "Unknown output mode: {s} (expected path, drawing-brush or stream-geometry)"
            )),
        }
    }
}
