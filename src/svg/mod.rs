//! Owned SVG element tree.
//!
//! The XML text is parsed once with `roxmltree` and copied into an arena of [`Element`]s so that
//! every later stage (compliance check, path extraction) works on plain owned data.

mod compliance;
mod document;
mod parser;

pub use compliance::{ALLOWED_TAGS, PROLOGUE_TAG, contains_disallowed, find_disallowed, is_allowed_tag};
pub use document::{Descendants, Element, ElementId, SvgDocument};
pub use parser::{ParseOptions, parse, parse_with_options};
