use super::document::{Element, SvgDocument};

/// Pseudo-tag of the XML declaration prologue.
pub const PROLOGUE_TAG: &str = "?xml";

/// Tags that can be converted structurally. Anything else is reported as unsupported.
pub const ALLOWED_TAGS: [&str; 4] = ["svg", "g", "path", PROLOGUE_TAG];

#[must_use]
pub fn is_allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

/// First element (in document order) whose tag is outside [`ALLOWED_TAGS`].
#[must_use]
pub fn find_disallowed(document: &SvgDocument) -> Option<&Element> {
    document
        .descendants()
        .find(|element| !is_allowed_tag(element.tag()))
}

/// Whether the tree contains any element that cannot be converted.
///
/// Stops at the first offending element.
#[must_use]
pub fn contains_disallowed(document: &SvgDocument) -> bool {
    find_disallowed(document).is_some()
}

#[cfg(test)]
#[path = "compliance_tests.rs"]
mod tests;
