use tracing::{debug, trace};

use crate::error::{Result, SvgToXamlError};

use super::document::{Element, SvgDocument};

/// Options forwarded to the XML parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept `<!DOCTYPE ...>` declarations. Editors such as Illustrator emit them.
    pub allow_dtd: bool,
    /// Upper bound on the number of XML nodes.
    pub nodes_limit: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            allow_dtd: true,
            nodes_limit: u32::MAX,
        }
    }
}

/// Parse SVG text with default options.
///
/// # Errors
/// Returns [`SvgToXamlError::EmptyInput`] for blank text and [`SvgToXamlError::Parse`] for
/// malformed markup.
pub fn parse(text: &str) -> Result<SvgDocument> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse SVG text into an owned [`SvgDocument`].
///
/// Only element nodes become [`Element`]s. The XML declaration, other processing instructions,
/// comments and text are dropped.
///
/// # Errors
/// Returns [`SvgToXamlError::EmptyInput`] for blank text and [`SvgToXamlError::Parse`] for
/// malformed markup.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<SvgDocument> {
    if text.trim().is_empty() {
        return Err(SvgToXamlError::EmptyInput);
    }

    let xml = roxmltree::Document::parse_with_options(
        text,
        roxmltree::ParsingOptions {
            allow_dtd: options.allow_dtd,
            nodes_limit: options.nodes_limit,
            ..roxmltree::ParsingOptions::default()
        },
    )?;

    let root = xml.root_element();
    let mut document = SvgDocument::new(to_element(root));
    let mut pending = vec![(root, document.root_id())];

    while let Some((node, id)) = pending.pop() {
        for child in node.children().filter(roxmltree::Node::is_element) {
            let child_id = document.append_child(id, to_element(child));
            pending.push((child, child_id));
        }
    }

    debug!(
        root = document.root().tag(),
        elements = document.element_count(),
        "Parsed SVG document"
    );
    Ok(document)
}

fn to_element(node: roxmltree::Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let name = written_tag_name(node)
        .map_or_else(|| qualified_name(node, tag.namespace(), tag.name()), str::to_string);
    let mut element = Element::new(name);
    for attr in node.attributes() {
        element.set_attribute(
            qualified_name(node, attr.namespace(), attr.name()),
            attr.value(),
        );
    }
    trace!(tag = element.tag(), "Copied element");
    element
}

/// The tag name exactly as it appears in the start tag, prefix included.
///
/// A namespace URI can be bound to several prefixes at once (`xmlns` and `xmlns:svg` both
/// pointing at the SVG namespace), so the prefix cannot be recovered from the URI alone.
fn written_tag_name<'input>(node: roxmltree::Node<'_, 'input>) -> Option<&'input str> {
    let start_tag = node
        .document()
        .input_text()
        .get(node.range().start..)?
        .strip_prefix('<')?;
    let end = start_tag
        .find(|c: char| c.is_ascii_whitespace() || c == '/' || c == '>')
        .unwrap_or(start_tag.len());
    let name = &start_tag[..end];
    name.ends_with(node.tag_name().name()).then_some(name)
}

/// `prefix:local` when the namespace is bound to a prefix, otherwise the local name.
fn qualified_name(node: roxmltree::Node<'_, '_>, namespace: Option<&str>, local: &str) -> String {
    match namespace.and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{local}"),
        _ => local.to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
