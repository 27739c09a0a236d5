use indexmap::IndexMap;

/// Handle to an element stored in an [`SvgDocument`].
///
/// Handles are only produced by the document that owns the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A single element: tag name, attributes in document order, and child handles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: IndexMap<String, String>,
    children: Vec<ElementId>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value under the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}

/// Parsed SVG tree. The root is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    elements: Vec<Element>,
}

impl SvgDocument {
    const ROOT: ElementId = ElementId(0);

    #[must_use]
    pub fn new(root: Element) -> Self {
        Self {
            elements: vec![root],
        }
    }

    #[must_use]
    pub const fn root_id(&self) -> ElementId {
        Self::ROOT
    }

    #[must_use]
    pub fn root(&self) -> &Element {
        self.element(Self::ROOT)
    }

    /// Returns the element behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was issued by a different document.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Appends `child` as the last child of `parent` and returns its handle.
    pub fn append_child(&mut self, parent: ElementId, child: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(child);
        self.elements[parent.0].children.push(id);
        id
    }

    /// Total number of elements, root included.
    #[must_use]
    pub const fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Pre-order (document order) traversal starting at the root.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            document: self,
            stack: vec![Self::ROOT],
        }
    }
}

/// Iterator returned by [`SvgDocument::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    document: &'a SvgDocument,
    stack: Vec<ElementId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let element = self.document.element(id);
        self.stack.extend(element.children().iter().rev());
        Some(element)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
