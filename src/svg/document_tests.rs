use super::*;

fn tags(document: &SvgDocument) -> Vec<&str> {
    document.descendants().map(Element::tag).collect()
}

#[test]
fn new_document_has_only_root() {
    let document = SvgDocument::new(Element::new("svg"));
    assert_eq!(document.element_count(), 1);
    assert_eq!(document.root().tag(), "svg");
    assert!(document.root().children().is_empty());
}

#[test]
fn descendants_visit_in_document_order() {
    let mut document = SvgDocument::new(Element::new("svg"));
    let root = document.root_id();
    let group = document.append_child(root, Element::new("g"));
    document.append_child(group, Element::new("path").with_attribute("d", "M1 1"));
    document.append_child(group, Element::new("path").with_attribute("d", "M2 2"));
    document.append_child(root, Element::new("rect"));

    assert_eq!(tags(&document), vec!["svg", "g", "path", "path", "rect"]);
}

#[test]
fn children_appended_after_grandchildren_keep_order() {
    let mut document = SvgDocument::new(Element::new("svg"));
    let root = document.root_id();
    let first = document.append_child(root, Element::new("g"));
    let second = document.append_child(root, Element::new("g"));
    document.append_child(second, Element::new("circle"));
    document.append_child(first, Element::new("path"));

    assert_eq!(tags(&document), vec!["svg", "g", "path", "g", "circle"]);
}

#[test]
fn attributes_preserve_insertion_order() {
    let element = Element::new("path")
        .with_attribute("fill", "#000000")
        .with_attribute("d", "M0 0")
        .with_attribute("style", "opacity:1");

    let names: Vec<&str> = element.attributes().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["fill", "d", "style"]);
}

#[test]
fn duplicate_attribute_replaces_value() {
    let element = Element::new("path")
        .with_attribute("d", "M0 0")
        .with_attribute("d", "M1 1");

    assert_eq!(element.attribute("d"), Some("M1 1"));
    assert_eq!(element.attributes().count(), 1);
}

#[test]
fn missing_attribute_is_none() {
    let element = Element::new("path");
    assert_eq!(element.attribute("d"), None);
}
