use super::*;
use crate::svg::parse;

fn geometries(records: &[PathRecord]) -> Vec<&str> {
    records.iter().map(PathRecord::geometry).collect()
}

fn colors(records: &[PathRecord]) -> Vec<Option<&str>> {
    records.iter().map(PathRecord::color).collect()
}

#[test]
fn one_record_per_path_in_document_order() {
    let document = parse(
        r#"<svg><path d="M1 1"/><g><path d="M2 2"/><g><path d="M3 3"/></g></g><path d="M4 4"/></svg>"#,
    )
    .unwrap();

    let records = extract_paths(&document, None);
    assert_eq!(geometries(&records), vec!["M1 1", "M2 2", "M3 3", "M4 4"]);
}

#[test]
fn paths_without_geometry_are_skipped() {
    let document = parse(r#"<svg><path/><path d=""/><path d="M1 1"/></svg>"#).unwrap();
    let records = extract_paths(&document, None);
    assert_eq!(geometries(&records), vec!["M1 1"]);
}

#[test]
fn whitespace_geometry_is_kept() {
    let document = parse(r#"<svg><path d=" "/></svg>"#).unwrap();
    let records = extract_paths(&document, None);
    assert_eq!(geometries(&records), vec![" "]);
}

#[test]
fn non_path_elements_are_ignored() {
    let document =
        parse(r#"<svg><rect width="1" height="1"/><path d="M0 0"/><polygon d="M9 9"/></svg>"#)
            .unwrap();
    let records = extract_paths(&document, None);
    assert_eq!(geometries(&records), vec!["M0 0"]);
}

#[test]
fn root_path_is_extracted() {
    let document = parse(r#"<path d="M5 5"/>"#).unwrap();
    assert_eq!(geometries(&extract_paths(&document, None)), vec!["M5 5"]);
}

#[test]
fn no_colors_without_resolver() {
    let document = parse(r##"<svg><path d="M1 1" fill="#112233"/></svg>"##).unwrap();
    let records = extract_paths(&document, None);
    assert_eq!(colors(&records), vec![None]);
}

#[test]
fn style_then_fill_colors() {
    let document = parse(
        r##"<svg><path d="M1 1" style="fill:#112233"/><path d="M2 2" fill="#445566"/></svg>"##,
    )
    .unwrap();
    let resolver = ColorResolver::new();
    let records = extract_paths(&document, Some(&resolver));
    assert_eq!(
        colors(&records),
        vec![Some("#112233"), Some("#445566")]
    );
}

#[test]
fn style_takes_precedence_over_fill() {
    let document =
        parse(r##"<svg><path d="M1 1" style="fill:#010101" fill="#020202"/></svg>"##).unwrap();
    let resolver = ColorResolver::new();
    let records = extract_paths(&document, Some(&resolver));
    assert_eq!(colors(&records), vec![Some("#010101")]);
}

#[test]
fn style_without_color_does_not_fall_back_to_fill() {
    let document =
        parse(r##"<svg><path d="M1 1" style="opacity:0.5" fill="#020202"/></svg>"##).unwrap();
    let resolver = ColorResolver::new();
    let records = extract_paths(&document, Some(&resolver));
    assert_eq!(colors(&records), vec![Some(DEFAULT_COLOR)]);
}

#[test]
fn blank_style_falls_back_to_fill() {
    let document =
        parse(r##"<svg><path d="M1 1" style="   " fill="#020202"/></svg>"##).unwrap();
    let resolver = ColorResolver::new();
    let records = extract_paths(&document, Some(&resolver));
    assert_eq!(colors(&records), vec![Some("#020202")]);
}

#[test]
fn missing_color_uses_resolver_default() {
    let document = parse(r#"<svg><path d="M1 1"/></svg>"#).unwrap();
    let resolver = ColorResolver::new().with_default_color("#000000").unwrap();
    let records = extract_paths(&document, Some(&resolver));
    assert_eq!(colors(&records), vec![Some("#000000")]);
}

#[test]
fn empty_document_yields_no_records() {
    let document = parse("<svg/>").unwrap();
    assert!(extract_paths(&document, Some(&ColorResolver::new())).is_empty());
}

#[test]
fn record_builder() {
    let record = PathRecord::new("M0 0").with_color("#ABCDEF");
    assert_eq!(record.geometry(), "M0 0");
    assert_eq!(record.color(), Some("#ABCDEF"));
}
