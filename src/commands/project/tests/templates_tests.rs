use crate::commands::project::templates::{
    starter_css, starter_html, starter_js, starter_templates,
};

#[test]
fn test_accessors_are_idempotent() {
    assert_eq!(starter_html(), starter_html());
    assert_eq!(starter_css(), starter_css());
    assert_eq!(starter_js(), starter_js());
}

#[test]
fn test_bundle_matches_accessors() {
    let bundle = starter_templates();
    assert_eq!(bundle.html, starter_html());
    assert_eq!(bundle.css, starter_css());
    assert_eq!(bundle.js, starter_js());
}

#[test]
fn test_markup_references_siblings_by_relative_name() {
    // The scaffolder writes the stylesheet and script under these exact
    // names, so the markup must reference them verbatim.
    let html = starter_html();
    assert!(html.contains("style.css"));
    assert!(html.contains("script.js"));
}

#[test]
fn test_documents_are_non_empty_and_well_formed() {
    let html = starter_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("</html>"));

    let css = starter_css();
    assert!(!css.is_empty());
    // The script defines the handler the markup's button invokes
    assert!(starter_js().contains("function showMessage()"));
    assert!(html.contains("showMessage()"));
}

#[test]
fn test_bundle_serializes_all_three_fields() {
    let json = serde_json::to_value(starter_templates()).unwrap();
    assert!(json["html"].is_string());
    assert!(json["css"].is_string());
    assert!(json["js"].is_string());
}
