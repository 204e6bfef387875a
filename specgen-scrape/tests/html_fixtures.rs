//! HTML pipeline against fixture documents
//!
//! Fixtures live in tests/fixtures and mimic the structure of the HTML standard: section `h2`
//! headings, element entries as `h4` headings with `the-<tag>-element` ids, descriptions as the
//! paragraph that follows.

use rstest::rstest;
use specgen_schema::{AttributeKind, Spec};
use specgen_scrape::html::HEADING_DESCRIPTION;
use specgen_scrape::{generate_html_spec, ScrapeError};

const BASIC: &str = include_str!("fixtures/basic.html");
const EXCERPT: &str = include_str!("fixtures/semantics_excerpt.html");
const NO_SEMANTICS: &str = include_str!("fixtures/no_semantics.html");
const EMPTY_SEMANTICS: &str = include_str!("fixtures/empty_semantics.html");

const HEADINGS: [&str; 5] = ["h2", "h3", "h4", "h5", "h6"];

fn generate(source: &str) -> Spec {
    generate_html_spec(source.as_bytes()).expect("fixture should scan")
}

fn tags(spec: &Spec) -> Vec<&str> {
    spec.elements.iter().map(|e| e.tag.as_str()).collect()
}

#[test]
fn test_basic_single_element() {
    let spec = generate(BASIC);

    assert_eq!(spec.name, "HTML");
    let mut expected = vec!["tag"];
    expected.extend(HEADINGS);
    assert_eq!(tags(&spec), expected);

    let tag = &spec.elements[0];
    assert_eq!(tag.description, "Good description");
}

#[test]
fn test_basic_ignores_second_paragraph_and_later_sections() {
    let spec = generate(BASIC);

    for element in &spec.elements {
        assert_ne!(element.description, "I shouldn't be in output");
        assert_ne!(element.description, "Bad description");
    }
    assert!(spec.element("badtag").is_none());
}

#[test]
fn test_excerpt_document_order() {
    let spec = generate(EXCERPT);

    let mut expected = vec!["html", "h1", "p", "dt", "dd", "a", "br", "img", "table"];
    expected.extend(HEADINGS);
    assert_eq!(tags(&spec), expected);
    assert!(spec.element("intro").is_none());
    assert!(spec.element("itemscope").is_none());
}

#[rstest]
#[case("html", "The html element represents the root of an HTML document.")]
#[case("h1", "These elements represent headings for their sections.")]
#[case("p", "The p element represents a paragraph.")]
#[case(
    "dd",
    "The dd element represents the description, definition, or value, part of a term-description group in a description list."
)]
#[case("br", "The br element represents a line break.")]
#[case("dt", "")]
fn test_excerpt_descriptions(#[case] tag: &str, #[case] description: &str) {
    let spec = generate(EXCERPT);
    let element = spec.element(tag).expect("element scanned");
    assert_eq!(element.description, description);
}

#[rstest]
#[case("img", true, false)]
#[case("br", true, false)]
#[case("p", false, true)]
#[case("a", false, true)]
#[case("table", false, false)]
#[case("html", false, false)]
#[case("h1", false, true)]
#[case("h6", false, true)]
fn test_excerpt_classification(#[case] tag: &str, #[case] void: bool, #[case] text: bool) {
    let spec = generate(EXCERPT);
    let element = spec.element(tag).expect("element present");
    assert_eq!(element.void, void, "void flag of {}", tag);
    assert_eq!(element.text, text, "text flag of {}", tag);
}

#[test]
fn test_excerpt_attribute_tables_merged() {
    let spec = generate(EXCERPT);

    let img = spec.element("img").expect("img");
    for name in ["alt", "src", "srcset", "width", "height"] {
        assert!(img.attribute(name).is_some(), "img should accept {}", name);
    }

    let table = spec.element("table").expect("table");
    assert!(table.attributes.is_empty());

    let globals: Vec<&str> = spec.attributes.iter().map(|a| a.name()).collect();
    assert!(globals.contains(&"class"));
    assert_eq!(
        spec.attributes
            .iter()
            .find(|a| a.name() == "class")
            .map(|a| a.kind()),
        Some(AttributeKind::TokenSet)
    );

    let a = spec.element("a").expect("a");
    let effective: Vec<&str> = spec.effective_attributes(a).map(|attr| attr.name()).collect();
    assert_eq!(effective[0], "href");
    assert!(effective.contains(&"accesskey"));
    assert_eq!(effective.len(), a.attributes.len() + spec.attributes.len());
}

#[test]
fn test_missing_section_fails() {
    let error = generate_html_spec(NO_SEMANTICS.as_bytes()).expect_err("no semantics section");
    match error {
        ScrapeError::SectionNotFound { id } => assert_eq!(id, "semantics"),
        other => panic!("expected SectionNotFound, got {:?}", other),
    }
}

#[test]
fn test_empty_section_still_has_headings() {
    let spec = generate(EMPTY_SEMANTICS);

    assert_eq!(tags(&spec), HEADINGS.to_vec());
    assert!(spec
        .elements
        .iter()
        .all(|e| e.description == HEADING_DESCRIPTION));
}

#[test]
fn test_scanned_spec_encodes() {
    let spec = generate(EXCERPT);
    let json = specgen_schema::codec::to_string_pretty(&spec).expect("encodes");
    let decoded = specgen_schema::codec::from_str(&json).expect("decodes");
    assert_eq!(decoded, spec);
}
