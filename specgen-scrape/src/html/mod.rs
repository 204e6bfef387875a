//! HTML Living Standard extraction
//!
//! Scans the semantics section of the standard for element names and descriptions, then
//! enriches each element with the curated attribute tables and void / text classification
//! from [`catalog`].

pub mod catalog;

use crate::dom::{find_first, parse_html, MarkupNode};
use crate::error::{Result, ScrapeError};
use crate::scanner::{ScanRules, SectionScanner};
use specgen_schema::{Element, Spec, SpecName};
use std::io::Read;
use tracing::{debug, info};

/// Shared description of the `h2` to `h6` entries
///
/// The standard documents all heading levels under one entry named after `h1`, so the other
/// levels never show up in a scan.
pub const HEADING_DESCRIPTION: &str = "These elements represent headings for their sections.";

const EXTRA_HEADINGS: [&str; 5] = ["h2", "h3", "h4", "h5", "h6"];

/// Build the HTML spec from a document stream using the standard's conventions
pub fn generate_html_spec<R: Read>(reader: R) -> Result<Spec> {
    generate_html_spec_with(reader, &ScanRules::html())
}

/// Build the HTML spec from a document stream using custom scan rules
pub fn generate_html_spec_with<R: Read>(reader: R, rules: &ScanRules) -> Result<Spec> {
    let dom = parse_html(reader)?;
    let body = find_first(&dom.document, "body")
        .ok_or_else(|| ScrapeError::Parse("document has no body".to_string()))?;

    let scanned = SectionScanner::new(rules).scan(&body.children())?;
    info!(elements = scanned.len(), "scanned HTML elements");

    Ok(build_spec(scanned))
}

/// Assemble the final spec from scanned elements
///
/// Globals come from the catalog, the extra heading levels are appended after the scanned
/// elements, and every element is merged with its attribute table and classified.
pub fn build_spec(scanned: Vec<Element>) -> Spec {
    let mut spec = Spec::new(SpecName::Html);
    spec.attributes = catalog::global_attributes();

    spec.elements = scanned;
    spec.elements.extend(
        EXTRA_HEADINGS
            .iter()
            .map(|tag| Element::new(*tag).with_description(HEADING_DESCRIPTION)),
    );

    for element in &mut spec.elements {
        if let Some(attributes) = catalog::element_attributes(&element.tag) {
            debug!(tag = %element.tag, count = attributes.len(), "merged attribute table");
            element.attributes.extend(attributes);
        }
        classify(element);
    }

    spec
}

/// Set the void and text-bearing flags from the catalog lists
///
/// Void elements are never text-bearing.
pub fn classify(element: &mut Element) {
    element.void = catalog::is_void(&element.tag);
    element.text = !element.void && !catalog::is_textless(&element.tag);
}

#[cfg(test)]
mod tests {
    use super::*;
    use specgen_schema::AttributeKind;

    #[test]
    fn test_img_is_void_and_not_text() {
        let mut img = Element::new("img");
        classify(&mut img);
        assert!(img.void);
        assert!(!img.text);
    }

    #[test]
    fn test_p_is_text_and_not_void() {
        let mut p = Element::new("p");
        classify(&mut p);
        assert!(!p.void);
        assert!(p.text);
    }

    #[test]
    fn test_textless_container() {
        let mut table = Element::new("table");
        classify(&mut table);
        assert!(!table.void);
        assert!(!table.text);
    }

    #[test]
    fn test_headings_always_present() {
        let spec = build_spec(Vec::new());
        let tags: Vec<&str> = spec.elements.iter().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, EXTRA_HEADINGS.to_vec());
        for heading in &spec.elements {
            assert_eq!(heading.description, HEADING_DESCRIPTION);
            assert!(heading.text);
            assert!(heading.attributes.is_empty());
        }
    }

    #[test]
    fn test_build_spec_merges_tables() {
        let spec = build_spec(vec![
            Element::new("a").with_description("Hyperlink."),
            Element::new("custom-thing"),
        ]);

        assert_eq!(spec.name, "HTML");
        assert!(!spec.attributes.is_empty());

        let a = spec.element("a").expect("a");
        assert_eq!(a.description, "Hyperlink.");
        assert_eq!(
            a.attribute("href").map(|attr| attr.kind()),
            Some(AttributeKind::Text)
        );

        let custom = spec.element("custom-thing").expect("custom");
        assert!(custom.attributes.is_empty());
        assert!(custom.text);
    }

    #[test]
    fn test_document_without_section() {
        let error = generate_html_spec("<h2 id=\"intro\">Intro</h2>".as_bytes())
            .expect_err("no semantics section");
        assert!(matches!(error, ScrapeError::SectionNotFound { .. }));
    }
}
