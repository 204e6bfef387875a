//! Spec root

use crate::attribute::Attribute;
use crate::element::Element;
use std::fmt;

/// Specifications the generator knows how to name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecName {
    Html,
    Svg,
}

impl SpecName {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecName::Html => "HTML",
            SpecName::Svg => "SVG",
        }
    }
}

impl fmt::Display for SpecName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The extracted schema of one markup specification
///
/// Elements are kept in document order. Tag uniqueness is expected but not enforced.
/// `attributes` holds the global attributes every element inherits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Spec {
    pub name: String,
    pub elements: Vec<Element>,
    pub attributes: Vec<Attribute>,
}

impl Spec {
    pub fn new(name: SpecName) -> Self {
        Spec::named(name.as_str())
    }

    pub fn named(name: impl Into<String>) -> Self {
        Spec {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First element with the given tag
    pub fn element(&self, tag: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.tag == tag)
    }

    /// The element's own attributes followed by the global ones
    ///
    /// Inheritance is not stored on the element, so consumers that need the complete set go
    /// through here.
    pub fn effective_attributes<'a>(
        &'a self,
        element: &'a Element,
    ) -> impl Iterator<Item = &'a Attribute> + 'a {
        element.attributes.iter().chain(self.attributes.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Spec {
        let mut spec = Spec::new(SpecName::Html);
        spec.attributes.push(Attribute::text("id", "Unique identifier"));
        spec.attributes.push(Attribute::token_set(
            "class",
            "Classes to which the element belongs",
        ));
        spec.elements.push(
            Element::new("q").with_attributes([Attribute::text("cite", "Link to the source")]),
        );
        spec
    }

    #[test]
    fn test_spec_name() {
        assert_eq!(Spec::new(SpecName::Html).name, "HTML");
        assert_eq!(SpecName::Svg.to_string(), "SVG");
    }

    #[test]
    fn test_effective_attributes_append_globals() {
        let spec = sample();
        let q = spec.element("q").expect("q element");
        let names: Vec<&str> = spec.effective_attributes(q).map(Attribute::name).collect();
        assert_eq!(names, vec!["cite", "id", "class"]);
        // inheritance is not materialized
        assert_eq!(q.attributes.len(), 1);
    }

    #[test]
    fn test_missing_element() {
        assert!(sample().element("blink").is_none());
    }
}
