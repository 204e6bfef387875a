//! Element model

use crate::attribute::Attribute;

/// A markup element's schema entry
///
/// Created once during extraction. Its own attributes are filled by the static catalog merge;
/// global attributes live on the owning [`crate::Spec`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub description: String,
    pub attributes: Vec<Attribute>,
    /// A void element never has children
    pub void: bool,
    /// The element may contain text content
    pub text: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Look up one of this element's own attributes by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_is_unclassified() {
        let element = Element::new("p");
        assert_eq!(element.tag, "p");
        assert!(element.description.is_empty());
        assert!(element.attributes.is_empty());
        assert!(!element.void);
        assert!(!element.text);
    }

    #[test]
    fn test_attribute_lookup() {
        let element = Element::new("img").with_attributes([
            Attribute::text("alt", "Replacement text for use when images are not available"),
            Attribute::integer("width", "Horizontal dimension"),
        ]);
        assert_eq!(
            element.attribute("width").map(Attribute::name),
            Some("width")
        );
        assert!(element.attribute("height").is_none());
    }
}
