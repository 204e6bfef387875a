//! Section scanner
//!
//! Walks the sibling nodes of a document body once, front to back, and harvests
//! `(tag, description)` pairs from one heading-delimited section.
//!
//! # States
//!
//! ```text
//!   Searching ──(section heading with the target id)──▶ Collecting
//!   Collecting ──(any later section heading)──────────▶ Done
//! ```
//!
//! While collecting, an entry heading whose id carries every entry marker opens an element
//! record named after its first `code` descendant. The next paragraph becomes the description
//! and closes the record. Further paragraphs before the next entry are ignored.
//!
//! The section may run to the end of the document. A record that never received a paragraph
//! (because another entry or the end of the section came first) is kept with an empty
//! description.

use crate::dom::{find_first, gather_text, MarkupNode, NodeKind};
use crate::error::{Result, ScrapeError};
use specgen_schema::Element;
use tracing::{debug, info, warn};

/// Structural conventions of the scanned document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    /// Heading tag that delimits sections
    pub section_heading: String,
    /// `id` of the section heading to collect from
    pub section_id: String,
    /// Heading tag, one level below the section heading, that starts an entry
    pub entry_heading: String,
    /// Substrings that must all appear in an entry heading's `id`
    pub entry_id_markers: Vec<String>,
    /// Tag inside the entry heading holding the element name
    pub name_tag: String,
    /// Tag supplying the description
    pub description_tag: String,
}

impl ScanRules {
    /// Conventions of the WHATWG HTML Living Standard
    pub fn html() -> Self {
        ScanRules {
            section_heading: "h2".to_string(),
            section_id: "semantics".to_string(),
            entry_heading: "h4".to_string(),
            entry_id_markers: vec!["the-".to_string(), "-element".to_string()],
            name_tag: "code".to_string(),
            description_tag: "p".to_string(),
        }
    }

    fn is_entry_id(&self, id: &str) -> bool {
        self.entry_id_markers
            .iter()
            .all(|marker| id.contains(marker.as_str()))
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        ScanRules::html()
    }
}

/// Observable scanner state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Searching,
    Collecting,
    Done,
}

#[derive(Debug)]
enum State {
    Searching,
    /// Holds the open record, if an entry is waiting for its description
    Collecting(Option<Element>),
    Done,
}

/// Single pass scanner over sibling nodes
pub struct SectionScanner<'r> {
    rules: &'r ScanRules,
    state: State,
    section_found: bool,
    elements: Vec<Element>,
}

impl<'r> SectionScanner<'r> {
    pub fn new(rules: &'r ScanRules) -> Self {
        SectionScanner {
            rules,
            state: State::Searching,
            section_found: false,
            elements: Vec::new(),
        }
    }

    pub fn state(&self) -> ScanState {
        match self.state {
            State::Searching => ScanState::Searching,
            State::Collecting(_) => ScanState::Collecting,
            State::Done => ScanState::Done,
        }
    }

    /// Elements closed so far, in document order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Scan `nodes` in order and return the harvested elements
    pub fn scan<N: MarkupNode + Clone>(mut self, nodes: &[N]) -> Result<Vec<Element>> {
        for node in nodes {
            if self.state() == ScanState::Done {
                break;
            }
            self.feed(node);
        }
        self.finish()
    }

    /// Advance the state machine by one sibling node
    pub fn feed<N: MarkupNode + Clone>(&mut self, node: &N) {
        if node.kind() != NodeKind::Element {
            return;
        }
        let Some(tag) = node.tag_name() else {
            return;
        };

        self.state = match std::mem::replace(&mut self.state, State::Done) {
            State::Searching => self.search(node, &tag),
            State::Collecting(open) => self.collect(node, &tag, open),
            State::Done => State::Done,
        };
    }

    /// End of input. Fails when the section was never entered.
    pub fn finish(mut self) -> Result<Vec<Element>> {
        if let State::Collecting(open) = std::mem::replace(&mut self.state, State::Done) {
            self.close_undescribed(open);
        }
        if !self.section_found {
            return Err(ScrapeError::SectionNotFound {
                id: self.rules.section_id.clone(),
            });
        }
        Ok(self.elements)
    }

    fn search<N: MarkupNode>(&mut self, node: &N, tag: &str) -> State {
        if tag == self.rules.section_heading
            && node.attribute("id").as_deref() == Some(self.rules.section_id.as_str())
        {
            info!(id = %self.rules.section_id, "entered section");
            self.section_found = true;
            return State::Collecting(None);
        }
        State::Searching
    }

    fn collect<N: MarkupNode + Clone>(
        &mut self,
        node: &N,
        tag: &str,
        open: Option<Element>,
    ) -> State {
        if tag == self.rules.section_heading {
            self.close_undescribed(open);
            info!(
                id = %self.rules.section_id,
                elements = self.elements.len(),
                "left section"
            );
            return State::Done;
        }

        if tag == self.rules.entry_heading {
            if let Some(id) = node
                .attribute("id")
                .filter(|id| self.rules.is_entry_id(id))
            {
                self.close_undescribed(open);
                return match self.entry_name(node) {
                    Some(name) => {
                        debug!(%id, tag = %name, "opened element entry");
                        State::Collecting(Some(Element::new(name)))
                    }
                    None => {
                        warn!(%id, "element entry has no name, skipping it");
                        State::Collecting(None)
                    }
                };
            }
        }

        if tag == self.rules.description_tag {
            if let Some(mut element) = open {
                element.description = gather_text(node);
                debug!(tag = %element.tag, "harvested element");
                self.elements.push(element);
                return State::Collecting(None);
            }
        }

        State::Collecting(open)
    }

    fn entry_name<N: MarkupNode + Clone>(&self, heading: &N) -> Option<String> {
        find_first(heading, &self.rules.name_tag)
            .map(|code| gather_text(&code))
            .filter(|name| !name.is_empty())
    }

    fn close_undescribed(&mut self, open: Option<Element>) {
        if let Some(element) = open {
            warn!(tag = %element.tag, "element entry closed before a description was found");
            self.elements.push(element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_html;
    use markup5ever_rcdom::Handle;

    fn body_children(source: &str) -> Vec<Handle> {
        let dom = parse_html(source.as_bytes()).expect("parses");
        let children = find_first(&dom.document, "body")
            .expect("body")
            .children();
        // Dropping an RcDom detaches the children of every descendant node, so keep the
        // tree alive for the returned handles.
        std::mem::forget(dom);
        children
    }

    fn scan(source: &str) -> Result<Vec<Element>> {
        let rules = ScanRules::html();
        SectionScanner::new(&rules).scan(&body_children(source))
    }

    #[test]
    fn test_states_advance() {
        let rules = ScanRules::html();
        let nodes = body_children(
            r#"<h2 id="intro"></h2><h2 id="semantics"></h2><p>x</p><h2 id="next"></h2>"#,
        );
        let mut scanner = SectionScanner::new(&rules);
        let mut states = vec![scanner.state()];
        for node in &nodes {
            scanner.feed(node);
            states.push(scanner.state());
        }
        assert_eq!(
            states,
            vec![
                ScanState::Searching,
                ScanState::Searching,
                ScanState::Collecting,
                ScanState::Collecting,
                ScanState::Done,
            ]
        );
    }

    #[test]
    fn test_section_to_end_of_document() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-br-element"><code>br</code></h4><p>A line break.</p>"#,
        )
        .expect("section found");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "br");
        assert_eq!(elements[0].description, "A line break.");
    }

    #[test]
    fn test_missing_section() {
        let error = scan(r#"<h2 id="other"></h2><h4 id="the-a-element"><code>a</code></h4>"#)
            .expect_err("no semantics section");
        assert!(matches!(error, ScrapeError::SectionNotFound { id } if id == "semantics"));
    }

    #[test]
    fn test_empty_section_is_success() {
        let elements = scan(r#"<h2 id="semantics"></h2><p>Intro.</p>"#).expect("section found");
        assert!(elements.is_empty());
    }

    #[test]
    fn test_entry_id_needs_every_marker() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-a-attribute"><code>a</code></h4><p>Not an element.</p>
            <h4 id="a-element"><code>b</code></h4><p>Not an element either.</p>"#,
        )
        .expect("section found");
        assert!(elements.is_empty());
    }

    #[test]
    fn test_preempted_entry_keeps_empty_description() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-dt-element"><code>dt</code></h4>
            <h4 id="the-dd-element"><code>dd</code></h4><p>Description details.</p>"#,
        )
        .expect("section found");
        let tags: Vec<(&str, &str)> = elements
            .iter()
            .map(|e| (e.tag.as_str(), e.description.as_str()))
            .collect();
        assert_eq!(tags, vec![("dt", ""), ("dd", "Description details.")]);
    }

    #[test]
    fn test_entry_open_at_section_end_is_kept() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-hr-element"><code>hr</code></h4>
            <h2 id="links"></h2><p>A thematic break.</p>"#,
        )
        .expect("section found");
        let tags: Vec<(&str, &str)> = elements
            .iter()
            .map(|e| (e.tag.as_str(), e.description.as_str()))
            .collect();
        assert_eq!(tags, vec![("hr", "")]);
    }

    #[test]
    fn test_entry_open_at_end_of_document_is_kept() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-p-element"><code>p</code></h4><p>A paragraph.</p>
            <h4 id="the-hr-element"><code>hr</code></h4>"#,
        )
        .expect("section found");
        let tags: Vec<(&str, &str)> = elements
            .iter()
            .map(|e| (e.tag.as_str(), e.description.as_str()))
            .collect();
        assert_eq!(tags, vec![("p", "A paragraph."), ("hr", "")]);
    }

    #[test]
    fn test_entry_without_code_is_skipped() {
        let elements = scan(
            r#"<h2 id="semantics"></h2>
            <h4 id="the-mystery-element">No code here</h4><p>Orphan paragraph.</p>
            <h4 id="the-hr-element"><code>hr</code></h4><p>A thematic break.</p>"#,
        )
        .expect("section found");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "hr");
    }

    #[test]
    fn test_custom_rules() {
        let rules = ScanRules {
            section_heading: "h1".to_string(),
            section_id: "elements".to_string(),
            entry_heading: "h3".to_string(),
            entry_id_markers: vec!["elementdef-".to_string()],
            name_tag: "span".to_string(),
            description_tag: "p".to_string(),
        };
        let nodes = body_children(
            r#"<h1 id="elements"></h1>
            <h3 id="elementdef-circle"><span>circle</span></h3><p>A circle.</p>
            <h1 id="attributes"></h1>"#,
        );
        let elements = SectionScanner::new(&rules).scan(&nodes).expect("found");
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].tag, "circle");
    }
}
