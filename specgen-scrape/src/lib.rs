//! Element schema extraction from markup reference documents
//!
//!     This crate turns a reference document into a [`specgen_schema::Spec`]. The document is
//!     parsed with html5ever, one heading-delimited section is walked by [`SectionScanner`], and
//!     the harvested elements are enriched from a curated catalog.
//!
//!     The scanner never touches html5ever types directly. It asks questions through
//!     [`dom::MarkupNode`], so it can be driven by any tree that answers them.
//!
//! Pipeline
//!
//!     bytes ──▶ dom::parse_html ──▶ body children ──▶ SectionScanner ──▶ html::build_spec
//!
//!     [`fetch`] (feature `fetch`, on by default) supplies the bytes over HTTP. Callers holding
//!     a local copy pass any `Read` to [`generate_html_spec`] instead.
//!
//! The file structure :
//!     .
//!     ├── dom.rs             # MarkupNode trait, rcdom impl, text gathering
//!     ├── scanner.rs         # ScanRules and the section state machine
//!     ├── html
//!     │   ├── mod.rs         # HTML pipeline, classification, heading entries
//!     │   └── catalog.rs     # Curated attribute tables and element lists
//!     ├── fetch.rs           # HTTP download
//!     ├── error.rs           # ScrapeError
//!     └── lib.rs

pub mod dom;
pub mod error;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod html;
pub mod scanner;

pub use error::{Result, ScrapeError};
pub use html::{build_spec, classify, generate_html_spec, generate_html_spec_with};
pub use scanner::{ScanRules, ScanState, SectionScanner};
