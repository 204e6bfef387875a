//! Schema model for markup specifications
//!
//!     This crate holds the data extracted from a markup specification: the elements it defines,
//!     the attributes each element accepts, and the global attributes every element inherits.
//!     It also owns the JSON wire contract for that data.
//!
//!     This is a pure lib: no fetching, no file output, no knowledge of how a document was
//!     scanned. The scraper (specgen-scrape) fills a [`Spec`], and the CLI writes it out through
//!     [`codec`].
//!
//! The Model
//!
//!     - [`Attribute`]: closed sum type, one variant per attribute kind (text, char, integer,
//!       float, boolean, enumerated, space separated tokens, prefixed custom).
//!     - [`Element`]: a tag, its description, its own attributes, and its void / text-bearing
//!       classification.
//!     - [`Spec`]: the root. Ordered elements plus the global attributes.
//!
//!     Global attributes are not copied into each element. Use [`Spec::effective_attributes`]
//!     when the full attribute set of an element is needed.
//!
//! The Wire Format
//!
//!     Attributes are written with their own fields plus an `attribute_type` discriminator whose
//!     values are listed on [`AttributeKind::as_str`]. Those strings are a stable contract.
//!     Empty descriptions, empty attribute lists and false flags are omitted.
//!
//!     Decoding is done in two passes: a header pass reads name, description and the
//!     discriminator, then the record is decoded again into the matching variant. Records with an
//!     unknown discriminator are dropped. See [`codec`] for details.
//!
//! The file structure :
//!     .
//!     ├── attribute.rs       # Attribute sum type and AttributeKind discriminator
//!     ├── element.rs         # Element
//!     ├── spec.rs            # Spec root and SpecName
//!     ├── codec.rs           # JSON encode / two pass decode
//!     ├── error.rs           # CodecError
//!     └── lib.rs

pub mod attribute;
pub mod codec;
pub mod element;
pub mod error;
pub mod spec;

pub use attribute::{Attribute, AttributeKind};
pub use element::Element;
pub use error::CodecError;
pub use spec::{Spec, SpecName};
