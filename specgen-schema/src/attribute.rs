//! Attribute model
//!
//! An attribute is a named, typed constraint that an element (or every element, for global
//! attributes) accepts. The set of kinds is closed: adding one means adding a variant here, a
//! wire string in [`AttributeKind::as_str`] and a decode arm in the codec.

use std::collections::BTreeSet;
use std::fmt;

/// Discriminator for the attribute variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Text,
    Char,
    Integer,
    Float,
    Boolean,
    Enumerated,
    TokenSet,
    PrefixedCustom,
}

impl AttributeKind {
    pub const ALL: [AttributeKind; 8] = [
        AttributeKind::Text,
        AttributeKind::Char,
        AttributeKind::Integer,
        AttributeKind::Float,
        AttributeKind::Boolean,
        AttributeKind::Enumerated,
        AttributeKind::TokenSet,
        AttributeKind::PrefixedCustom,
    ];

    /// The `attribute_type` string written on the wire
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Text => "AttributeTypeString",
            AttributeKind::Char => "AttributeTypeChar",
            AttributeKind::Integer => "AttributeTypeNumber",
            AttributeKind::Float => "AttributeTypeFloat",
            AttributeKind::Boolean => "AttributeTypeBool",
            AttributeKind::Enumerated => "AttributeTypeEnum",
            AttributeKind::TokenSet => "AttributeTypeSST",
            AttributeKind::PrefixedCustom => "AttributeTypePrefixedCustom",
        }
    }

    /// Inverse of [`AttributeKind::as_str`]
    pub fn from_wire(discriminator: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == discriminator)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attribute definition
///
/// No validation happens at construction: an enumerated `allowed` set with uppercase tokens is
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute {
    /// Free-form text value
    Text { name: String, description: String },
    /// A single character
    Char { name: String, description: String },
    /// An integer
    Integer { name: String, description: String },
    /// A floating point number
    Float { name: String, description: String },
    /// A boolean attribute: present or absent
    Boolean { name: String, description: String },
    /// One of a set of keywords
    Enumerated {
        name: String,
        description: String,
        /// Allowed keywords. Iteration order carries no meaning.
        allowed: BTreeSet<String>,
        /// The empty string is accepted regardless of `allowed`
        allow_empty: bool,
        /// Values outside `allowed` are accepted
        allow_custom: bool,
    },
    /// A set of space-separated tokens
    TokenSet { name: String, description: String },
    /// A family of attributes sharing a prefix, like `data-*`
    PrefixedCustom { name: String, description: String },
}

impl Attribute {
    pub fn text(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::Text {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn char(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::Char {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn integer(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::Integer {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn float(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::Float {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn boolean(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::Boolean {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn token_set(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::TokenSet {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn prefixed_custom(name: impl Into<String>, description: impl Into<String>) -> Self {
        Attribute::PrefixedCustom {
            name: name.into(),
            description: description.into(),
        }
    }

    /// An enumerated attribute that accepts exactly `allowed`
    ///
    /// Chain [`Attribute::allow_empty`] / [`Attribute::allow_custom`] to relax it.
    pub fn enumerated<I, S>(
        name: impl Into<String>,
        description: impl Into<String>,
        allowed: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Attribute::Enumerated {
            name: name.into(),
            description: description.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
            allow_empty: false,
            allow_custom: false,
        }
    }

    /// Accept the empty string. No-op on non-enumerated attributes.
    pub fn allow_empty(mut self) -> Self {
        if let Attribute::Enumerated { allow_empty, .. } = &mut self {
            *allow_empty = true;
        }
        self
    }

    /// Accept values outside the allowed set. No-op on non-enumerated attributes.
    pub fn allow_custom(mut self) -> Self {
        if let Attribute::Enumerated { allow_custom, .. } = &mut self {
            *allow_custom = true;
        }
        self
    }

    pub fn name(&self) -> &str {
        match self {
            Attribute::Text { name, .. }
            | Attribute::Char { name, .. }
            | Attribute::Integer { name, .. }
            | Attribute::Float { name, .. }
            | Attribute::Boolean { name, .. }
            | Attribute::Enumerated { name, .. }
            | Attribute::TokenSet { name, .. }
            | Attribute::PrefixedCustom { name, .. } => name,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Attribute::Text { description, .. }
            | Attribute::Char { description, .. }
            | Attribute::Integer { description, .. }
            | Attribute::Float { description, .. }
            | Attribute::Boolean { description, .. }
            | Attribute::Enumerated { description, .. }
            | Attribute::TokenSet { description, .. }
            | Attribute::PrefixedCustom { description, .. } => description,
        }
    }

    pub fn kind(&self) -> AttributeKind {
        match self {
            Attribute::Text { .. } => AttributeKind::Text,
            Attribute::Char { .. } => AttributeKind::Char,
            Attribute::Integer { .. } => AttributeKind::Integer,
            Attribute::Float { .. } => AttributeKind::Float,
            Attribute::Boolean { .. } => AttributeKind::Boolean,
            Attribute::Enumerated { .. } => AttributeKind::Enumerated,
            Attribute::TokenSet { .. } => AttributeKind::TokenSet,
            Attribute::PrefixedCustom { .. } => AttributeKind::PrefixedCustom,
        }
    }

    /// Build the variant for `kind` carrying only a name and description
    ///
    /// Enumerated attributes come back with an empty allowed set.
    pub fn from_kind(
        kind: AttributeKind,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let (name, description) = (name.into(), description.into());
        match kind {
            AttributeKind::Text => Attribute::Text { name, description },
            AttributeKind::Char => Attribute::Char { name, description },
            AttributeKind::Integer => Attribute::Integer { name, description },
            AttributeKind::Float => Attribute::Float { name, description },
            AttributeKind::Boolean => Attribute::Boolean { name, description },
            AttributeKind::Enumerated => Attribute::Enumerated {
                name,
                description,
                allowed: BTreeSet::new(),
                allow_empty: false,
                allow_custom: false,
            },
            AttributeKind::TokenSet => Attribute::TokenSet { name, description },
            AttributeKind::PrefixedCustom => Attribute::PrefixedCustom { name, description },
        }
    }
}
