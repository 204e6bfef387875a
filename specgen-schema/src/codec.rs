//! JSON encoding and decoding for [`Spec`]
//!
//! # Wire shape
//!
//! ```text
//! {"name": "HTML",
//!  "elements":   [{"tag", "description"?, "attributes"?, "void"?, "text"?}, ...],
//!  "attributes": [{"name", "description"?, ...variant fields, "attribute_type"}, ...]}
//! ```
//!
//! Empty descriptions, empty attribute lists and false flags are omitted, so on decode "absent"
//! and "empty/false" are the same thing. Enumerated attributes always carry `allowed`, written
//! as an object keyed by token (`{"ltr": {}, "rtl": {}}`). An array of tokens is accepted when
//! decoding.
//!
//! # Decoding
//!
//! The input is first read into an untyped [`Value`] tree. Each attribute record then goes
//! through two passes:
//!
//! 1. header pass: the `attribute_type` discriminator
//! 2. the discriminator selects the variant, then `name`, `description` and the variant specific
//!    fields are decoded
//!
//! Records whose discriminator is missing or unknown are dropped with a warning whatever else they
//! hold; they never fail the decode. Any other structural mismatch fails the whole decode with
//! [`CodecError::MalformedInput`] naming the field path.

use crate::attribute::{Attribute, AttributeKind};
use crate::element::Element;
use crate::error::CodecError;
use crate::spec::Spec;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::io::{Read, Write};
use tracing::warn;

/// Name of the discriminator field on attribute records
pub const DISCRIMINATOR: &str = "attribute_type";

const ROOT: &str = "$";

/// Encode a spec as compact JSON
pub fn to_string(spec: &Spec) -> Result<String, CodecError> {
    serde_json::to_string(spec).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Encode a spec as indented JSON
pub fn to_string_pretty(spec: &Spec) -> Result<String, CodecError> {
    serde_json::to_string_pretty(spec).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Encode a spec as indented JSON into `writer`
pub fn to_writer_pretty<W: Write>(writer: W, spec: &Spec) -> Result<(), CodecError> {
    serde_json::to_writer_pretty(writer, spec).map_err(|e| CodecError::Encode(e.to_string()))
}

/// Decode a spec from JSON text
pub fn from_str(input: &str) -> Result<Spec, CodecError> {
    let value: Value = serde_json::from_str(input).map_err(|e| CodecError::malformed(ROOT, e))?;
    decode_spec(&value)
}

/// Decode a spec from a JSON byte stream
pub fn from_reader<R: Read>(reader: R) -> Result<Spec, CodecError> {
    let value: Value =
        serde_json::from_reader(reader).map_err(|e| CodecError::malformed(ROOT, e))?;
    decode_spec(&value)
}

/// Decode a spec from an already parsed JSON tree
pub fn from_value(value: &Value) -> Result<Spec, CodecError> {
    decode_spec(value)
}

// Encoding

impl Serialize for Spec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("elements", &self.elements)?;
        if !self.attributes.is_empty() {
            map.serialize_entry("attributes", &self.attributes)?;
        }
        map.end()
    }
}

impl Serialize for Element {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("tag", &self.tag)?;
        if !self.description.is_empty() {
            map.serialize_entry("description", &self.description)?;
        }
        if !self.attributes.is_empty() {
            map.serialize_entry("attributes", &self.attributes)?;
        }
        if self.void {
            map.serialize_entry("void", &true)?;
        }
        if self.text {
            map.serialize_entry("text", &true)?;
        }
        map.end()
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", self.name())?;
        if !self.description().is_empty() {
            map.serialize_entry("description", self.description())?;
        }
        if let Attribute::Enumerated {
            allowed,
            allow_empty,
            allow_custom,
            ..
        } = self
        {
            map.serialize_entry("allowed", &TokenSetRef(allowed))?;
            if *allow_empty {
                map.serialize_entry("allow_empty", &true)?;
            }
            if *allow_custom {
                map.serialize_entry("allow_custom", &true)?;
            }
        }
        map.serialize_entry(DISCRIMINATOR, self.kind().as_str())?;
        map.end()
    }
}

/// Writes a token set as `{"token": {}, ...}`
struct TokenSetRef<'a>(&'a BTreeSet<String>);

#[derive(Serialize)]
struct Present {}

impl Serialize for TokenSetRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for token in self.0 {
            map.serialize_entry(token, &Present {})?;
        }
        map.end()
    }
}

// Decoding

impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_spec(&value).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Element {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_element(&value, ROOT).map_err(de::Error::custom)
    }
}

/// A lone attribute has no collection to be dropped from, so an unknown discriminator is an
/// error here.
impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        decode_attribute(&value, ROOT)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom(format!("unknown {}", DISCRIMINATOR)))
    }
}

fn decode_spec(value: &Value) -> Result<Spec, CodecError> {
    let record = as_record(value, ROOT)?;
    let name: String = required(record, "name", "")?;

    let mut elements = Vec::new();
    if let Some(items) = field::<Vec<Value>>(record, "elements", "")? {
        for (index, item) in items.iter().enumerate() {
            elements.push(decode_element(item, &format!("elements[{}]", index))?);
        }
    }

    let attributes = match field::<Vec<Value>>(record, "attributes", "")? {
        Some(items) => decode_attributes(&items, "attributes")?,
        None => Vec::new(),
    };

    Ok(Spec {
        name,
        elements,
        attributes,
    })
}

fn decode_element(value: &Value, path: &str) -> Result<Element, CodecError> {
    let record = as_record(value, path)?;
    let attributes = match field::<Vec<Value>>(record, "attributes", path)? {
        Some(items) => decode_attributes(&items, &join(path, "attributes"))?,
        None => Vec::new(),
    };

    Ok(Element {
        tag: required(record, "tag", path)?,
        description: field(record, "description", path)?.unwrap_or_default(),
        attributes,
        void: field(record, "void", path)?.unwrap_or_default(),
        text: field(record, "text", path)?.unwrap_or_default(),
    })
}

fn decode_attributes(items: &[Value], path: &str) -> Result<Vec<Attribute>, CodecError> {
    let mut attributes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let item_path = format!("{}[{}]", path, index);
        if let Some(attribute) = decode_attribute(item, &item_path)? {
            attributes.push(attribute);
        }
    }
    Ok(attributes)
}

/// Fields shared by every attribute record
struct AttributeHeader {
    name: String,
    description: String,
}

fn decode_attribute(value: &Value, path: &str) -> Result<Option<Attribute>, CodecError> {
    let record = as_record(value, path)?;

    // Header pass. Unknown or missing kinds are dropped before any other field is checked.
    let attribute_type: Option<String> = field(record, DISCRIMINATOR, path)?;
    let Some(kind) = attribute_type.as_deref().and_then(AttributeKind::from_wire) else {
        warn!(
            path,
            name = record.get("name").and_then(serde_json::Value::as_str),
            attribute_type = ?attribute_type,
            "dropping attribute with unknown attribute_type"
        );
        return Ok(None);
    };

    let header = AttributeHeader {
        name: required(record, "name", path)?,
        description: field(record, "description", path)?.unwrap_or_default(),
    };

    let attribute = match kind {
        AttributeKind::Enumerated => Attribute::Enumerated {
            name: header.name,
            description: header.description,
            allowed: field::<AllowedTokens>(record, "allowed", path)?
                .map(|tokens| tokens.0)
                .unwrap_or_default(),
            allow_empty: field(record, "allow_empty", path)?.unwrap_or_default(),
            allow_custom: field(record, "allow_custom", path)?.unwrap_or_default(),
        },
        AttributeKind::Text
        | AttributeKind::Char
        | AttributeKind::Integer
        | AttributeKind::Float
        | AttributeKind::Boolean
        | AttributeKind::TokenSet
        | AttributeKind::PrefixedCustom => {
            Attribute::from_kind(kind, header.name, header.description)
        }
    };

    Ok(Some(attribute))
}

type Record = serde_json::Map<String, Value>;

fn as_record<'a>(value: &'a Value, path: &str) -> Result<&'a Record, CodecError> {
    value.as_object().ok_or_else(|| {
        CodecError::malformed(path, format!("expected an object, found {}", kind_of(value)))
    })
}

/// Decode an optional field; `null` counts as absent
fn field<'a, T: Deserialize<'a>>(
    record: &'a Record,
    key: &str,
    path: &str,
) -> Result<Option<T>, CodecError> {
    match record.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| CodecError::malformed(join(path, key), e)),
    }
}

fn required<'a, T: Deserialize<'a>>(
    record: &'a Record,
    key: &str,
    path: &str,
) -> Result<T, CodecError> {
    field(record, key, path)?
        .ok_or_else(|| CodecError::malformed(join(path, key), "missing required field"))
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() || path == ROOT {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Reads `allowed` either as `{"token": {}, ...}` or as `["token", ...]`
struct AllowedTokens(BTreeSet<String>);

impl<'de> Deserialize<'de> for AllowedTokens {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AllowedTokensVisitor)
    }
}

struct AllowedTokensVisitor;

impl<'de> Visitor<'de> for AllowedTokensVisitor {
    type Value = AllowedTokens;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by token or an array of tokens")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut tokens = BTreeSet::new();
        while let Some((token, _)) = map.next_entry::<String, IgnoredAny>()? {
            tokens.insert(token);
        }
        Ok(AllowedTokens(tokens))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tokens = BTreeSet::new();
        while let Some(token) = seq.next_element::<String>()? {
            tokens.insert(token);
        }
        Ok(AllowedTokens(tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::SpecName;
    use serde_json::json;

    fn sample_spec() -> Spec {
        let mut spec = Spec::new(SpecName::Html);
        let mut br = Element::new("br").with_description("Line break");
        br.void = true;
        spec.elements.push(br);
        spec.attributes.push(Attribute::enumerated("dir", "", ["ltr", "rtl"]).allow_empty());
        spec
    }

    #[test]
    fn test_pretty_wire_shape() {
        let json = to_string_pretty(&sample_spec()).expect("encodes");
        insta::assert_snapshot!(json, @r###"
        {
          "name": "HTML",
          "elements": [
            {
              "tag": "br",
              "description": "Line break",
              "void": true
            }
          ],
          "attributes": [
            {
              "name": "dir",
              "allowed": {
                "ltr": {},
                "rtl": {}
              },
              "allow_empty": true,
              "attribute_type": "AttributeTypeEnum"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_round_trip() {
        let spec = sample_spec();
        let decoded = from_str(&to_string(&spec).expect("encodes")).expect("decodes");
        assert_eq!(decoded, spec);
    }

    #[test]
    fn test_char_attribute_keeps_its_kind() {
        let mut spec = Spec::named("HTML");
        spec.attributes.push(Attribute::char("accesskey", "Keyboard shortcut"));
        let decoded = from_str(&to_string(&spec).expect("encodes")).expect("decodes");
        assert_eq!(decoded.attributes[0].kind(), AttributeKind::Char);
    }

    #[test]
    fn test_unknown_discriminator_is_dropped() {
        let input = json!({
            "name": "HTML",
            "elements": [],
            "attributes": [
                {"name": "id", "attribute_type": "AttributeTypeString"},
                {"name": "mystery", "attribute_type": "AttributeTypeColor"},
                {"name": "untyped"},
                {"name": "tabindex", "attribute_type": "AttributeTypeNumber"}
            ]
        });
        let spec = from_value(&input).expect("decodes");
        let names: Vec<&str> = spec.attributes.iter().map(Attribute::name).collect();
        assert_eq!(names, vec!["id", "tabindex"]);
    }

    #[test]
    fn test_unknown_discriminator_without_name_is_dropped() {
        let spec = from_str(
            r#"{"name": "HTML", "elements": [{"tag": "a", "attributes": [{"attribute_type": "Nope"}]}],
                "attributes": [{"attribute_type": "Nope"}, {"description": "no name, no type"}]}"#,
        )
        .expect("unknown records never fail the decode");
        assert!(spec.attributes.is_empty());
        assert!(spec.elements[0].attributes.is_empty());
    }

    #[test]
    fn test_known_discriminator_still_requires_name() {
        let error = from_str(
            r#"{"name": "HTML", "elements": [], "attributes": [{"attribute_type": "AttributeTypeBool"}]}"#,
        )
        .expect_err("name is required once the kind is known");
        assert_eq!(error.path(), Some("attributes[0].name"));
    }

    #[test]
    fn test_enumerated_accepts_object_or_array() {
        let input = json!({
            "name": "HTML",
            "elements": [{
                "tag": "track",
                "attributes": [
                    {"name": "kind", "allowed": {"captions": {}, "chapters": {}, "metadata": {}},
                     "attribute_type": "AttributeTypeEnum"},
                    {"name": "preload", "allowed": ["auto", "none", "metadata"],
                     "allow_empty": true, "attribute_type": "AttributeTypeEnum"}
                ]
            }]
        });
        let spec = from_value(&input).expect("decodes");
        let attributes = &spec.elements[0].attributes;
        for attribute in attributes {
            match attribute {
                Attribute::Enumerated { allowed, .. } => assert_eq!(allowed.len(), 3),
                other => panic!("expected enumerated, got {:?}", other),
            }
        }
        assert_eq!(
            attributes[1],
            Attribute::enumerated("preload", "", ["none", "metadata", "auto"]).allow_empty()
        );
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let element = Element::new("div");
        let json = serde_json::to_value(&element).expect("encodes");
        assert_eq!(json, json!({"tag": "div"}));

        let attribute = Attribute::boolean("hidden", "");
        let json = serde_json::to_value(&attribute).expect("encodes");
        assert_eq!(
            json,
            json!({"name": "hidden", "attribute_type": "AttributeTypeBool"})
        );
    }

    #[test]
    fn test_malformed_input_names_the_field() {
        let input = json!({
            "name": "HTML",
            "elements": [
                {"tag": "a"},
                {"tag": "img", "attributes": [
                    {"name": "decoding", "allowed": 7, "attribute_type": "AttributeTypeEnum"}
                ]}
            ]
        });
        let error = from_value(&input).expect_err("allowed must be a set");
        assert_eq!(error.path(), Some("elements[1].attributes[0].allowed"));

        let error = from_str(r#"{"name": "HTML", "elements": [{"description": "x"}]}"#)
            .expect_err("tag is required");
        assert_eq!(error.path(), Some("elements[0].tag"));

        let error = from_str("[1, 2]").expect_err("root must be an object");
        assert_eq!(error.path(), Some("$"));

        let error = from_str("{not json").expect_err("syntax error");
        assert_eq!(error.path(), Some("$"));
    }

    #[test]
    fn test_serde_entry_points_share_the_contract() {
        let spec = sample_spec();
        let text = serde_json::to_string(&spec).expect("encodes");
        let decoded: Spec = serde_json::from_str(&text).expect("decodes");
        assert_eq!(decoded, spec);

        let lone: Result<Attribute, _> =
            serde_json::from_str(r#"{"name": "x", "attribute_type": "Nope"}"#);
        assert!(lone.is_err());
    }

    #[test]
    fn test_null_collections_are_empty() {
        let spec = from_str(r#"{"name": "SVG", "elements": null}"#).expect("decodes");
        assert!(spec.elements.is_empty());
        assert!(spec.attributes.is_empty());
    }
}
