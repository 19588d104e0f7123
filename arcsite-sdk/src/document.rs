//! The site configuration document.
//!
//! A document is a JSON object tree: one object per [`Section`] plus a flat
//! set of `show*` visibility flags. The tree is kept untyped on purpose so
//! that a persisted document written by an older or newer editor still
//! loads; structural guarantees come from merging onto the defaults table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::section::Section;

/// A possibly incomplete document as read from storage.
pub type PartialDocument = Map<String, Value>;

/// A full site configuration document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteDocument(Map<String, Value>);

impl SiteDocument {
    /// Wrap an existing JSON object.
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Convert an arbitrary JSON value into a document.
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Borrow the underlying object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Mutably borrow the underlying object.
    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Consume the document, returning the underlying object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Convert into a plain JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The object stored under `section`, if it is an object.
    pub fn section(&self, section: Section) -> Option<&Map<String, Value>> {
        self.0.get(section.key()).and_then(Value::as_object)
    }

    /// A string field of a section.
    pub fn text(&self, section: Section, field: &str) -> Option<&str> {
        self.section(section)
            .and_then(|s| s.get(field))
            .and_then(Value::as_str)
    }

    /// An array field of a section.
    pub fn list(&self, section: Section, array_key: &str) -> Option<&Vec<Value>> {
        self.section(section)
            .and_then(|s| s.get(array_key))
            .and_then(Value::as_array)
    }

    /// Whether a section is visible.
    ///
    /// Sections without a flag are always visible. A flag that is missing
    /// or not a boolean hides its section.
    pub fn is_visible(&self, section: Section) -> bool {
        match section.visibility_flag() {
            None => true,
            Some(flag) => self.0.get(flag).and_then(Value::as_bool).unwrap_or(false),
        }
    }
}

impl From<SiteDocument> for PartialDocument {
    fn from(doc: SiteDocument) -> Self {
        doc.0
    }
}

impl From<PartialDocument> for SiteDocument {
    fn from(map: PartialDocument) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> SiteDocument {
        SiteDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(SiteDocument::from_value(json!([1, 2])).is_none());
        assert!(SiteDocument::from_value(json!("text")).is_none());
        assert!(SiteDocument::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_visibility_flags() {
        let d = doc(json!({
            "showAbout": true,
            "showGallery": false,
            "showContact": "yes",
        }));
        assert!(d.is_visible(Section::Hero));
        assert!(d.is_visible(Section::About));
        assert!(!d.is_visible(Section::Gallery));
        assert!(!d.is_visible(Section::Contact));
        assert!(!d.is_visible(Section::Vision));
    }

    #[test]
    fn test_typed_accessors() {
        let d = doc(json!({
            "contact": { "email": "x@y.com", "phone": 12 },
            "services": { "items": [{ "title": "A" }] },
        }));
        assert_eq!(d.text(Section::Contact, "email"), Some("x@y.com"));
        assert_eq!(d.text(Section::Contact, "phone"), None);
        assert_eq!(d.list(Section::Services, "items").map(Vec::len), Some(1));
        assert!(d.section(Section::Hero).is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let d = doc(json!({ "hero": { "title": "T" } }));
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json, json!({ "hero": { "title": "T" } }));
    }
}
