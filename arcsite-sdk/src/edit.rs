//! Editor paths and operations.
//!
//! The admin editor addresses document fields through [`FieldPath`]
//! instead of raw string concatenation. Paths have a fixed grammar:
//!
//! ```text
//! hero.title                 -> FieldPath::Field
//! services.items[2].img      -> FieldPath::ListItem
//! services.items             -> ListPath
//! ```
//!
//! Parsing only checks the grammar and the section name. Whether the field
//! exists in the document shape is checked by the editor against the
//! defaults table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::section::Section;

/// Errors produced while parsing a path string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    #[error("empty path")]
    Empty,
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("malformed path: {0}")]
    Malformed(String),
}

/// Address of a single scalar field in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldPath {
    /// `section.field`
    Field { section: Section, field: String },
    /// `section.array_key[index].field`
    ListItem {
        section: Section,
        array_key: String,
        index: usize,
        field: String,
    },
}

impl FieldPath {
    pub fn field(section: Section, field: impl Into<String>) -> Self {
        FieldPath::Field {
            section,
            field: field.into(),
        }
    }

    pub fn list_item(
        section: Section,
        array_key: impl Into<String>,
        index: usize,
        field: impl Into<String>,
    ) -> Self {
        FieldPath::ListItem {
            section,
            array_key: array_key.into(),
            index,
            field: field.into(),
        }
    }

    pub fn section(&self) -> Section {
        match self {
            FieldPath::Field { section, .. } | FieldPath::ListItem { section, .. } => *section,
        }
    }
}

/// Address of an array of item records inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ListPath {
    pub section: Section,
    pub array_key: String,
}

impl ListPath {
    pub fn new(section: Section, array_key: impl Into<String>) -> Self {
        Self {
            section,
            array_key: array_key.into(),
        }
    }
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_section(s: &str) -> Result<Section, PathParseError> {
    s.parse()
        .map_err(|_| PathParseError::UnknownSection(s.to_owned()))
}

/// Split `items[2]` into `("items", 2)`.
fn parse_indexed(segment: &str, whole: &str) -> Result<(String, usize), PathParseError> {
    let malformed = || PathParseError::Malformed(whole.to_owned());
    let open = segment.find('[').ok_or_else(malformed)?;
    let inner = segment[open + 1..].strip_suffix(']').ok_or_else(malformed)?;
    let key = &segment[..open];
    if !is_identifier(key) {
        return Err(malformed());
    }
    let index = inner.parse::<usize>().map_err(|_| malformed())?;
    Ok((key.to_owned(), index))
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }
        let parts: Vec<&str> = s.split('.').collect();
        match parts.as_slice() {
            [section, field] if is_identifier(field) => Ok(FieldPath::Field {
                section: parse_section(section)?,
                field: (*field).to_owned(),
            }),
            [section, indexed, field] if is_identifier(field) => {
                let section = parse_section(section)?;
                let (array_key, index) = parse_indexed(indexed, s)?;
                Ok(FieldPath::ListItem {
                    section,
                    array_key,
                    index,
                    field: (*field).to_owned(),
                })
            }
            _ => Err(PathParseError::Malformed(s.to_owned())),
        }
    }
}

impl FromStr for ListPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathParseError::Empty);
        }
        match s.split('.').collect::<Vec<_>>().as_slice() {
            [section, array_key] if is_identifier(array_key) => Ok(ListPath {
                section: parse_section(section)?,
                array_key: (*array_key).to_owned(),
            }),
            _ => Err(PathParseError::Malformed(s.to_owned())),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Field { section, field } => write!(f, "{section}.{field}"),
            FieldPath::ListItem {
                section,
                array_key,
                index,
                field,
            } => write!(f, "{section}.{array_key}[{index}].{field}"),
        }
    }
}

impl fmt::Display for ListPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.array_key)
    }
}

impl TryFrom<String> for FieldPath {
    type Error = PathParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldPath> for String {
    fn from(value: FieldPath) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ListPath {
    type Error = PathParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ListPath> for String {
    fn from(value: ListPath) -> Self {
        value.to_string()
    }
}

/// A single staged change to the editor's working copy.
///
/// Sent as a batch to the admin API, which replays the operations onto a
/// copy of the current snapshot and commits the result as one replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    /// Set a scalar field (top-level or inside a list item).
    SetField { path: FieldPath, value: Value },
    /// Append an item record to a list. A missing or `null` item appends
    /// the list's blank template.
    AddItem {
        list: ListPath,
        #[serde(default)]
        item: Value,
    },
    /// Remove the item at `index` from a list.
    RemoveItem { list: ListPath, index: usize },
    /// Flip a section's visibility flag.
    ToggleSection { section: Section },
    /// Replace a gallery section's images from `url|title` lines.
    SetGalleryImages { index: usize, lines: String },
    /// Reset both legal documents to the built-in text.
    LoadDefaultLegal,
}
