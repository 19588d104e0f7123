//! Staged editing of the site document.
//!
//! A [`ContentEditor`] holds a private working copy taken from a store
//! snapshot. Edits only touch the working copy; nothing is persisted until
//! [`ContentEditor::commit`] replaces the stored document in one write.
//!
//! Every edit is checked against the shape of the defaults table: a field
//! must exist in its section's defaults, a list must be an array there, and
//! an item field must appear on at least one default item of that list.

use arcsite_sdk::objects::{OverviewResponse, SectionVisibility};
use arcsite_sdk::{EditOp, FieldPath, PathParseError, Section, SiteDocument};
use serde_json::{Map, Value, json};
use thiserror::Error;
use tracing::{debug, info};

use crate::defaults::{default_legal_documents, defaults};
use crate::store::{SettingsStore, StoreError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("{section} has no field `{field}`")]
    UnknownField { section: Section, field: String },

    #[error("{section}.{array_key} is not a list")]
    NotAList { section: Section, array_key: String },

    #[error("index {index} out of range for a list of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0} has no visibility flag")]
    NoVisibilityFlag(Section),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("{0} is not an object")]
    NotAnObject(String),
}

impl From<PathParseError> for EditorError {
    fn from(e: PathParseError) -> Self {
        match e {
            PathParseError::UnknownSection(name) => EditorError::UnknownSection(name),
            other => EditorError::InvalidPath(other.to_string()),
        }
    }
}

/// Working copy of the site document for the admin editor.
#[derive(Debug, Clone)]
pub struct ContentEditor {
    baseline: SiteDocument,
    working: SiteDocument,
}

impl ContentEditor {
    /// Start editing from a snapshot. The snapshot itself is not touched.
    pub fn from_snapshot(snapshot: &SiteDocument) -> Self {
        Self {
            baseline: snapshot.clone(),
            working: snapshot.clone(),
        }
    }

    /// The working copy.
    pub fn document(&self) -> &SiteDocument {
        &self.working
    }

    pub fn into_document(self) -> SiteDocument {
        self.working
    }

    /// Whether the working copy differs from the snapshot it started from.
    pub fn is_dirty(&self) -> bool {
        self.working != self.baseline
    }

    /// Set a top-level field of a section.
    pub fn update_field(
        &mut self,
        section: Section,
        field: &str,
        value: Value,
    ) -> Result<(), EditorError> {
        if !default_section(section).contains_key(field) {
            return Err(EditorError::UnknownField {
                section,
                field: field.to_owned(),
            });
        }
        self.section_mut(section)?.insert(field.to_owned(), value);
        Ok(())
    }

    /// Set a field on one item of a list.
    pub fn update_list_item(
        &mut self,
        section: Section,
        array_key: &str,
        index: usize,
        field: &str,
        value: Value,
    ) -> Result<(), EditorError> {
        let known = default_list(section, array_key)?
            .iter()
            .filter_map(Value::as_object)
            .any(|item| item.contains_key(field));
        if !known {
            return Err(EditorError::UnknownField {
                section,
                field: format!("{array_key}[].{field}"),
            });
        }

        let list = self.list_mut(section, array_key)?;
        let len = list.len();
        let item = list
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange { index, len })?;
        let item = item
            .as_object_mut()
            .ok_or_else(|| EditorError::NotAnObject(format!("{section}.{array_key}[{index}]")))?;
        item.insert(field.to_owned(), value);
        Ok(())
    }

    /// Append an item to a list.
    pub fn add_list_item(
        &mut self,
        section: Section,
        array_key: &str,
        item: Value,
    ) -> Result<(), EditorError> {
        default_list(section, array_key)?;
        if !item.is_object() {
            return Err(EditorError::NotAnObject(format!("new {section}.{array_key} item")));
        }
        self.list_mut(section, array_key)?.push(item);
        Ok(())
    }

    /// Append the list's blank item template.
    pub fn add_default_item(&mut self, section: Section, array_key: &str) -> Result<(), EditorError> {
        let item = item_template(section, array_key).ok_or_else(|| EditorError::NotAList {
            section,
            array_key: array_key.to_owned(),
        })?;
        self.add_list_item(section, array_key, item)
    }

    /// Remove the item at `index`; later items shift down.
    pub fn remove_list_item(
        &mut self,
        section: Section,
        array_key: &str,
        index: usize,
    ) -> Result<(), EditorError> {
        default_list(section, array_key)?;
        let list = self.list_mut(section, array_key)?;
        if index >= list.len() {
            return Err(EditorError::IndexOutOfRange {
                index,
                len: list.len(),
            });
        }
        list.remove(index);
        Ok(())
    }

    /// Flip a section's visibility. Returns the new visibility.
    pub fn toggle_section(&mut self, section: Section) -> Result<bool, EditorError> {
        let flag = section
            .visibility_flag()
            .ok_or(EditorError::NoVisibilityFlag(section))?;
        let visible = !self.working.is_visible(section);
        self.working
            .as_map_mut()
            .insert(flag.to_owned(), Value::Bool(visible));
        Ok(visible)
    }

    /// Replace both legal documents in the working copy with the built-in
    /// text.
    pub fn load_default_legal(&mut self) {
        let legal = default_legal_documents();
        let map = self.working.as_map_mut();
        map.insert(Section::PrivacyPolicy.key().to_owned(), legal.privacy_policy);
        map.insert(Section::TermsOfService.key().to_owned(), legal.terms_of_service);
    }

    /// Replace the images of a gallery section from `url|title` lines.
    ///
    /// Blank lines are skipped; the title is optional.
    pub fn set_gallery_images_from_lines(
        &mut self,
        section_index: usize,
        text: &str,
    ) -> Result<(), EditorError> {
        let images = parse_gallery_lines(text);
        self.update_list_item(
            Section::Gallery,
            "sections",
            section_index,
            "images",
            Value::Array(images),
        )
    }

    /// Apply one wire-level edit.
    pub fn apply(&mut self, op: EditOp) -> Result<(), EditorError> {
        debug!(?op, "Applying edit");
        match op {
            EditOp::SetField { path, value } => self.set_path(&path, value),
            EditOp::AddItem { list, item } if item.is_null() => {
                self.add_default_item(list.section, &list.array_key)
            }
            EditOp::AddItem { list, item } => {
                self.add_list_item(list.section, &list.array_key, item)
            }
            EditOp::RemoveItem { list, index } => {
                self.remove_list_item(list.section, &list.array_key, index)
            }
            EditOp::ToggleSection { section } => self.toggle_section(section).map(|_| ()),
            EditOp::SetGalleryImages { index, lines } => {
                self.set_gallery_images_from_lines(index, &lines)
            }
            EditOp::LoadDefaultLegal => {
                self.load_default_legal();
                Ok(())
            }
        }
    }

    /// Apply a batch of edits in order, stopping at the first failure.
    ///
    /// Returns the index of the failing edit with its error. Edits before
    /// it stay applied.
    pub fn apply_all(
        &mut self,
        ops: impl IntoIterator<Item = EditOp>,
    ) -> Result<(), (usize, EditorError)> {
        for (i, op) in ops.into_iter().enumerate() {
            self.apply(op).map_err(|e| (i, e))?;
        }
        Ok(())
    }

    /// Set a field addressed by a path.
    pub fn set_path(&mut self, path: &FieldPath, value: Value) -> Result<(), EditorError> {
        match path {
            FieldPath::Field { section, field } => self.update_field(*section, field, value),
            FieldPath::ListItem {
                section,
                array_key,
                index,
                field,
            } => self.update_list_item(*section, array_key, *index, field, value),
        }
    }

    /// Set a field addressed by a dotted path string.
    pub fn set_path_str(&mut self, path: &str, value: Value) -> Result<(), EditorError> {
        let path: FieldPath = path.parse()?;
        self.set_path(&path, value)
    }

    /// Dashboard summary of the working copy.
    pub fn overview(&self) -> OverviewResponse {
        overview(&self.working)
    }

    /// Persist the working copy as one replace.
    ///
    /// On success the working copy becomes the new baseline. On a write
    /// failure the store has still applied it locally and the error is
    /// returned; the editor stays dirty.
    pub async fn commit(&mut self, store: &SettingsStore) -> Result<(), StoreError> {
        store.update_settings(&self.working).await?;
        self.baseline = self.working.clone();
        info!("Committed editor changes");
        Ok(())
    }

    fn section_mut(&mut self, section: Section) -> Result<&mut Map<String, Value>, EditorError> {
        self.working
            .as_map_mut()
            .entry(section.key())
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| EditorError::NotAnObject(section.key().to_owned()))
    }

    fn list_mut(
        &mut self,
        section: Section,
        array_key: &str,
    ) -> Result<&mut Vec<Value>, EditorError> {
        self.section_mut(section)?
            .entry(array_key)
            .or_insert_with(|| Value::Array(Vec::new()))
            .as_array_mut()
            .ok_or_else(|| EditorError::NotAList {
                section,
                array_key: array_key.to_owned(),
            })
    }
}

/// Dashboard summary of a document.
pub fn overview(doc: &SiteDocument) -> OverviewResponse {
    let count = |section, key| doc.list(section, key).map_or(0, Vec::len);
    OverviewResponse {
        services: count(Section::Services, "items"),
        projects: count(Section::Projects, "items"),
        expertise: count(Section::Expertise, "items"),
        gallery_sections: count(Section::Gallery, "sections"),
        sections: Section::ALL
            .into_iter()
            .filter(|s| s.visibility_flag().is_some())
            .map(|section| SectionVisibility {
                section,
                visible: doc.is_visible(section),
            })
            .collect(),
    }
}

/// Render a gallery section's images as editable `url|title` lines.
pub fn gallery_image_lines(doc: &SiteDocument, section_index: usize) -> String {
    let Some(images) = doc
        .list(Section::Gallery, "sections")
        .and_then(|sections| sections.get(section_index))
        .and_then(|section| section.get("images"))
        .and_then(Value::as_array)
    else {
        return String::new();
    };
    images
        .iter()
        .map(|img| {
            let url = img.get("url").and_then(Value::as_str).unwrap_or_default();
            let title = img.get("title").and_then(Value::as_str).unwrap_or_default();
            format!("{url}|{title}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_gallery_lines(text: &str) -> Vec<Value> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut parts = line.split('|');
            let url = parts.next().unwrap_or_default().trim();
            let title = parts.next().unwrap_or_default().trim();
            json!({ "url": url, "title": title })
        })
        .collect()
}

fn default_section(section: Section) -> &'static Map<String, Value> {
    static EMPTY: std::sync::OnceLock<Map<String, Value>> = std::sync::OnceLock::new();
    defaults()
        .section(section)
        .unwrap_or_else(|| EMPTY.get_or_init(Map::new))
}

fn default_list(section: Section, array_key: &str) -> Result<&'static Vec<Value>, EditorError> {
    default_section(section)
        .get(array_key)
        .and_then(Value::as_array)
        .ok_or_else(|| EditorError::NotAList {
            section,
            array_key: array_key.to_owned(),
        })
}

/// Blank item appended by "add" buttons.
fn item_template(section: Section, array_key: &str) -> Option<Value> {
    let item = match (section, array_key) {
        (Section::Services, "items") => {
            json!({ "title": "New Service", "desc": "Description", "img": "" })
        }
        (Section::Projects, "items") => json!({
            "title": "New Project",
            "category": "Category",
            "platform": "Web",
            "year": "2024",
            "img": "",
            "link": "#"
        }),
        (Section::Expertise, "items") => {
            json!({ "desc": "New expertise item", "icon": "Lightbulb" })
        }
        (Section::Approach, "steps") => json!({ "title": "New Step", "desc": "Description" }),
        (Section::WhyChooseUs, "items") => json!({
            "title": "New Reason",
            "description": "Description",
            "icon": "Award"
        }),
        (Section::Gallery, "sections") => json!({ "title": "New Section", "images": [] }),
        (Section::PrivacyPolicy, "sections") => {
            json!({ "title": "New Section", "content": "Content here..." })
        }
        (Section::TermsOfService, "sections") => {
            json!({ "title": "New Clause", "content": "Terms content..." })
        }
        _ => return None,
    };
    Some(item)
}
