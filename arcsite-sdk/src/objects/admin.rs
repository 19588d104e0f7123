//! Admin API request and response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::edit::EditOp;
use crate::section::Section;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// `POST /admin/login` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub secret: String,
}

/// `POST /admin/settings/edits` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyEditsRequest {
    pub edits: Vec<EditOp>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Issued session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Value for `Authorization: Bearer ...`.
    pub token: String,
    pub expires_at: i64,
}

/// Result of a settings write.
///
/// Returned with `200` on success and `502` when the remote store rejected
/// the write; in that case the document was still applied locally. On
/// success `applied_locally` is false when a live remote store will deliver
/// the change instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteOutcome {
    pub persisted: bool,
    pub applied_locally: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Visibility of one optional section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub section: Section,
    pub visible: bool,
}

/// Dashboard summary of the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub services: usize,
    pub projects: usize,
    pub expertise: usize,
    pub gallery_sections: usize,
    pub sections: Vec<SectionVisibility>,
}

/// The two legal documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocuments {
    pub privacy_policy: Value,
    pub terms_of_service: Value,
}
