use axum::{Json, extract::State, response::IntoResponse};
use arcsite_core::ContentEditor;
use arcsite_sdk::objects::{ApplyEditsRequest, WriteOutcome};

use crate::api::extractors::AdminAuth;
use crate::state::AppState;

use super::{AdminApiError, current, write_outcome};

/// `POST /settings/edits`: apply a batch of edits to the current document
/// and commit the result as one replace.
///
/// The batch is all or nothing: if any edit is rejected nothing is written.
/// A batch that changes nothing is not written either.
pub async fn apply_edits(
    State(state): State<AppState>,
    _auth: AdminAuth,
    Json(request): Json<ApplyEditsRequest>,
) -> Result<impl IntoResponse, AdminApiError> {
    let snapshot = current(&state)?;
    let mut editor = ContentEditor::from_snapshot(&snapshot);

    let count = request.edits.len();
    editor
        .apply_all(request.edits)
        .map_err(|(index, error)| AdminApiError::InvalidEdit { index, error })?;

    if !editor.is_dirty() {
        return Ok(Json(WriteOutcome {
            persisted: false,
            applied_locally: false,
            error: None,
        }));
    }

    tracing::info!(edits = count, "Committing admin edits");
    write_outcome(&state.store, editor.commit(&state.store).await)
}
