//! Note routes. Every handler requires a bearer token.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use fieldnotes_core::{Note, NoteContent, NoteDetails, NoteId, PageRequest, PagedResult};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::error::{ApiError, ApiResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for listing notes.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Full replacement of a note; the id travels in the body.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: NoteId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: NoteId,
    pub message: String,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes?pageNumber&pageSize&category
async fn list_notes(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    ApiQuery(params): ApiQuery<ListNotesParams>,
) -> ApiResult<Json<PagedResult<Note>>> {
    let page = PageRequest::normalize(params.page_number, params.page_size);
    let result = state.notes().get_all(&caller, page, params.category).await?;
    Ok(Json(result))
}

/// GET /api/notes/categories
async fn list_categories(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(state.notes().get_categories(&caller).await?))
}

/// GET /api/notes/{id}
async fn get_note(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<NoteDetails>> {
    let id: NoteId = id.parse()?;
    Ok(Json(state.notes().get_by_id(&caller, id).await?))
}

/// POST /api/notes
async fn create_note(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    ApiJson(request): ApiJson<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let content = NoteContent::new(
        request.title.as_deref(),
        request.description,
        request.category,
    )?;
    let note = state.notes().create(&caller, content).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id: note.id })))
}

/// PUT /api/notes
async fn update_note(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    ApiJson(request): ApiJson<UpdateNoteRequest>,
) -> ApiResult<Json<Note>> {
    let id: NoteId = request
        .id
        .as_deref()
        .ok_or_else(|| ApiError::Validation("note id is required".to_string()))?
        .parse()?;
    let content = NoteContent::new(
        request.title.as_deref(),
        request.description,
        request.category,
    )?;
    Ok(Json(state.notes().update(&caller, id, content).await?))
}

/// DELETE /api/notes/{id}
async fn delete_note(
    State(state): State<AppState>,
    AuthenticatedUser(caller): AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let id: NoteId = id.parse()?;
    state.notes().delete(&caller, id).await?;
    Ok(Json(DeletedResponse {
        id,
        message: "Note deleted".to_string(),
    }))
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/notes",
            get(list_notes).post(create_note).put(update_note),
        )
        .route("/api/notes/categories", get(list_categories))
        .route("/api/notes/{id}", get(get_note).delete(delete_note))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_camel_case() {
        let params: ListNotesParams =
            serde_urlencoded::from_str("pageNumber=2&pageSize=5&category=Work").unwrap();
        assert_eq!(params.page_number, Some(2));
        assert_eq!(params.page_size, Some(5));
        assert_eq!(params.category.as_deref(), Some("Work"));
    }

    #[test]
    fn test_update_request_allows_missing_optionals() {
        let request: UpdateNoteRequest =
            serde_json::from_str(r#"{"id": "abc", "title": "t"}"#).unwrap();
        assert_eq!(request.id.as_deref(), Some("abc"));
        assert!(request.description.is_none());
        assert!(request.category.is_none());
    }
}
