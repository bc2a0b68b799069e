//! File record handlers: upload, lookup, listing, visibility, retrieval.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use depot_core::error::AppError;
use depot_core::types::{FileId, ListPage};

use crate::dto::request::{CreateFileRequest, ListFilesQuery, RetrieveQuery};
use crate::dto::response::FileRecordDto;
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// POST /files
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateFileRequest>,
) -> Result<(StatusCode, Json<FileRecordDto>), ApiError> {
    let record = state.upload_service.upload(user_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// GET /files/{id}
pub async fn show(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<FileRecordDto>, ApiError> {
    let record = state.file_service.get_owned(user_id, id).await?;
    Ok(Json(record.into()))
}

/// GET /files?parentId=...&page=...
pub async fn index(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<ListFilesQuery>,
) -> Result<Json<Vec<FileRecordDto>>, ApiError> {
    let page = ListPage::from_param(query.page.as_deref());
    let records = state
        .file_service
        .list_children(user_id, query.parent_id.as_deref(), page)
        .await?;
    Ok(Json(records.into_iter().map(FileRecordDto::from).collect()))
}

/// PUT /files/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<FileRecordDto>, ApiError> {
    let record = state.file_service.set_visibility(user_id, id, true).await?;
    Ok(Json(record.into()))
}

/// PUT /files/{id}/unpublish
pub async fn unpublish(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<FileId>,
) -> Result<Json<FileRecordDto>, ApiError> {
    let record = state
        .file_service
        .set_visibility(user_id, id, false)
        .await?;
    Ok(Json(record.into()))
}

/// GET /files/{id}/data?size=...
///
/// Tolerates anonymous callers; visibility is enforced by the retrieval
/// path against the record itself.
pub async fn data(
    State(state): State<AppState>,
    MaybeAuthUser(viewer): MaybeAuthUser,
    Path(id): Path<FileId>,
    Query(query): Query<RetrieveQuery>,
) -> Result<Response, ApiError> {
    let download = state
        .download_service
        .fetch(id, viewer, query.size.as_deref())
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, download.content_type)
        .body(Body::from_stream(download.stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
