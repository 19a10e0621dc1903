use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    error::AppError,
    model::{api::ApiResponse, announcement::Announcement},
    service::admin::AdminService,
    state::AppState,
};

/// GET /api/admin/announcements - Get all announcements
///
/// # Returns
/// - `200 OK`: Envelope with every stored announcement
pub async fn get_all_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let announcements = service.get_all_announcements().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(announcements))))
}

/// POST /api/admin/announcements - Publish an announcement
///
/// # Request Body
/// JSON announcement record
///
/// # Returns
/// - `200 OK`: Envelope with the stored announcement
pub async fn create_announcement(
    State(state): State<AppState>,
    Json(announcement): Json<Announcement>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let announcement = service.create_announcement(announcement).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            announcement,
            "Announcement created",
        )),
    ))
}

/// GET /api/admin/announcements/{announcement_id} - Get an announcement by ID
///
/// # Path Parameters
/// - `announcement_id`: Document ID of the announcement
///
/// # Returns
/// - `200 OK`: Envelope with the announcement
/// - `404 Not Found`: No announcement with that ID (empty body)
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
) -> Result<Response, AppError> {
    let service = AdminService::new(&state.store);
    match service.get_announcement_by_id(&announcement_id).await? {
        Some(announcement) => {
            Ok((StatusCode::OK, Json(ApiResponse::success(announcement))).into_response())
        }
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// PUT /api/admin/announcements/{announcement_id} - Update an announcement
///
/// # Path Parameters
/// - `announcement_id`: Document ID of the announcement
///
/// # Request Body
/// JSON announcement record
///
/// # Returns
/// - `200 OK`: Envelope with the updated announcement
/// - `404 Not Found`: No announcement with that ID
pub async fn update_announcement(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
    Json(announcement): Json<Announcement>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let announcement = service
        .update_announcement(&announcement_id, announcement)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            announcement,
            "Announcement updated successfully",
        )),
    ))
}

/// DELETE /api/admin/announcements/{announcement_id} - Delete an announcement
///
/// # Path Parameters
/// - `announcement_id`: Document ID of the announcement
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No announcement with that ID
pub async fn delete_announcement(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    service.delete_announcement(&announcement_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message(
            "Announcement deleted successfully",
        )),
    ))
}

/// GET /api/admin/document-requests - Get all document requests
///
/// # Returns
/// - `200 OK`: Envelope with every stored request
pub async fn get_all_document_requests(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let requests = service.get_all_document_requests().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(requests))))
}

/// GET /api/admin/document-requests/pending - Get requests awaiting review
///
/// # Returns
/// - `200 OK`: Envelope with all pending requests
pub async fn get_pending_document_requests(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let requests = service.get_pending_document_requests().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(requests))))
}

/// PUT /api/admin/document-requests/{request_id}/approve - Approve a request
///
/// Marks the request approved. An unknown ID still answers with the
/// confirmation message and a null payload.
///
/// # Path Parameters
/// - `request_id`: Document ID of the request
///
/// # Returns
/// - `200 OK`: Envelope with the approved request (null when unknown)
pub async fn approve_document_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = AdminService::new(&state.store);
    let request = service.approve_document_request(&request_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            request,
            "Document request approved",
        )),
    ))
}
