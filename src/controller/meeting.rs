use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::{
    controller::required,
    error::AppError,
    model::{
        api::ApiResponse,
        meeting::{Meeting, OneOnOneMeetingRequest},
    },
    service::meeting::MeetingService,
    state::AppState,
    util::timestamp::{south_africa_offset, Timestamp},
};

/// Reason supplied when rejecting a meeting request.
#[derive(Debug, Deserialize)]
pub struct Rejection {
    pub reason: Option<String>,
}

/// GET /api/meetings - Get all meetings
///
/// # Returns
/// - `200 OK`: Envelope with every stored meeting
pub async fn get_all_meetings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meetings = service.find_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(meetings))))
}

/// POST /api/meetings - Schedule a group meeting
///
/// Admin-created meetings are approved immediately and visible to every
/// parent.
///
/// # Request Body
/// JSON meeting record
///
/// # Returns
/// - `200 OK`: Envelope with the stored meeting
pub async fn create_meeting(
    State(state): State<AppState>,
    Json(meeting): Json<Meeting>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meeting = service.create_meeting(meeting).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            meeting,
            "Meeting scheduled successfully",
        )),
    ))
}

/// POST /api/meetings/request-one-on-one - Request a one-on-one meeting
///
/// Parents request private meetings with a teacher. The request lands in
/// the pending queue until an admin approves or rejects it. The scheduled
/// time arrives as picker text and is read in the school's local timezone.
///
/// # Request Body
/// JSON one-on-one request (parent, teacher, title, scheduledTime)
///
/// # Returns
/// - `200 OK`: Envelope with the pending meeting
/// - `400 Bad Request`: Unparseable scheduled time
pub async fn request_one_on_one(
    State(state): State<AppState>,
    Json(request): Json<OneOnOneMeetingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let scheduled_time = Timestamp::parse(
        request.scheduled_time.as_deref().unwrap_or_default(),
        &south_africa_offset(),
    )?;

    let service = MeetingService::new(&state.store);
    let meeting = service.request_one_on_one(request, scheduled_time).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            meeting,
            "One-on-one meeting request submitted for approval",
        )),
    ))
}

/// GET /api/meetings/parent/{parent_id} - Get meetings visible to a parent
///
/// Returns the parent's own meetings plus every group meeting, with the
/// parent's rejected requests included so they can see the outcome.
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the visible meetings
pub async fn get_meetings_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meetings = service.find_by_parent_id(&parent_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(meetings))))
}

/// GET /api/meetings/{meeting_id} - Get a meeting by ID
///
/// # Path Parameters
/// - `meeting_id`: Document ID of the meeting
///
/// # Returns
/// - `200 OK`: Envelope with the meeting
/// - `404 Not Found`: No meeting with that ID (empty body)
pub async fn get_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<Response, AppError> {
    let service = MeetingService::new(&state.store);
    match service.find_by_id(&meeting_id).await? {
        Some(meeting) => Ok((StatusCode::OK, Json(ApiResponse::success(meeting))).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// PUT /api/meetings/{meeting_id} - Update a meeting
///
/// # Path Parameters
/// - `meeting_id`: Document ID of the meeting
///
/// # Request Body
/// JSON meeting record
///
/// # Returns
/// - `200 OK`: Envelope with the updated meeting
/// - `404 Not Found`: No meeting with that ID
pub async fn update_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    Json(meeting): Json<Meeting>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meeting = service.update_meeting(&meeting_id, meeting).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            meeting,
            "Meeting updated successfully",
        )),
    ))
}

/// DELETE /api/meetings/{meeting_id} - Delete a meeting
///
/// # Path Parameters
/// - `meeting_id`: Document ID of the meeting
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No meeting with that ID
pub async fn delete_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    service.delete_meeting(&meeting_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Meeting deleted successfully")),
    ))
}

/// GET /api/meetings/pending - Get meeting requests awaiting review
///
/// # Returns
/// - `200 OK`: Envelope with all pending requests
pub async fn get_pending_meetings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meetings = service.find_pending().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(meetings))))
}

/// GET /api/meetings/approved - Get approved meetings
///
/// # Returns
/// - `200 OK`: Envelope with all approved meetings
pub async fn get_approved_meetings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meetings = service.find_approved().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(meetings))))
}

/// GET /api/meetings/rejected - Get rejected meeting requests
///
/// # Returns
/// - `200 OK`: Envelope with all rejected requests
pub async fn get_rejected_meetings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meetings = service.find_rejected().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(meetings))))
}

/// PUT /api/meetings/{meeting_id}/approve - Approve a meeting request
///
/// # Path Parameters
/// - `meeting_id`: Document ID of the meeting
///
/// # Returns
/// - `200 OK`: Envelope with the approved meeting
/// - `404 Not Found`: No meeting with that ID
pub async fn approve_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = MeetingService::new(&state.store);
    let meeting = service.approve_meeting(&meeting_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            meeting,
            "Meeting approved successfully",
        )),
    ))
}

/// PUT /api/meetings/{meeting_id}/reject - Reject a meeting request
///
/// # Path Parameters
/// - `meeting_id`: Document ID of the meeting
///
/// # Request Body
/// - `reason`: Why the request was rejected
///
/// # Returns
/// - `200 OK`: Envelope with the rejected meeting
/// - `400 Bad Request`: Missing rejection reason
/// - `404 Not Found`: No meeting with that ID
pub async fn reject_meeting(
    State(state): State<AppState>,
    Path(meeting_id): Path<String>,
    Json(rejection): Json<Rejection>,
) -> Result<impl IntoResponse, AppError> {
    let reason = required(rejection.reason.as_deref(), "Rejection reason is required")?;

    let service = MeetingService::new(&state.store);
    let meeting = service.reject_meeting(&meeting_id, reason).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            meeting,
            "Meeting rejected successfully",
        )),
    ))
}
