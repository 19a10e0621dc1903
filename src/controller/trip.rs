use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    controller::required,
    error::AppError,
    model::{api::ApiResponse, trip::Trip},
    service::trip::TripService,
    state::AppState,
};

/// Registration submitted when signing a student up for a trip.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRegistration {
    pub student_id: Option<String>,
    pub parent_id: Option<String>,
    pub payment_method: Option<String>,
}

/// Image payload for a trip, either a storage URL or inline base64 data.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripImage {
    pub image_data: Option<String>,
}

/// POST /api/trips - Create a new trip
///
/// # Request Body
/// JSON trip record
///
/// # Returns
/// - `201 Created`: Envelope with the stored trip
pub async fn create_trip(
    State(state): State<AppState>,
    Json(trip): Json<Trip>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trip = service.create_trip(trip).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            trip,
            "Trip created successfully",
        )),
    ))
}

/// GET /api/trips - Get all trips
///
/// # Returns
/// - `200 OK`: Envelope with every stored trip
pub async fn get_all_trips(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trips = service.find_all().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(trips))))
}

/// GET /api/trips/{trip_id} - Get a trip by ID
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope with the trip
/// - `404 Not Found`: No trip with that ID
pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trip = service
        .find_by_id(&trip_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(trip))))
}

/// PUT /api/trips/{trip_id} - Update a trip
///
/// Replaces the stored record. The creation timestamp and the registration
/// list survive when the replacement omits them.
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Request Body
/// JSON trip record
///
/// # Returns
/// - `200 OK`: Envelope with the updated trip
/// - `404 Not Found`: No trip with that ID
pub async fn update_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(trip): Json<Trip>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trip = service.update_trip(&trip_id, trip).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            trip,
            "Trip updated successfully",
        )),
    ))
}

/// DELETE /api/trips/{trip_id} - Delete a trip
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No trip with that ID
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    service.delete_trip(&trip_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Trip deleted successfully")),
    ))
}

/// POST /api/trips/{trip_id}/register - Register a student for a trip
///
/// Records the student on the trip and books the trip fee as a completed
/// payment in one step.
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Request Body
/// - `studentId`: Student joining the trip
/// - `parentId`: Parent paying for the trip
/// - `paymentMethod`: Optional payment method label
///
/// # Returns
/// - `200 OK`: Confirmation string
/// - `400 Bad Request`: Missing student or parent ID, or student already registered
/// - `404 Not Found`: No trip with that ID
pub async fn register_for_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(registration): Json<TripRegistration>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = required(registration.student_id.as_deref(), "studentId is required")?;
    let parent_id = required(registration.parent_id.as_deref(), "parentId is required")?;

    let service = TripService::new(&state.store);
    service
        .register_student(&trip_id, student_id, parent_id, registration.payment_method)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Student registered and payment processed successfully",
        )),
    ))
}

/// DELETE /api/trips/{trip_id}/register/{student_id} - Unregister a student
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Confirmation string
/// - `404 Not Found`: No trip with that ID
pub async fn unregister_from_trip(
    State(state): State<AppState>,
    Path((trip_id, student_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    service.unregister_student(&trip_id, &student_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(
            "Student unregistered successfully from trip",
        )),
    ))
}

/// PUT /api/trips/{trip_id}/hold - Put a trip on hold
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope with the held trip
/// - `404 Not Found`: No trip with that ID
pub async fn hold_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trip = service.hold_trip(&trip_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            trip,
            "Trip put on hold successfully",
        )),
    ))
}

/// PUT /api/trips/{trip_id}/activate - Reactivate a held trip
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope with the active trip
/// - `404 Not Found`: No trip with that ID
pub async fn activate_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let trip = service.activate_trip(&trip_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            trip,
            "Trip activated successfully",
        )),
    ))
}

/// PUT /api/trips/{trip_id}/image - Upload or replace the trip image
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Request Body
/// - `imageData`: Storage URL or inline base64 image data
///
/// # Returns
/// - `200 OK`: Envelope with the updated trip
/// - `400 Bad Request`: Missing image data
/// - `404 Not Found`: No trip with that ID
pub async fn update_trip_image(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Json(image): Json<TripImage>,
) -> Result<impl IntoResponse, AppError> {
    let image_data = required(image.image_data.as_deref(), "imageData is required")?;

    let service = TripService::new(&state.store);
    let trip = service
        .update_trip_image(&trip_id, image_data.to_string())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            trip,
            "Trip image updated successfully",
        )),
    ))
}

/// GET /api/trips/{trip_id}/paid-students - Get paid students grouped by grade
///
/// Collects the students with a completed payment for the trip and groups
/// them by grade for the roll call sheet.
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope mapping grade to the students who paid
/// - `404 Not Found`: No trip with that ID
pub async fn get_paid_students(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = TripService::new(&state.store);
    let students_by_grade = service.paid_students_by_grade(&trip_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students_by_grade))))
}
