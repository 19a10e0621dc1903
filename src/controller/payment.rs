use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    controller::required,
    error::AppError,
    model::{
        api::ApiResponse,
        payment::{Payment, PaymentStatus},
    },
    service::payment::PaymentService,
    state::AppState,
    util::parse::parse_enum_token,
};

/// Status token submitted when moving a payment through its lifecycle.
#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: Option<String>,
}

/// POST /api/payments/mock - Record a mock payment
///
/// Books a payment without talking to a real gateway. Missing fields get
/// filled in: a generated transaction reference, a payment date, and the
/// completed status.
///
/// # Request Body
/// JSON payment record
///
/// # Returns
/// - `201 Created`: Envelope with the stored payment
pub async fn create_mock_payment(
    State(state): State<AppState>,
    Json(payment): Json<Payment>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payment = service.create_mock_payment(payment).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            payment,
            "Payment processed successfully",
        )),
    ))
}

/// GET /api/payments - Get all payments
///
/// # Returns
/// - `200 OK`: Envelope with every stored payment
pub async fn get_all_payments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payments = service.get_all_payments().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}

/// GET /api/payments/{payment_id} - Get a payment by ID
///
/// # Path Parameters
/// - `payment_id`: Document ID of the payment
///
/// # Returns
/// - `200 OK`: Envelope with the payment
/// - `404 Not Found`: No payment with that ID
pub async fn get_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payment = service
        .get_payment_by_id(&payment_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Payment not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payment))))
}

/// GET /api/payments/student/{student_id} - Get payments for a student
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Envelope with the student's payments (empty list when none)
pub async fn get_payments_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payments = service.find_by_student_id(&student_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}

/// GET /api/payments/parent/{parent_id} - Get payments made by a parent
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the parent's payments (empty list when none)
pub async fn get_payments_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payments = service.find_by_parent_id(&parent_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}

/// GET /api/payments/trip/{trip_id} - Get payments for a trip
///
/// # Path Parameters
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope with the trip's payments (empty list when none)
pub async fn get_payments_by_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payments = service.find_by_trip_id(&trip_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}

/// GET /api/payments/status/{status} - Get payments in a given status
///
/// # Path Parameters
/// - `status`: Payment status token (`PENDING`, `COMPLETED`, `FAILED`, `REFUNDED`)
///
/// # Returns
/// - `200 OK`: Envelope with the matching payments
/// - `400 Bad Request`: Unknown status token
pub async fn get_payments_by_status(
    State(state): State<AppState>,
    Path(status): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let status: PaymentStatus = parse_enum_token(&status)
        .ok_or_else(|| AppError::BadRequest("Invalid payment status".to_string()))?;

    let service = PaymentService::new(&state.store);
    let payments = service.find_by_status(status).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(payments))))
}

/// GET /api/payments/check/{student_id}/{trip_id} - Check whether a student paid
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
/// - `trip_id`: Document ID of the trip
///
/// # Returns
/// - `200 OK`: Envelope with `{"hasPaid": bool}`
pub async fn check_payment(
    State(state): State<AppState>,
    Path((student_id, trip_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let has_paid = service.has_student_paid_for_trip(&student_id, &trip_id).await;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(json!({ "hasPaid": has_paid }))),
    ))
}

/// PUT /api/payments/{payment_id}/status - Move a payment to a new status
///
/// # Path Parameters
/// - `payment_id`: Document ID of the payment
///
/// # Request Body
/// - `status`: New status token
///
/// # Returns
/// - `200 OK`: Envelope with the updated payment
/// - `400 Bad Request`: Missing or unknown status token
/// - `404 Not Found`: No payment with that ID
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Json(change): Json<StatusChange>,
) -> Result<impl IntoResponse, AppError> {
    let token = required(change.status.as_deref(), "status field is required")?;
    let status: PaymentStatus = parse_enum_token(token)
        .ok_or_else(|| AppError::BadRequest("Invalid payment status".to_string()))?;

    let service = PaymentService::new(&state.store);
    let payment = service.update_payment_status(&payment_id, status).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            payment,
            "Payment status updated successfully",
        )),
    ))
}

/// PUT /api/payments/{payment_id} - Update a payment
///
/// # Path Parameters
/// - `payment_id`: Document ID of the payment
///
/// # Request Body
/// JSON payment record
///
/// # Returns
/// - `200 OK`: Envelope with the updated payment
/// - `404 Not Found`: No payment with that ID
pub async fn update_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Json(payment): Json<Payment>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    let payment = service.update_payment(&payment_id, payment).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            payment,
            "Payment updated successfully",
        )),
    ))
}

/// DELETE /api/payments/{payment_id} - Delete a payment
///
/// # Path Parameters
/// - `payment_id`: Document ID of the payment
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No payment with that ID
pub async fn delete_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PaymentService::new(&state.store);
    service.delete_payment(&payment_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Payment deleted successfully")),
    ))
}
