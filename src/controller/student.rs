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
    model::{api::ApiResponse, student::Student},
    service::student::StudentService,
    state::AppState,
};

/// Class assignment submitted when approving a student into a class.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssignment {
    pub class_name: Option<String>,
    pub teacher: Option<String>,
}

/// Reason supplied when rejecting an application.
#[derive(Debug, Deserialize)]
pub struct Rejection {
    pub reason: Option<String>,
}

/// POST /api/students - Register a new student
///
/// Stores the submitted student record. Applications start out pending
/// until an admin approves or rejects them.
///
/// # Request Body
/// JSON student record
///
/// # Returns
/// - `201 Created`: Envelope with the stored student
/// - `400 Bad Request`: A student with the same birth certificate ID already exists
pub async fn create_student(
    State(state): State<AppState>,
    Json(student): Json<Student>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let student = service.add_student(student).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            student,
            "Student created successfully",
        )),
    ))
}

/// GET /api/students - Get all students
///
/// # Returns
/// - `200 OK`: Envelope with every stored student
pub async fn get_all_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let students = service.get_all_students().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students))))
}

/// GET /api/students/pending - Get students awaiting review
///
/// # Returns
/// - `200 OK`: Envelope with all pending students
pub async fn get_pending_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let students = service.find_pending().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students))))
}

/// GET /api/students/approved - Get approved students
///
/// # Returns
/// - `200 OK`: Envelope with all approved students
pub async fn get_approved_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let students = service.find_approved().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students))))
}

/// GET /api/students/rejected - Get rejected students
///
/// # Returns
/// - `200 OK`: Envelope with all rejected students
pub async fn get_rejected_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let students = service.find_rejected().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students))))
}

/// PUT /api/students/{student_id}/approve - Approve a student application
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Envelope with the approved student
/// - `404 Not Found`: No student with that ID
pub async fn approve_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let student = service.approve_student(&student_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Student approved successfully",
        )),
    ))
}

/// PUT /api/students/{student_id}/approve-with-class - Approve and place into a class
///
/// Approves the application and records the class name and teacher in one
/// step.
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Request Body
/// - `className`: Class the student joins
/// - `teacher`: Teacher responsible for the class
///
/// # Returns
/// - `200 OK`: Envelope with the approved student
/// - `400 Bad Request`: Missing class name or teacher
/// - `404 Not Found`: No student with that ID
pub async fn approve_student_with_class(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(assignment): Json<ClassAssignment>,
) -> Result<impl IntoResponse, AppError> {
    let class_name = required(assignment.class_name.as_deref(), "Class name is required")?;
    let teacher = required(assignment.teacher.as_deref(), "Teacher name is required")?;

    let service = StudentService::new(&state.store);
    let student = service
        .approve_student_with_class(&student_id, class_name, teacher)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Student approved and assigned to class successfully",
        )),
    ))
}

/// PUT /api/students/{student_id}/reject - Reject a student application
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Request Body
/// - `reason`: Why the application was rejected
///
/// # Returns
/// - `200 OK`: Envelope with the rejected student
/// - `400 Bad Request`: Missing rejection reason
/// - `404 Not Found`: No student with that ID
pub async fn reject_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(rejection): Json<Rejection>,
) -> Result<impl IntoResponse, AppError> {
    let reason = required(rejection.reason.as_deref(), "Rejection reason is required")?;

    let service = StudentService::new(&state.store);
    let student = service.reject_student(&student_id, reason).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Student rejected successfully",
        )),
    ))
}

/// GET /api/students/parent/{parent_id} - Get students belonging to a parent
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the parent's students (empty list when none)
pub async fn get_students_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let students = service.find_by_parent_id(&parent_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(students))))
}

/// GET /api/students/{student_id} - Get a student by ID
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Envelope with the student
/// - `404 Not Found`: No student with that ID
pub async fn get_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let student = service
        .get_student_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(student))))
}

/// PUT /api/students/{student_id} - Update a student
///
/// Replaces the stored record. The original registration timestamp
/// survives the update.
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Request Body
/// JSON student record
///
/// # Returns
/// - `200 OK`: Envelope with the updated student
/// - `400 Bad Request`: New birth certificate ID already registered
/// - `404 Not Found`: No student with that ID
pub async fn update_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(student): Json<Student>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let student = service.update_student(&student_id, student).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Student updated successfully",
        )),
    ))
}

/// DELETE /api/students/{student_id} - Delete a student
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No student with that ID
pub async fn delete_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    service.delete_student(&student_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Student deleted successfully")),
    ))
}
