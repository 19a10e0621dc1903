use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{api::ApiResponse, document::DocumentRequest, parent::Parent, student::Student},
    service::{parent::ParentService, student::StudentService},
    state::AppState,
};

/// POST /api/parents - Create a parent profile
///
/// # Request Body
/// JSON parent record
///
/// # Returns
/// - `201 Created`: Envelope with the stored parent
pub async fn create_parent(
    State(state): State<AppState>,
    Json(parent): Json<Parent>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    let parent = service.create_parent(parent).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            parent,
            "Parent created successfully",
        )),
    ))
}

/// GET /api/parents - Get all parents
///
/// # Returns
/// - `200 OK`: Envelope with every stored parent
pub async fn get_all_parents(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    let parents = service.get_all_parents().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(parents))))
}

/// GET /api/parents/{parent_id} - Get a parent by ID
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the parent
/// - `404 Not Found`: No parent with that ID
pub async fn get_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    let parent = service
        .find_by_id(&parent_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parent not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(parent))))
}

/// PUT /api/parents/{parent_id} - Update a parent
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Request Body
/// JSON parent record
///
/// # Returns
/// - `200 OK`: Envelope with the updated parent
/// - `404 Not Found`: No parent with that ID
pub async fn update_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
    Json(parent): Json<Parent>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    let parent = service.update_parent(&parent_id, parent).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            parent,
            "Parent updated successfully",
        )),
    ))
}

/// DELETE /api/parents/{parent_id} - Delete a parent
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No parent with that ID
pub async fn delete_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    service.delete_parent(&parent_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Parent deleted successfully")),
    ))
}

/// POST /api/parents/{parent_id}/children - Add a child under a parent
///
/// Stores the student with the parent's ID forced onto the record, then
/// links the new student on the parent's children list.
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Request Body
/// JSON student record
///
/// # Returns
/// - `200 OK`: Envelope with the stored student
/// - `400 Bad Request`: A student with the same birth certificate ID already exists
/// - `404 Not Found`: No parent with that ID
pub async fn add_child(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
    Json(mut student): Json<Student>,
) -> Result<impl IntoResponse, AppError> {
    let parents = ParentService::new(&state.store);
    parents
        .find_by_id(&parent_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Parent not found".to_string()))?;

    student.parent_id = Some(parent_id.clone());
    let student = StudentService::new(&state.store).add_student(student).await?;

    if let Some(student_id) = student.student_id.as_deref() {
        parents.link_child(&parent_id, student_id).await?;
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Child added successfully",
        )),
    ))
}

/// GET /api/parents/{parent_id}/children - Get a parent's children
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the parent's students (empty list when none)
pub async fn get_children(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let children = service.find_by_parent_id(&parent_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(children))))
}

/// PUT /api/parents/{parent_id}/children/{student_id} - Update a child's record
///
/// Parents can only touch students linked to them. The parent ID on the
/// stored record never changes through this route.
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
/// - `student_id`: Document ID of the student
///
/// # Request Body
/// JSON student record
///
/// # Returns
/// - `200 OK`: Envelope with the updated student
/// - `403 Forbidden`: Student belongs to a different parent
/// - `404 Not Found`: No student with that ID
pub async fn update_child(
    State(state): State<AppState>,
    Path((parent_id, student_id)): Path<(String, String)>,
    Json(mut student): Json<Student>,
) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.store);
    let existing = service
        .get_student_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    if existing.parent_id.as_deref() != Some(parent_id.as_str()) {
        return Err(AppError::Forbidden(
            "You can only update your own children's data".to_string(),
        ));
    }

    student.parent_id = Some(parent_id);
    let student = service.update_student(&student_id, student).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            student,
            "Child data updated successfully",
        )),
    ))
}

/// POST /api/parents/{parent_id}/document-requests - Submit a document request
///
/// Files a request for a document the school must produce. The request is
/// always recorded under the parent from the path.
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Request Body
/// JSON document request (document type, student, reason)
///
/// # Returns
/// - `200 OK`: Envelope with the stored request
pub async fn request_document(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
    Json(request): Json<DocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = ParentService::new(&state.store);
    let request = service.submit_document_request(&parent_id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            request,
            "Document request submitted",
        )),
    ))
}
