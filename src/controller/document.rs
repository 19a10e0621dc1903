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
    model::{
        api::ApiResponse,
        document::{Document, DocumentType},
    },
    service::document::DocumentService,
    state::AppState,
    util::parse::parse_enum_token,
};

/// Reviewer recorded when verifying a document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub verified_by: Option<String>,
}

/// POST /api/documents - Upload a document
///
/// Stores the document metadata. The upload timestamp is stamped when the
/// record omits it.
///
/// # Request Body
/// JSON document record
///
/// # Returns
/// - `201 Created`: Envelope with the stored document
pub async fn upload_document(
    State(state): State<AppState>,
    Json(document): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let document = service.upload_document(document).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            document,
            "Document uploaded successfully",
        )),
    ))
}

/// GET /api/documents - Get all documents
///
/// # Returns
/// - `200 OK`: Envelope with every stored document
pub async fn get_all_documents(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let documents = service.get_all_documents().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(documents))))
}

/// GET /api/documents/{document_id} - Get a document by ID
///
/// # Path Parameters
/// - `document_id`: Document ID
///
/// # Returns
/// - `200 OK`: Envelope with the document
/// - `404 Not Found`: No document with that ID
pub async fn get_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let document = service
        .get_document_by_id(&document_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Document not found".to_string()))?;

    Ok((StatusCode::OK, Json(ApiResponse::success(document))))
}

/// GET /api/documents/student/{student_id} - Get documents for a student
///
/// # Path Parameters
/// - `student_id`: Document ID of the student
///
/// # Returns
/// - `200 OK`: Envelope with the student's documents (empty list when none)
pub async fn get_documents_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let documents = service.find_by_student_id(&student_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(documents))))
}

/// GET /api/documents/parent/{parent_id} - Get documents for a parent
///
/// # Path Parameters
/// - `parent_id`: Document ID of the parent
///
/// # Returns
/// - `200 OK`: Envelope with the parent's documents (empty list when none)
pub async fn get_documents_by_parent(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let documents = service.find_by_parent_id(&parent_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(documents))))
}

/// GET /api/documents/type/{document_type} - Get documents of one type
///
/// # Path Parameters
/// - `document_type`: Document type token (`TIMETABLE`, `STUDENT_REPORT`, ...)
///
/// # Returns
/// - `200 OK`: Envelope with the matching documents
/// - `400 Bad Request`: Unknown document type token
pub async fn get_documents_by_type(
    State(state): State<AppState>,
    Path(document_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let document_type: DocumentType = parse_enum_token(&document_type)
        .ok_or_else(|| AppError::BadRequest("Invalid document type".to_string()))?;

    let service = DocumentService::new(&state.store);
    let documents = service.find_by_type(document_type).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(documents))))
}

/// GET /api/documents/unverified - Get documents awaiting verification
///
/// # Returns
/// - `200 OK`: Envelope with all unverified documents
pub async fn get_unverified_documents(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let documents = service.find_unverified().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(documents))))
}

/// PUT /api/documents/{document_id}/verify - Mark a document verified
///
/// # Path Parameters
/// - `document_id`: Document ID
///
/// # Request Body
/// - `verifiedBy`: Admin performing the verification
///
/// # Returns
/// - `200 OK`: Envelope with the verified document
/// - `400 Bad Request`: Missing verifier
/// - `404 Not Found`: No document with that ID
pub async fn verify_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    Json(verification): Json<Verification>,
) -> Result<impl IntoResponse, AppError> {
    let verified_by = required(
        verification.verified_by.as_deref(),
        "verifiedBy field is required",
    )?;

    let service = DocumentService::new(&state.store);
    let document = service.verify_document(&document_id, verified_by).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            document,
            "Document verified successfully",
        )),
    ))
}

/// PUT /api/documents/{document_id} - Update a document
///
/// Replaces the stored record. The original upload timestamp survives when
/// the replacement omits it.
///
/// # Path Parameters
/// - `document_id`: Document ID
///
/// # Request Body
/// JSON document record
///
/// # Returns
/// - `200 OK`: Envelope with the updated document
/// - `404 Not Found`: No document with that ID
pub async fn update_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
    Json(document): Json<Document>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    let document = service.update_document(&document_id, document).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            document,
            "Document updated successfully",
        )),
    ))
}

/// DELETE /api/documents/{document_id} - Delete a document
///
/// # Path Parameters
/// - `document_id`: Document ID
///
/// # Returns
/// - `200 OK`: Confirmation message
/// - `404 Not Found`: No document with that ID
pub async fn delete_document(
    State(state): State<AppState>,
    Path(document_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = DocumentService::new(&state.store);
    service.delete_document(&document_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::<()>::message("Document deleted successfully")),
    ))
}
