//! Document request factory for creating test document request records.
//!
//! This module provides factory methods for creating document request
//! records with sensible defaults, reducing boilerplate in tests.

use school_manager::{
    error::store::StoreError,
    model::document::{DocumentRequest, DocumentType, RequestStatus},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test document requests with customizable fields.
///
/// Provides a builder pattern for creating document request records with
/// default values that can be overridden as needed for specific test
/// scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::document_request::DocumentRequestFactory;
///
/// let request = DocumentRequestFactory::new(&store)
///     .parent_id("parent-1")
///     .document_type(DocumentType::StudentReport)
///     .status(RequestStatus::Approved)
///     .build()
///     .await?;
/// ```
pub struct DocumentRequestFactory<'a> {
    store: &'a RecordStore,
    parent_id: Option<String>,
    student_id: Option<String>,
    document_type: DocumentType,
    reason: String,
    status: RequestStatus,
}

impl<'a> DocumentRequestFactory<'a> {
    /// Creates a new DocumentRequestFactory with default values.
    ///
    /// Defaults:
    /// - parent_id, student_id: `None`
    /// - document_type: `DocumentType::StudentReport`
    /// - reason: `"Request reason {id}"` where id is auto-incremented
    /// - status: `RequestStatus::Pending`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `DocumentRequestFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            parent_id: None,
            student_id: None,
            document_type: DocumentType::StudentReport,
            reason: format!("Request reason {}", id),
            status: RequestStatus::Pending,
        }
    }

    /// Sets the parent filing the request.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets the student the request concerns.
    ///
    /// # Arguments
    /// - `student_id` - Document ID of the student
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn student_id(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    /// Sets the requested document type.
    ///
    /// # Arguments
    /// - `document_type` - Document category being requested
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    /// Sets the status for the request.
    ///
    /// # Arguments
    /// - `status` - Request triage status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the document request record into the store.
    ///
    /// # Returns
    /// - `Ok(DocumentRequest)` - Created request record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<DocumentRequest, StoreError> {
        let mut request = DocumentRequest {
            parent_id: self.parent_id,
            student_id: self.student_id,
            document_type: Some(self.document_type),
            reason: Some(self.reason),
            status: self.status,
            ..DocumentRequest::default()
        };
        self.store.create(&mut request).await?;
        Ok(request)
    }
}

/// Creates a pending document request filed by a parent.
///
/// Shorthand for `DocumentRequestFactory::new(store).parent_id(parent_id).build().await`.
///
/// # Arguments
/// - `store` - Record store
/// - `parent_id` - Document ID of the parent
///
/// # Returns
/// - `Ok(DocumentRequest)` - Created request record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let request = create_document_request(&store, &parent_id).await?;
/// ```
pub async fn create_document_request(
    store: &RecordStore,
    parent_id: impl Into<String>,
) -> Result<DocumentRequest, StoreError> {
    DocumentRequestFactory::new(store)
        .parent_id(parent_id)
        .build()
        .await
}
