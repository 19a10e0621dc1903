//! Document service for business logic.
//!
//! This module provides the `DocumentService` for document metadata. Files
//! themselves live in external storage; this service tracks who uploaded
//! what, for whom, and whether an admin has verified it.

use crate::{
    error::AppError,
    model::document::{Document, DocumentType},
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for document management.
///
/// This struct holds a reference to the record store and provides methods
/// for upload bookkeeping, scoped queries, and the verification workflow.
pub struct DocumentService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> DocumentService<'a> {
    /// Creates a new DocumentService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `DocumentService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Records an uploaded document.
    ///
    /// Stamps the upload time unless the caller already supplied one.
    ///
    /// # Arguments
    /// - `document` - Document metadata to store
    ///
    /// # Returns
    /// - `Ok(Document)` - Stored document with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn upload_document(&self, mut document: Document) -> Result<Document, AppError> {
        if document.uploaded_at.is_none() {
            document.uploaded_at = Some(Timestamp::now());
        }

        let id = self.store.create(&mut document).await?;
        tracing::info!("Document uploaded successfully with ID: {id}");
        Ok(document)
    }

    /// Retrieves all documents.
    ///
    /// # Returns
    /// - `Ok(Vec<Document>)` - Every stored document (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_documents(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves a document by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID
    ///
    /// # Returns
    /// - `Ok(Some(Document))` - Document found
    /// - `Ok(None)` - No document with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_document_by_id(&self, id: &str) -> Result<Option<Document>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Retrieves all documents attached to a student.
    pub async fn find_by_student_id(&self, student_id: &str) -> Result<Vec<Document>, AppError> {
        Ok(self.store.get_by_field("studentId", &student_id).await?)
    }

    /// Retrieves all documents attached to a parent.
    pub async fn find_by_parent_id(&self, parent_id: &str) -> Result<Vec<Document>, AppError> {
        Ok(self.store.get_by_field("parentId", &parent_id).await?)
    }

    /// Retrieves all documents of one type.
    pub async fn find_by_type(&self, document_type: DocumentType) -> Result<Vec<Document>, AppError> {
        Ok(self
            .store
            .get_by_field("documentType", &document_type)
            .await?)
    }

    /// Retrieves all documents still awaiting verification.
    pub async fn find_unverified(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.store.get_by_field("verified", &false).await?)
    }

    /// Marks a document as verified.
    ///
    /// # Arguments
    /// - `id` - Document ID
    /// - `verified_by` - Admin performing the verification
    ///
    /// # Returns
    /// - `Ok(Document)` - Verified document
    /// - `Err(AppError::NotFound)` - No document with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn verify_document(&self, id: &str, verified_by: &str) -> Result<Document, AppError> {
        let mut document: Document = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document not found with ID: {id}")))?;

        document.verified = true;
        document.verified_by = Some(verified_by.to_string());
        document.verified_at = Some(Timestamp::now());

        self.store.upsert(id, &document).await?;
        tracing::info!("Document {id} verified by {verified_by}");
        Ok(document)
    }

    /// Updates an existing document.
    ///
    /// The original upload timestamp survives when the incoming record
    /// omits it.
    ///
    /// # Arguments
    /// - `id` - Document ID to update
    /// - `document` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Document)` - Updated document
    /// - `Err(AppError::NotFound)` - No document with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_document(&self, id: &str, mut document: Document) -> Result<Document, AppError> {
        let existing: Document = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Document not found with ID: {id}")))?;

        document.document_id = Some(id.to_string());
        if document.uploaded_at.is_none() {
            document.uploaded_at = existing.uploaded_at;
        }

        self.store.upsert(id, &document).await?;
        tracing::info!("Document updated successfully: {id}");
        Ok(document)
    }

    /// Deletes a document.
    ///
    /// # Arguments
    /// - `id` - Document ID
    ///
    /// # Returns
    /// - `Ok(())` - Document removed
    /// - `Err(AppError::NotFound)` - No document with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_document(&self, id: &str) -> Result<(), AppError> {
        // Verify the document exists
        let document: Option<Document> = self.store.get_by_id(id).await?;
        if document.is_none() {
            return Err(AppError::NotFound(format!("Document not found with ID: {id}")));
        }

        self.store.delete::<Document>(id).await?;
        tracing::info!("Document deleted successfully: {id}");
        Ok(())
    }
}
