//! Document factory for creating test document records.
//!
//! This module provides factory methods for creating document metadata
//! records with sensible defaults, reducing boilerplate in tests.

use school_manager::{
    error::store::StoreError,
    model::document::{Document, DocumentType},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test documents with customizable fields.
///
/// Provides a builder pattern for creating document records with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::document::DocumentFactory;
///
/// let document = DocumentFactory::new(&store)
///     .student_id("student-1")
///     .document_type(DocumentType::BirthCertificate)
///     .verified(true)
///     .build()
///     .await?;
/// ```
pub struct DocumentFactory<'a> {
    store: &'a RecordStore,
    file_name: String,
    file_url: String,
    document_type: DocumentType,
    student_id: Option<String>,
    parent_id: Option<String>,
    verified: bool,
}

impl<'a> DocumentFactory<'a> {
    /// Creates a new DocumentFactory with default values.
    ///
    /// Defaults:
    /// - file_name: `"document-{id}.pdf"` where id is auto-incremented
    /// - file_url: `"https://files.example.com/document-{id}.pdf"`
    /// - document_type: `DocumentType::Other`
    /// - student_id, parent_id: `None`
    /// - verified: `false`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `DocumentFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            file_name: format!("document-{}.pdf", id),
            file_url: format!("https://files.example.com/document-{}.pdf", id),
            document_type: DocumentType::Other,
            student_id: None,
            parent_id: None,
            verified: false,
        }
    }

    /// Sets the file name for the document.
    ///
    /// # Arguments
    /// - `file_name` - Original file name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Sets the type for the document.
    ///
    /// # Arguments
    /// - `document_type` - Document category
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = document_type;
        self
    }

    /// Sets the student the document belongs to.
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

    /// Sets the parent the document belongs to.
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

    /// Sets whether the document has been verified.
    ///
    /// # Arguments
    /// - `verified` - Verification flag
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Builds and inserts the document record into the store.
    ///
    /// # Returns
    /// - `Ok(Document)` - Created document record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Document, StoreError> {
        let mut document = Document {
            file_name: self.file_name,
            file_url: Some(self.file_url),
            document_type: Some(self.document_type),
            student_id: self.student_id,
            parent_id: self.parent_id,
            verified: self.verified,
            ..Document::default()
        };
        self.store.create(&mut document).await?;
        Ok(document)
    }
}

/// Creates an unverified document attached to a student.
///
/// Shorthand for `DocumentFactory::new(store).student_id(student_id).build().await`.
///
/// # Arguments
/// - `store` - Record store
/// - `student_id` - Document ID of the student
///
/// # Returns
/// - `Ok(Document)` - Created document record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let document = create_document(&store, &student_id).await?;
/// ```
pub async fn create_document(
    store: &RecordStore,
    student_id: impl Into<String>,
) -> Result<Document, StoreError> {
    DocumentFactory::new(store).student_id(student_id).build().await
}
