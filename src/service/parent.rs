//! Parent service for business logic.
//!
//! This module provides the `ParentService` for parent profiles. Profiles
//! are created during registration (or directly by an admin) and link an
//! identity provider account to the children enrolled at the school.

use crate::{
    error::AppError,
    model::{document::DocumentRequest, parent::Parent},
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for parent management.
///
/// This struct holds a reference to the record store and provides methods
/// for parent CRUD and identity-based lookup.
pub struct ParentService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> ParentService<'a> {
    /// Creates a new ParentService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `ParentService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Creates a new parent profile.
    ///
    /// # Arguments
    /// - `parent` - Parent to store
    ///
    /// # Returns
    /// - `Ok(Parent)` - Stored parent with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn create_parent(&self, mut parent: Parent) -> Result<Parent, AppError> {
        let id = self.store.create(&mut parent).await?;
        tracing::info!("Parent created successfully with ID: {id}");
        Ok(parent)
    }

    /// Retrieves all parents.
    ///
    /// # Returns
    /// - `Ok(Vec<Parent>)` - Every stored parent (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_parents(&self) -> Result<Vec<Parent>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves a parent by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Ok(Some(Parent))` - Parent found
    /// - `Ok(None)` - No parent with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Parent>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Retrieves the parent linked to an identity provider account.
    ///
    /// # Arguments
    /// - `uid` - Identity provider UID
    ///
    /// # Returns
    /// - `Ok(Some(Parent))` - Parent linked to that UID
    /// - `Ok(None)` - No parent carries that UID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_uid(&self, uid: &str) -> Result<Option<Parent>, AppError> {
        let parents: Vec<Parent> = self.store.get_by_field("uid", &uid).await?;
        Ok(parents.into_iter().next())
    }

    /// Updates an existing parent.
    ///
    /// The original creation timestamp survives when the incoming record
    /// omits it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the parent to update
    /// - `parent` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Parent)` - Updated parent
    /// - `Err(AppError::NotFound)` - No parent with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_parent(&self, id: &str, mut parent: Parent) -> Result<Parent, AppError> {
        let existing: Parent = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Parent not found with ID: {id}")))?;

        parent.parent_id = Some(id.to_string());
        if parent.created_at.is_none() {
            parent.created_at = existing.created_at;
        }

        self.store.upsert(id, &parent).await?;
        tracing::info!("Parent updated successfully: {id}");
        Ok(parent)
    }

    /// Records a student under a parent's children.
    ///
    /// Appending is idempotent, a student already on the list is not
    /// duplicated.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the parent
    /// - `student_id` - Document ID of the student to link
    ///
    /// # Returns
    /// - `Ok(Parent)` - Parent with the student on its children list
    /// - `Err(AppError::NotFound)` - No parent with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn link_child(&self, parent_id: &str, student_id: &str) -> Result<Parent, AppError> {
        let mut parent: Parent = self
            .store
            .get_by_id(parent_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Parent not found with ID: {parent_id}")))?;

        if !parent.children_ids.iter().any(|id| id == student_id) {
            parent.children_ids.push(student_id.to_string());
            self.store.upsert(parent_id, &parent).await?;
            tracing::info!("Student {student_id} linked to parent {parent_id}");
        }
        Ok(parent)
    }

    /// Submits a document request on behalf of a parent.
    ///
    /// The parent ID on the request always comes from the caller, a body
    /// carrying a different parent cannot file under someone else's name.
    /// Requests start out pending with a creation timestamp.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the requesting parent
    /// - `request` - Request details (document type, student, reason)
    ///
    /// # Returns
    /// - `Ok(DocumentRequest)` - Stored request with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn submit_document_request(
        &self,
        parent_id: &str,
        mut request: DocumentRequest,
    ) -> Result<DocumentRequest, AppError> {
        request.parent_id = Some(parent_id.to_string());
        if request.created_at.is_none() {
            request.created_at = Some(Timestamp::now());
        }

        let id = self.store.create(&mut request).await?;
        tracing::info!("Document request submitted with ID: {id}");
        Ok(request)
    }

    /// Deletes a parent.
    ///
    /// # Arguments
    /// - `id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Ok(())` - Parent removed
    /// - `Err(AppError::NotFound)` - No parent with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_parent(&self, id: &str) -> Result<(), AppError> {
        // Verify the parent exists
        let parent: Option<Parent> = self.store.get_by_id(id).await?;
        if parent.is_none() {
            return Err(AppError::NotFound(format!("Parent not found with ID: {id}")));
        }

        self.store.delete::<Parent>(id).await?;
        tracing::info!("Parent deleted successfully: {id}");
        Ok(())
    }
}
