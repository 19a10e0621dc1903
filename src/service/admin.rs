//! Admin service for business logic.
//!
//! This module provides the `AdminService` for announcements and for
//! document requests filed by parents. Both live under the admin surface
//! because only school staff manage them.

use crate::{
    error::AppError,
    model::{
        announcement::Announcement,
        document::{DocumentRequest, RequestStatus},
    },
    store::RecordStore,
};

/// Service providing business logic for the admin surface.
///
/// This struct holds a reference to the record store and provides methods
/// for announcement CRUD and document request triage.
pub struct AdminService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `AdminService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Retrieves all announcements.
    ///
    /// # Returns
    /// - `Ok(Vec<Announcement>)` - Every stored announcement (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_announcements(&self) -> Result<Vec<Announcement>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Publishes a new announcement.
    ///
    /// # Arguments
    /// - `announcement` - Announcement to store
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Stored announcement with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn create_announcement(
        &self,
        mut announcement: Announcement,
    ) -> Result<Announcement, AppError> {
        self.store.create(&mut announcement).await?;
        Ok(announcement)
    }

    /// Retrieves an announcement by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the announcement
    ///
    /// # Returns
    /// - `Ok(Some(Announcement))` - Announcement found
    /// - `Ok(None)` - No announcement with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_announcement_by_id(&self, id: &str) -> Result<Option<Announcement>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Updates an existing announcement.
    ///
    /// The original creation timestamp survives when the incoming record
    /// omits it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the announcement to update
    /// - `announcement` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Updated announcement
    /// - `Err(AppError::NotFound)` - No announcement with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_announcement(
        &self,
        id: &str,
        mut announcement: Announcement,
    ) -> Result<Announcement, AppError> {
        let existing: Announcement = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Announcement not found with ID: {id}")))?;

        announcement.announcement_id = Some(id.to_string());
        if announcement.created_at.is_none() {
            announcement.created_at = existing.created_at;
        }

        self.store.upsert(id, &announcement).await?;
        Ok(announcement)
    }

    /// Deletes an announcement.
    ///
    /// # Arguments
    /// - `id` - Document ID of the announcement
    ///
    /// # Returns
    /// - `Ok(())` - Announcement removed
    /// - `Err(AppError::NotFound)` - No announcement with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_announcement(&self, id: &str) -> Result<(), AppError> {
        // Verify the announcement exists
        let announcement: Option<Announcement> = self.store.get_by_id(id).await?;
        if announcement.is_none() {
            return Err(AppError::NotFound(format!(
                "Announcement not found with ID: {id}"
            )));
        }

        self.store.delete::<Announcement>(id).await?;
        Ok(())
    }

    /// Retrieves all document requests.
    ///
    /// # Returns
    /// - `Ok(Vec<DocumentRequest>)` - Every stored request (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_all_document_requests(&self) -> Result<Vec<DocumentRequest>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Retrieves all document requests still awaiting a decision.
    pub async fn get_pending_document_requests(&self) -> Result<Vec<DocumentRequest>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &RequestStatus::Pending)
            .await?)
    }

    /// Approves a document request.
    ///
    /// An unknown request ID is not an error here; the caller reports the
    /// approval either way and a missing request simply returns nothing.
    ///
    /// # Arguments
    /// - `id` - Document ID of the request
    ///
    /// # Returns
    /// - `Ok(Some(DocumentRequest))` - Request found and approved
    /// - `Ok(None)` - No request with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn approve_document_request(
        &self,
        id: &str,
    ) -> Result<Option<DocumentRequest>, AppError> {
        let Some(mut request) = self.store.get_by_id::<DocumentRequest>(id).await? else {
            return Ok(None);
        };

        request.status = RequestStatus::Approved;
        self.store.upsert(id, &request).await?;
        Ok(Some(request))
    }
}
