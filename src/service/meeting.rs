//! Meeting service for business logic.
//!
//! This module provides the `MeetingService` for parent-teacher meetings.
//! Group meetings are visible to every parent while one-on-one requests go
//! through a pending, approved, rejected workflow before they appear on a
//! parent's calendar.

use crate::{
    error::AppError,
    model::meeting::{Meeting, MeetingStatus, MeetingType, OneOnOneMeetingRequest},
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for meeting management.
///
/// This struct holds a reference to the record store and provides methods
/// for scheduling meetings, handling one-on-one requests, and the approval
/// workflow.
pub struct MeetingService<'a> {
    pub store: &'a RecordStore,
}

impl<'a> MeetingService<'a> {
    /// Creates a new MeetingService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    ///
    /// # Returns
    /// - `MeetingService` - New service instance
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Retrieves all meetings.
    ///
    /// # Returns
    /// - `Ok(Vec<Meeting>)` - Every stored meeting (empty if none exist)
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_all(&self) -> Result<Vec<Meeting>, AppError> {
        Ok(self.store.get_all().await?)
    }

    /// Creates a new meeting.
    ///
    /// A meeting without an explicit status lands directly on the calendar
    /// as scheduled; one-on-one requests set pending themselves before
    /// calling in here.
    ///
    /// # Arguments
    /// - `meeting` - Meeting to store
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Stored meeting with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn create_meeting(&self, mut meeting: Meeting) -> Result<Meeting, AppError> {
        tracing::info!("Creating meeting: {}", meeting.title);

        if meeting.status.is_none() {
            meeting.status = Some(MeetingStatus::Scheduled);
        }
        if meeting.created_at.is_none() {
            meeting.created_at = Some(Timestamp::now());
        }

        let id = self.store.create(&mut meeting).await?;
        tracing::info!("Meeting created successfully with ID: {id}");
        Ok(meeting)
    }

    /// Files a one-on-one meeting request on behalf of a parent.
    ///
    /// The request starts its life pending so an admin can approve or
    /// reject it before the teacher's calendar fills up.
    ///
    /// # Arguments
    /// - `request` - Parent, teacher, and topic details
    /// - `scheduled_time` - Proposed meeting time, already parsed
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Stored request with its generated ID
    /// - `Err(AppError::StoreErr)` - Store error during write
    pub async fn request_one_on_one(
        &self,
        request: OneOnOneMeetingRequest,
        scheduled_time: Option<Timestamp>,
    ) -> Result<Meeting, AppError> {
        tracing::info!(
            "Requesting one-on-one meeting between parent {:?} and teacher {:?}",
            request.parent_id,
            request.teacher_id
        );

        let meeting = Meeting {
            title: request.title.unwrap_or_default(),
            description: request.description,
            scheduled_time,
            teacher_id: request.teacher_id,
            teacher_name: request.teacher_name,
            parent_id: request.parent_id,
            parent_name: request.parent_name,
            meeting_type: Some(MeetingType::OneOnOne),
            status: Some(MeetingStatus::Pending),
            created_at: Some(Timestamp::now()),
            ..Meeting::default()
        };

        self.create_meeting(meeting).await
    }

    /// Retrieves the meetings visible to one parent.
    ///
    /// Group meetings reach every parent. One-on-one meetings are private
    /// and only show up for the parent they belong to; meetings without a
    /// type are skipped.
    ///
    /// # Arguments
    /// - `parent_id` - Document ID of the parent
    ///
    /// # Returns
    /// - `Ok(Vec<Meeting>)` - Group meetings plus the parent's own one-on-ones
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_parent_id(&self, parent_id: &str) -> Result<Vec<Meeting>, AppError> {
        let meetings: Vec<Meeting> = self.store.get_all().await?;

        let visible = meetings
            .into_iter()
            .filter(|meeting| match meeting.meeting_type {
                Some(MeetingType::GroupMeeting) => true,
                Some(MeetingType::OneOnOne) => meeting.parent_id.as_deref() == Some(parent_id),
                None => false,
            })
            .collect();

        Ok(visible)
    }

    /// Retrieves a meeting by ID.
    ///
    /// # Arguments
    /// - `id` - Document ID of the meeting
    ///
    /// # Returns
    /// - `Ok(Some(Meeting))` - Meeting found
    /// - `Ok(None)` - No meeting with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Meeting>, AppError> {
        Ok(self.store.get_by_id(id).await?)
    }

    /// Updates an existing meeting.
    ///
    /// The original creation timestamp survives when the incoming record
    /// omits it.
    ///
    /// # Arguments
    /// - `id` - Document ID of the meeting to update
    /// - `meeting` - Replacement record
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Updated meeting
    /// - `Err(AppError::NotFound)` - No meeting with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn update_meeting(&self, id: &str, mut meeting: Meeting) -> Result<Meeting, AppError> {
        let existing: Meeting = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting not found with ID: {id}")))?;

        meeting.meeting_id = Some(id.to_string());
        if meeting.created_at.is_none() {
            meeting.created_at = existing.created_at;
        }

        self.store.upsert(id, &meeting).await?;
        tracing::info!("Meeting updated successfully: {id}");
        Ok(meeting)
    }

    /// Deletes a meeting.
    ///
    /// # Arguments
    /// - `id` - Document ID of the meeting
    ///
    /// # Returns
    /// - `Ok(())` - Meeting removed
    /// - `Err(AppError::NotFound)` - No meeting with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or delete
    pub async fn delete_meeting(&self, id: &str) -> Result<(), AppError> {
        // Verify the meeting exists
        let meeting: Option<Meeting> = self.store.get_by_id(id).await?;
        if meeting.is_none() {
            return Err(AppError::NotFound(format!("Meeting not found with ID: {id}")));
        }

        self.store.delete::<Meeting>(id).await?;
        tracing::info!("Meeting deleted successfully: {id}");
        Ok(())
    }

    /// Retrieves all one-on-one requests still awaiting a decision.
    pub async fn find_pending(&self) -> Result<Vec<Meeting>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &MeetingStatus::Pending)
            .await?)
    }

    /// Retrieves all approved meetings.
    pub async fn find_approved(&self) -> Result<Vec<Meeting>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &MeetingStatus::Approved)
            .await?)
    }

    /// Retrieves all rejected meeting requests.
    pub async fn find_rejected(&self) -> Result<Vec<Meeting>, AppError> {
        Ok(self
            .store
            .get_by_field("status", &MeetingStatus::Rejected)
            .await?)
    }

    /// Approves a pending meeting request.
    ///
    /// Clears any earlier rejection reason so the record reflects only the
    /// final decision.
    ///
    /// # Arguments
    /// - `id` - Document ID of the meeting
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Approved meeting
    /// - `Err(AppError::NotFound)` - No meeting with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn approve_meeting(&self, id: &str) -> Result<Meeting, AppError> {
        let mut meeting: Meeting = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting not found with ID: {id}")))?;

        meeting.status = Some(MeetingStatus::Approved);
        meeting.rejection_reason = None;
        self.store.upsert(id, &meeting).await?;
        tracing::info!("Meeting {id} approved");
        Ok(meeting)
    }

    /// Rejects a pending meeting request.
    ///
    /// # Arguments
    /// - `id` - Document ID of the meeting
    /// - `reason` - Reason communicated back to the parent
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Rejected meeting
    /// - `Err(AppError::NotFound)` - No meeting with that ID
    /// - `Err(AppError::StoreErr)` - Store error during query or write
    pub async fn reject_meeting(&self, id: &str, reason: &str) -> Result<Meeting, AppError> {
        let mut meeting: Meeting = self
            .store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Meeting not found with ID: {id}")))?;

        meeting.status = Some(MeetingStatus::Rejected);
        meeting.rejection_reason = Some(reason.to_string());
        self.store.upsert(id, &meeting).await?;
        tracing::info!("Meeting {id} rejected");
        Ok(meeting)
    }
}
