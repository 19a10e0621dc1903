//! Meeting factory for creating test meeting records.
//!
//! This module provides factory methods for creating meeting records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use school_manager::{
    error::store::StoreError,
    model::meeting::{Meeting, MeetingStatus, MeetingType},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test meetings with customizable fields.
///
/// Provides a builder pattern for creating meeting records with default
/// values that can be overridden as needed for specific test scenarios.
/// Defaults describe a group meeting already on the calendar; use the
/// setters for one-on-one requests.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::meeting::MeetingFactory;
///
/// let meeting = MeetingFactory::new(&store)
///     .meeting_type(MeetingType::OneOnOne)
///     .status(MeetingStatus::Pending)
///     .parent_id("parent-1")
///     .build()
///     .await?;
/// ```
pub struct MeetingFactory<'a> {
    store: &'a RecordStore,
    title: String,
    meeting_type: Option<MeetingType>,
    status: Option<MeetingStatus>,
    parent_id: Option<String>,
    teacher_id: Option<String>,
}

impl<'a> MeetingFactory<'a> {
    /// Creates a new MeetingFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Meeting {id}"` where id is auto-incremented
    /// - meeting_type: `MeetingType::GroupMeeting`
    /// - status: `MeetingStatus::Scheduled`
    /// - parent_id, teacher_id: `None`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `MeetingFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            title: format!("Meeting {}", id),
            meeting_type: Some(MeetingType::GroupMeeting),
            status: Some(MeetingStatus::Scheduled),
            parent_id: None,
            teacher_id: None,
        }
    }

    /// Sets the title for the meeting.
    ///
    /// # Arguments
    /// - `title` - Meeting title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the type for the meeting.
    ///
    /// # Arguments
    /// - `meeting_type` - Group or one-on-one
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn meeting_type(mut self, meeting_type: MeetingType) -> Self {
        self.meeting_type = Some(meeting_type);
        self
    }

    /// Clears the meeting type entirely.
    ///
    /// Useful for modelling legacy documents written before the type field
    /// existed.
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn without_type(mut self) -> Self {
        self.meeting_type = None;
        self
    }

    /// Sets the status for the meeting.
    ///
    /// # Arguments
    /// - `status` - Meeting lifecycle status
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn status(mut self, status: MeetingStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the parent the meeting belongs to.
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

    /// Sets the teacher the meeting is with.
    ///
    /// # Arguments
    /// - `teacher_id` - Document ID of the teacher
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn teacher_id(mut self, teacher_id: impl Into<String>) -> Self {
        self.teacher_id = Some(teacher_id.into());
        self
    }

    /// Builds and inserts the meeting record into the store.
    ///
    /// # Returns
    /// - `Ok(Meeting)` - Created meeting record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Meeting, StoreError> {
        let mut meeting = Meeting {
            title: self.title,
            meeting_type: self.meeting_type,
            status: self.status,
            parent_id: self.parent_id,
            teacher_id: self.teacher_id,
            ..Meeting::default()
        };
        self.store.create(&mut meeting).await?;
        Ok(meeting)
    }
}

/// Creates a group meeting with default values.
///
/// Shorthand for `MeetingFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(Meeting)` - Created meeting record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let meeting = create_meeting(&store).await?;
/// ```
pub async fn create_meeting(store: &RecordStore) -> Result<Meeting, StoreError> {
    MeetingFactory::new(store).build().await
}
