//! Announcement factory for creating test announcement records.
//!
//! This module provides factory methods for creating announcement records
//! with sensible defaults, reducing boilerplate in tests.

use school_manager::{
    error::store::StoreError,
    model::announcement::{Announcement, AnnouncementType},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test announcements with customizable fields.
///
/// Provides a builder pattern for creating announcement records with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::announcement::AnnouncementFactory;
///
/// let announcement = AnnouncementFactory::new(&store)
///     .title("Sports Day")
///     .announcement_type(AnnouncementType::Event)
///     .build()
///     .await?;
/// ```
pub struct AnnouncementFactory<'a> {
    store: &'a RecordStore,
    title: String,
    content: String,
    announcement_type: AnnouncementType,
    active: bool,
}

impl<'a> AnnouncementFactory<'a> {
    /// Creates a new AnnouncementFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Announcement {id}"` where id is auto-incremented
    /// - content: `"Announcement content {id}"`
    /// - announcement_type: `AnnouncementType::General`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `AnnouncementFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            title: format!("Announcement {}", id),
            content: format!("Announcement content {}", id),
            announcement_type: AnnouncementType::General,
            active: true,
        }
    }

    /// Sets the title for the announcement.
    ///
    /// # Arguments
    /// - `title` - Announcement title
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the body content for the announcement.
    ///
    /// # Arguments
    /// - `content` - Announcement body
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the type for the announcement.
    ///
    /// # Arguments
    /// - `announcement_type` - General, urgent, or event
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn announcement_type(mut self, announcement_type: AnnouncementType) -> Self {
        self.announcement_type = announcement_type;
        self
    }

    /// Sets whether the announcement is active.
    ///
    /// # Arguments
    /// - `active` - Whether the announcement is still displayed
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the announcement record into the store.
    ///
    /// # Returns
    /// - `Ok(Announcement)` - Created announcement record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Announcement, StoreError> {
        let mut announcement = Announcement {
            title: self.title,
            content: self.content,
            announcement_type: self.announcement_type,
            active: self.active,
            ..Announcement::default()
        };
        self.store.create(&mut announcement).await?;
        Ok(announcement)
    }
}

/// Creates an announcement with default values.
///
/// Shorthand for `AnnouncementFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(Announcement)` - Created announcement record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let announcement = create_announcement(&store).await?;
/// ```
pub async fn create_announcement(store: &RecordStore) -> Result<Announcement, StoreError> {
    AnnouncementFactory::new(store).build().await
}
