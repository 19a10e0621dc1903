//! Parent factory for creating test parent records.
//!
//! This module provides factory methods for creating parent records with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use school_manager::{error::store::StoreError, model::parent::Parent, store::RecordStore};

use crate::factory::helpers::next_id;

/// Factory for creating test parents with customizable fields.
///
/// Provides a builder pattern for creating parent records with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::parent::ParentFactory;
///
/// let parent = ParentFactory::new(&store)
///     .full_name("Thandi Mokoena")
///     .uid("identity-uid-1")
///     .build()
///     .await?;
/// ```
pub struct ParentFactory<'a> {
    store: &'a RecordStore,
    full_name: String,
    email: String,
    uid: Option<String>,
    children_ids: Vec<String>,
}

impl<'a> ParentFactory<'a> {
    /// Creates a new ParentFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"Parent {id}"` where id is auto-incremented
    /// - email: `"parent{id}@example.com"`
    /// - uid: `None`
    /// - children_ids: empty
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `ParentFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            full_name: format!("Parent {}", id),
            email: format!("parent{}@example.com", id),
            uid: None,
            children_ids: Vec::new(),
        }
    }

    /// Sets the full name for the parent.
    ///
    /// # Arguments
    /// - `full_name` - Display name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    /// Sets the email address for the parent.
    ///
    /// # Arguments
    /// - `email` - Email address
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the identity provider UID for the parent.
    ///
    /// # Arguments
    /// - `uid` - Identity provider UID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Adds a child to the parent's linked children.
    ///
    /// # Arguments
    /// - `student_id` - Document ID of the child
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn child(mut self, student_id: impl Into<String>) -> Self {
        self.children_ids.push(student_id.into());
        self
    }

    /// Builds and inserts the parent record into the store.
    ///
    /// # Returns
    /// - `Ok(Parent)` - Created parent record
    /// - `Err(StoreError)` - Store error during insert
    pub async fn build(self) -> Result<Parent, StoreError> {
        let mut parent = Parent {
            full_name: self.full_name,
            email: self.email,
            uid: self.uid,
            children_ids: self.children_ids,
            ..Parent::default()
        };
        self.store.create(&mut parent).await?;
        Ok(parent)
    }
}

/// Creates a parent with default values.
///
/// Shorthand for `ParentFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(Parent)` - Created parent record
/// - `Err(StoreError)` - Store error during insert
///
/// # Example
///
/// ```rust,ignore
/// let parent = create_parent(&store).await?;
/// ```
pub async fn create_parent(store: &RecordStore) -> Result<Parent, StoreError> {
    ParentFactory::new(store).build().await
}
