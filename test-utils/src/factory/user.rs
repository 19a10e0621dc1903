//! User factory for creating test user profile records.
//!
//! This module provides factory methods for creating user profiles with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use school_manager::{
    error::store::StoreError,
    model::user::{User, UserRole},
    store::RecordStore,
};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user profiles with default values
/// that can be overridden as needed for specific test scenarios. Profiles are
/// stored under their identity provider UID, matching how registration writes
/// them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&store)
///     .uid("identity-uid-1")
///     .email("thandi@example.com")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    store: &'a RecordStore,
    uid: String,
    email: String,
    full_name: String,
    role: UserRole,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - uid: `"uid-{id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - full_name: `"User {id}"`
    /// - role: `UserRole::Parent`
    ///
    /// # Arguments
    /// - `store` - Record store for inserting the record
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(store: &'a RecordStore) -> Self {
        let id = next_id();
        Self {
            store,
            uid: format!("uid-{}", id),
            email: format!("user{}@example.com", id),
            full_name: format!("User {}", id),
            role: UserRole::Parent,
        }
    }

    /// Sets the identity provider UID for the user.
    ///
    /// # Arguments
    /// - `uid` - Identity provider UID
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Sets the email address for the user.
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

    /// Sets the full name for the user.
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

    /// Sets the role for the user.
    ///
    /// # Arguments
    /// - `role` - Application role
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Builds the user profile and stores it under its UID.
    ///
    /// # Returns
    /// - `Ok(User)` - Created user profile
    /// - `Err(StoreError)` - Store error during upsert
    pub async fn build(self) -> Result<User, StoreError> {
        let user = User {
            uid: self.uid,
            email: self.email,
            full_name: self.full_name,
            role: Some(self.role),
            ..User::default()
        };
        self.store.upsert(&user.uid, &user).await?;
        Ok(user)
    }
}

/// Creates a parent-role user with default values.
///
/// Shorthand for `UserFactory::new(store).build().await`.
///
/// # Arguments
/// - `store` - Record store
///
/// # Returns
/// - `Ok(User)` - Created user profile
/// - `Err(StoreError)` - Store error during upsert
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&store).await?;
/// ```
pub async fn create_user(store: &RecordStore) -> Result<User, StoreError> {
    UserFactory::new(store).build().await
}
