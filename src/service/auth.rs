//! Auth service for business logic.
//!
//! This module provides the `AuthService` for registration, login, and
//! password recovery. Credentials live in the external identity provider
//! while the matching profile documents live in the record store; this
//! service keeps the two in step.

use crate::{
    error::{identity::IdentityError, AppError},
    identity::IdentityProvider,
    model::{
        auth::{LoginRequest, RegisterRequest, UserDto},
        parent::Parent,
        user::{User, UserRole},
    },
    store::RecordStore,
    util::timestamp::Timestamp,
};

/// Service providing business logic for authentication.
///
/// This struct holds references to the record store and the identity
/// provider and provides methods for the account lifecycle.
pub struct AuthService<'a> {
    pub store: &'a RecordStore,
    pub identity: &'a dyn IdentityProvider,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `store` - Reference to the record store
    /// - `identity` - Reference to the identity provider
    ///
    /// # Returns
    /// - `AuthService` - New service instance
    pub fn new(store: &'a RecordStore, identity: &'a dyn IdentityProvider) -> Self {
        Self { store, identity }
    }

    /// Registers a new user account.
    ///
    /// Creates the credential account with the identity provider first,
    /// then stores the user profile under the provider UID. Parents also
    /// get a parent profile so their children can be linked later.
    ///
    /// # Arguments
    /// - `request` - Registration details
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile of the newly registered user
    /// - `Err(AppError::BadRequest)` - Email already registered or rejected by the provider
    /// - `Err(AppError::IdentityErr)` - Identity provider unreachable
    /// - `Err(AppError::StoreErr)` - Store error while saving the profiles
    pub async fn register(&self, request: RegisterRequest) -> Result<UserDto, AppError> {
        tracing::info!("Registering user: {}", request.email);

        let account = self
            .identity
            .create_account(&request.email, &request.password, &request.full_name)
            .await
            .map_err(|err| user_facing(err, "Registration failed"))?;
        tracing::info!("Identity account created with UID: {}", account.uid);

        let user = User {
            uid: account.uid.clone(),
            email: request.email.clone(),
            full_name: request.full_name.clone(),
            phone_number: request.phone_number.clone(),
            role: Some(request.role),
            created_at: Some(Timestamp::now()),
            active: true,
        };
        self.store.upsert(&user.uid, &user).await?;
        tracing::info!("User profile saved for UID: {}", account.uid);

        let parent_id = if request.role == UserRole::Parent {
            let mut parent = Parent {
                parent_id: None,
                uid: Some(account.uid.clone()),
                full_name: request.full_name.clone(),
                email: request.email.clone(),
                phone_number: request.phone_number.clone(),
                address: request.address.clone(),
                children_ids: Vec::new(),
                created_at: Some(Timestamp::now()),
            };
            let id = self.store.create(&mut parent).await?;
            tracing::info!("Parent profile saved with ID: {id}");
            Some(id)
        } else {
            None
        };

        tracing::info!("Registration successful for: {}", request.email);
        Ok(UserDto {
            uid: account.uid,
            email: request.email,
            full_name: request.full_name,
            phone_number: request.phone_number,
            role: Some(request.role),
            parent_id,
        })
    }

    /// Authenticates a user by email and password.
    ///
    /// Every credential failure reports the same message so callers cannot
    /// probe which email addresses exist.
    ///
    /// # Arguments
    /// - `request` - Login credentials
    ///
    /// # Returns
    /// - `Ok(UserDto)` - Profile of the authenticated user
    /// - `Err(AppError::BadRequest)` - Unknown email or wrong password
    /// - `Err(AppError::IdentityErr)` - Identity provider unreachable
    /// - `Err(AppError::StoreErr)` - Store error while loading the profile
    pub async fn login(&self, request: LoginRequest) -> Result<UserDto, AppError> {
        tracing::info!("Authenticating user: {}", request.email);

        if self.identity.find_by_email(&request.email).await?.is_none() {
            tracing::warn!("Account not found for: {}", request.email);
            return Err(invalid_credentials());
        }

        let users: Vec<User> = self.store.get_by_field("email", &request.email).await?;
        let Some(user) = users.into_iter().next() else {
            tracing::warn!("User profile not found for: {}", request.email);
            return Err(invalid_credentials());
        };

        let verified = self
            .identity
            .verify_password(&request.email, &request.password)
            .await
            .unwrap_or(false);
        if !verified {
            tracing::warn!("Password verification failed for: {}", request.email);
            return Err(invalid_credentials());
        }

        let parent_id = if user.role == Some(UserRole::Parent) {
            let parents: Vec<Parent> = self.store.get_by_field("uid", &user.uid).await?;
            parents.into_iter().next().and_then(|parent| parent.parent_id)
        } else {
            None
        };

        tracing::info!("Login successful for: {}", request.email);
        Ok(UserDto {
            uid: user.uid,
            email: user.email,
            full_name: user.full_name,
            phone_number: user.phone_number,
            role: user.role,
            parent_id,
        })
    }

    /// Sends a password reset email.
    ///
    /// # Arguments
    /// - `email` - Address the reset link goes to
    ///
    /// # Returns
    /// - `Ok(())` - Reset email dispatched by the provider
    /// - `Err(AppError::BadRequest)` - No profile for that email, or the provider refused
    /// - `Err(AppError::IdentityErr)` - Identity provider unreachable
    /// - `Err(AppError::StoreErr)` - Store error during the profile lookup
    pub async fn forgot_password(&self, email: &str) -> Result<(), AppError> {
        tracing::info!("Sending password reset email to: {email}");

        let users: Vec<User> = self.store.get_by_field("email", &email).await?;
        if users.is_empty() {
            tracing::warn!("User not found: {email}");
            return Err(AppError::BadRequest(
                "No user found with this email address".to_string(),
            ));
        }

        self.identity
            .send_password_reset(email)
            .await
            .map_err(|err| user_facing(err, "Failed to send password reset email"))?;

        tracing::info!("Password reset link generated for: {email}");
        Ok(())
    }

    /// Replaces a user's password.
    ///
    /// # Arguments
    /// - `uid` - Identity provider UID
    /// - `new_password` - Replacement password
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::BadRequest)` - No account for that UID, or the provider refused
    /// - `Err(AppError::IdentityErr)` - Identity provider unreachable
    pub async fn update_password(&self, uid: &str, new_password: &str) -> Result<(), AppError> {
        tracing::info!("Updating password for user: {uid}");

        self.identity
            .update_password(uid, new_password)
            .await
            .map_err(|err| user_facing(err, "Failed to update password"))?;

        tracing::info!("Password updated successfully for user: {uid}");
        Ok(())
    }

    /// Retrieves a user profile by email.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(User)` - Stored profile
    /// - `Err(AppError::NotFound)` - No profile for that email
    /// - `Err(AppError::StoreErr)` - Store error during query
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, AppError> {
        let users: Vec<User> = self.store.get_by_field("email", &email).await?;
        users
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

fn invalid_credentials() -> AppError {
    AppError::BadRequest("Authentication failed: Invalid email or password".to_string())
}

/// Splits identity errors into user mistakes and infrastructure failures.
///
/// Account-level rejections become 400 responses with the operation's
/// message prefix; transport and decoding failures keep their identity
/// error so the response layer reports a 500.
fn user_facing(err: IdentityError, context: &str) -> AppError {
    match err {
        IdentityError::Http(_) | IdentityError::Serialize(_) | IdentityError::LockPoisoned => {
            AppError::IdentityErr(err)
        }
        other => AppError::BadRequest(format!("{context}: {other}")),
    }
}
