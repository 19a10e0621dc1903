//! Managed authentication provider seam.
//!
//! Account credentials never touch the store; they live with the hosted
//! identity provider. [`IdentityProvider`] is the narrow surface the auth
//! service needs: [`RestIdentity`](rest::RestIdentity) talks to the real
//! provider, [`MemoryIdentity`](memory::MemoryIdentity) backs the tests.

use async_trait::async_trait;

use crate::error::identity::IdentityError;

pub mod memory;
pub mod rest;

/// An account held by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityAccount {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

/// Operations the auth flows need from the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Creates an account and returns it with its provider-assigned uid.
    ///
    /// # Returns
    /// - `Ok(IdentityAccount)` - The created account
    /// - `Err(IdentityError::EmailExists)` - The email is already registered
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<IdentityAccount, IdentityError>;

    /// Looks up an account by email.
    ///
    /// # Returns
    /// - `Ok(Some(IdentityAccount))` - The account
    /// - `Ok(None)` - No account registered under that email
    async fn find_by_email(&self, email: &str) -> Result<Option<IdentityAccount>, IdentityError>;

    /// Checks a password against the stored credentials.
    ///
    /// Wrong credentials and unknown accounts both report `false`; only
    /// transport failures surface as errors.
    async fn verify_password(&self, email: &str, password: &str) -> Result<bool, IdentityError>;

    /// Replaces the account's password.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(IdentityError::AccountNotFound)` - No account with that uid
    async fn update_password(&self, uid: &str, new_password: &str) -> Result<(), IdentityError>;

    /// Asks the provider to send a password-reset email.
    ///
    /// # Returns
    /// - `Ok(())` - Reset email queued
    /// - `Err(IdentityError::AccountNotFound)` - No account with that email
    async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError>;
}
