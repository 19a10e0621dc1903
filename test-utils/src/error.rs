use school_manager::error::{identity::IdentityError, store::StoreError};
use thiserror::Error;

/// Errors that can occur during test setup.
///
/// Wraps the application's store and identity errors so test helpers can use
/// `?` regardless of which backend a seeding step touches.
#[derive(Error, Debug)]
pub enum TestError {
    /// Store error while seeding or reading test documents.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Identity provider error while seeding test accounts.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}
