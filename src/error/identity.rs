use thiserror::Error;

/// Errors produced by the identity provider.
///
/// Account-level variants (`EmailExists`, `AccountNotFound`, `InvalidCredentials`)
/// are mapped to user-facing 400 responses by the auth service with operation
/// specific messages. The remaining variants indicate infrastructure failures and
/// fall through to a generic 500 response.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// An account already exists for the requested email address.
    #[error("Email address already in use")]
    EmailExists,

    /// No account exists for the given email or uid.
    #[error("No account found")]
    AccountNotFound,

    /// The supplied credentials were rejected by the provider.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The provider rejected the request with an unrecognized error code.
    #[error("Identity provider rejected the request: {code}")]
    Provider { code: String },

    /// HTTP transport error while talking to the identity provider.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Provider response could not be decoded.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// In-memory provider lock was poisoned by a panicking writer.
    #[error("Identity store lock poisoned")]
    LockPoisoned,
}
