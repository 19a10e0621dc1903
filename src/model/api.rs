use serde::{Deserialize, Serialize};

use crate::util::timestamp::Timestamp;

/// Uniform response envelope returned by every endpoint.
///
/// `success` signals the outcome, `message` carries a human-readable note,
/// `data` holds the payload when there is one. All four fields are always
/// present on the wire; unset values serialize as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub timestamp: Option<Timestamp>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            timestamp: Some(Timestamp::now()),
        }
    }

    /// Successful response carrying a payload and a message.
    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            timestamp: Some(Timestamp::now()),
        }
    }

    /// Successful response with a message but no payload, used by deletes.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            timestamp: Some(Timestamp::now()),
        }
    }

    /// Failed response carrying an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            timestamp: Some(Timestamp::now()),
        }
    }
}
