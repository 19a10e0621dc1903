//! HTTP request handlers.
//!
//! Each submodule maps to one section of the `/api` surface. Handlers pull
//! the record store and identity provider out of [`AppState`], delegate to
//! the matching service, and wrap results in the
//! [`ApiResponse`](crate::model::api::ApiResponse) envelope. Validation of
//! required request fields happens here; everything behind a valid request
//! belongs to the service layer.
//!
//! [`AppState`]: crate::state::AppState

use crate::error::AppError;

pub mod admin;
pub mod auth;
pub mod diagnostics;
pub mod document;
pub mod meeting;
pub mod parent;
pub mod payment;
pub mod student;
pub mod trip;

/// Rejects a missing or blank request field with the given message.
pub(crate) fn required<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, AppError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
