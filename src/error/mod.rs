//! Application error hierarchy and HTTP response mapping.
//!
//! `AppError` is the single error type handlers return. It wraps the
//! per-concern errors (config, store, identity, timestamp) and implements
//! `IntoResponse`, so every failure leaves the API as a response envelope
//! with the right status code.

pub mod config;
pub mod identity;
pub mod store;
pub mod timestamp;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::error::{
    config::ConfigError, identity::IdentityError, store::StoreError, timestamp::TimestampError,
};
use crate::model::api::ApiResponse;

/// Top-level application error.
///
/// Infrastructure errors convert in via `#[from]` and answer with a generic
/// 500 after logging; lookup misses and invalid input carry their own
/// client-facing messages.
#[derive(Error, Debug)]
pub enum AppError {
    /// Environment variable missing or unusable at startup.
    ///
    /// Results in 500 Internal Server Error; the application cannot run
    /// without its configuration.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Document store operation error.
    ///
    /// Results in 500 Internal Server Error, with the underlying cause
    /// logged server-side.
    #[error(transparent)]
    StoreErr(#[from] StoreError),

    /// Identity provider operation error.
    ///
    /// Account-level failures are translated to `BadRequest` by the auth service
    /// before they reach the response layer, so any variant arriving here is an
    /// infrastructure failure and results in 500 Internal Server Error.
    #[error(transparent)]
    IdentityErr(#[from] IdentityError),

    /// Timestamp input could not be normalized.
    ///
    /// Results in 400 Bad Request with the parse message, including the
    /// offending text and the accepted formats.
    #[error(transparent)]
    TimestampErr(#[from] TimestampError),

    /// I/O error during startup (socket bind, server loop).
    ///
    /// Results in 500 Internal Server Error if it ever reaches a handler.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A record the request addressed does not exist.
    ///
    /// Results in 404 Not Found carrying the message.
    ///
    /// # Fields
    /// - Message naming the missing record
    #[error("{0}")]
    NotFound(String),

    /// The request itself was unacceptable.
    ///
    /// Results in 400 Bad Request carrying the message.
    ///
    /// # Fields
    /// - Message explaining the rejected input
    #[error("{0}")]
    BadRequest(String),

    /// Operation not permitted for the requesting party.
    ///
    /// Results in 403 Forbidden carrying the message.
    ///
    /// # Fields
    /// - Message describing why the operation was refused
    #[error("{0}")]
    Forbidden(String),

    /// Unexpected failure with a server-side explanation.
    ///
    /// Results in 500 Internal Server Error. The message goes to the log;
    /// the client sees only the generic text.
    ///
    /// # Fields
    /// - Detail for the server-side log
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Every variant becomes a response envelope with `success: false`. Client
/// mistakes keep their message; infrastructure failures are logged in full
/// and answered with a generic message so internals never leak.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `TimestampErr` variants
/// - 403 Forbidden - For `Forbidden` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types (StoreErr, IdentityErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ApiResponse::<()>::error(msg))).into_response()
            }
            Self::Forbidden(msg) => {
                (StatusCode::FORBIDDEN, Json(ApiResponse::<()>::error(msg))).into_response()
            }
            Self::TimestampErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(err.to_string())),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::<()>::error("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper turning any displayable error into a 500 response.
///
/// Catches the variants without a specific mapping: the wrapped error is
/// logged and the client gets the generic envelope.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// The full error text lands in the log; the response body stays generic so
/// implementation details and credentials can never surface through it.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message in the envelope
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error("Internal server error")),
        )
            .into_response()
    }
}
