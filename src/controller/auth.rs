use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    controller::required,
    error::AppError,
    model::{
        api::ApiResponse,
        auth::{LoginRequest, RegisterRequest, UserDto},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Body of a password reset request.
#[derive(Debug, Deserialize)]
pub struct ForgotPassword {
    pub email: Option<String>,
}

/// Body of a password change for a known account.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPassword {
    pub uid: Option<String>,
    pub new_password: Option<String>,
}

/// Query of the profile lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// POST /api/auth/register - Register a new account
///
/// Creates the identity provider account, stores the profile under the
/// account's UID, and creates a parent profile when the new user is a
/// parent.
///
/// # Request Body
/// JSON registration (email, password, fullName, phoneNumber, address, role)
///
/// # Returns
/// - `200 OK`: Envelope with the account summary
/// - `400 Bad Request`: Email already in use
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.store, state.identity.as_ref());
    let user = service.register(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            user,
            "Registration successful",
        )),
    ))
}

/// POST /api/auth/login - Authenticate an account
///
/// # Request Body
/// JSON credentials (email, password)
///
/// # Returns
/// - `200 OK`: Envelope with the account summary
/// - `400 Bad Request`: Unknown email or wrong password
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.store, state.identity.as_ref());
    let user = service.login(request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(user, "Login successful")),
    ))
}

/// POST /api/auth/forgot-password - Dispatch a password reset email
///
/// The answer never reveals whether the email is registered. Dispatch
/// failures are logged and the caller still gets the generic confirmation.
///
/// # Request Body
/// - `email`: Address to send the reset link to
///
/// # Returns
/// - `200 OK`: Generic confirmation
/// - `400 Bad Request`: Missing email
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(body): Json<ForgotPassword>,
) -> Result<impl IntoResponse, AppError> {
    let email = required(body.email.as_deref(), "Email is required")?;

    let service = AuthService::new(&state.store, state.identity.as_ref());
    if let Err(err) = service.forgot_password(email).await {
        tracing::warn!("Password reset dispatch failed: {err}");
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            "Password reset email sent",
            "If an account exists with this email, you will receive a password reset link",
        )),
    ))
}

/// POST /api/auth/reset-password - Set a new password for an account
///
/// # Request Body
/// - `uid`: Identity provider UID of the account
/// - `newPassword`: Replacement password, at least 6 characters
///
/// # Returns
/// - `200 OK`: Confirmation
/// - `400 Bad Request`: Missing UID, short password, or unknown account
pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPassword>,
) -> Result<impl IntoResponse, AppError> {
    let uid = required(body.uid.as_deref(), "User ID is required")?;
    let new_password = body
        .new_password
        .as_deref()
        .filter(|password| password.chars().count() >= 6)
        .ok_or_else(|| {
            AppError::BadRequest("Password must be at least 6 characters".to_string())
        })?;

    let service = AuthService::new(&state.store, state.identity.as_ref());
    service.update_password(uid, new_password).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_with_message(
            "Password updated successfully",
            "You can now login with your new password",
        )),
    ))
}

/// GET /api/auth/user-by-email - Look up a profile by email
///
/// Returns the account summary without the parent link, callers needing
/// the linked parent go through login.
///
/// # Query Parameters
/// - `email`: Address to look up
///
/// # Returns
/// - `200 OK`: Envelope with the account summary
/// - `400 Bad Request`: Missing email
/// - `404 Not Found`: No profile with that email
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let email = required(query.email.as_deref(), "Email is required")?;

    let service = AuthService::new(&state.store, state.identity.as_ref());
    let user = service.get_user_by_email(email).await?;

    let user = UserDto {
        uid: user.uid,
        email: user.email,
        full_name: user.full_name,
        role: user.role,
        ..Default::default()
    };

    Ok((StatusCode::OK, Json(ApiResponse::success(user))))
}
