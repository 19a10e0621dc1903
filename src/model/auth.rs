use serde::{Deserialize, Serialize};

use crate::model::user::UserRole;

/// Body of `POST /api/auth/register`.
///
/// Registering defaults to a parent account; admins are provisioned out of
/// band.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub full_name: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Account summary returned by the auth endpoints.
///
/// Carries the linked `parentId` when a parent profile exists for the
/// account, so clients can jump straight to the parent's resources.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub uid: String,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub role: Option<UserRole>,
    pub parent_id: Option<String>,
}
