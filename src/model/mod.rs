//! Domain records and wire-format DTOs.
//!
//! All records serialize with camelCase field names and SCREAMING_SNAKE_CASE
//! enum values to match the documents already in the store. Timestamp fields
//! go through [`crate::util::timestamp::serde_opt`] so every accepted input
//! shape normalizes to the same UTC representation.

use serde::{Deserialize, Deserializer};

pub mod announcement;
pub mod api;
pub mod auth;
pub mod document;
pub mod meeting;
pub mod parent;
pub mod payment;
pub mod student;
pub mod trip;
pub mod user;

/// Deserializes a field that may be explicitly `null` into its default value.
///
/// Serde's `#[serde(default)]` only covers missing fields; documents written
/// by earlier clients carry explicit nulls for lists and status fields.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn default_true() -> bool {
    true
}
