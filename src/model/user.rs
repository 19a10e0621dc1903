use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// Profile mirror of an identity-provider account.
///
/// Stored at the account's `uid` rather than a generated id, so lookups after
/// login are a single document read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub phone_number: Option<String>,
    pub role: Option<UserRole>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
    #[serde(default = "crate::model::default_true")]
    pub active: bool,
}

impl Default for User {
    fn default() -> Self {
        Self {
            uid: String::new(),
            email: String::new(),
            full_name: String::new(),
            phone_number: None,
            role: None,
            created_at: None,
            active: true,
        }
    }
}

impl StoreRecord for User {
    const COLLECTION: &'static str = "users";

    fn id(&self) -> Option<&str> {
        if self.uid.is_empty() {
            None
        } else {
            Some(&self.uid)
        }
    }

    fn set_id(&mut self, id: String) {
        self.uid = id;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    #[default]
    Parent,
    Teacher,
}
