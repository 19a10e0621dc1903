use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// A parent or guardian account profile.
///
/// `uid` links the profile to its identity-provider account; `childrenIds`
/// lists the student records this parent manages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub parent_id: Option<String>,
    pub uid: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub children_ids: Vec<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl StoreRecord for Parent {
    const COLLECTION: &'static str = "parents";

    fn id(&self) -> Option<&str> {
        self.parent_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.parent_id = Some(id);
    }
}
