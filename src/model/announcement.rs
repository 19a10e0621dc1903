use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// A school-wide announcement shown on parent dashboards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub announcement_id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "type", default, deserialize_with = "crate::model::null_default")]
    pub announcement_type: AnnouncementType,
    #[serde(default = "crate::model::default_true")]
    pub active: bool,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl Default for Announcement {
    fn default() -> Self {
        Self {
            announcement_id: None,
            title: String::new(),
            content: String::new(),
            announcement_type: AnnouncementType::default(),
            active: true,
            created_at: None,
        }
    }
}

impl StoreRecord for Announcement {
    const COLLECTION: &'static str = "announcements";

    fn id(&self) -> Option<&str> {
        self.announcement_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.announcement_id = Some(id);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnnouncementType {
    #[default]
    General,
    Urgent,
    Event,
}
