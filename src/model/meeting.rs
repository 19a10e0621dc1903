use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// A scheduled or requested parent-teacher meeting.
///
/// Group meetings are created by admins and visible to every parent.
/// One-on-one meetings are requested by a parent, start out `PENDING`, and
/// only become visible once an admin approves them. `type` and `status` stay
/// `Option` because the service layer decides their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meeting {
    pub meeting_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub scheduled_time: Option<Timestamp>,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
    pub parent_id: Option<String>,
    pub parent_name: Option<String>,
    #[serde(rename = "type")]
    pub meeting_type: Option<MeetingType>,
    pub status: Option<MeetingStatus>,
    pub rejection_reason: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl StoreRecord for Meeting {
    const COLLECTION: &'static str = "meetings";

    fn id(&self) -> Option<&str> {
        self.meeting_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.meeting_id = Some(id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    GroupMeeting,
    OneOnOne,
}

/// Meeting lifecycle state. `SCHEDULED` is a legacy alias kept for documents
/// written before the approval flow existed; treat it like `APPROVED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingStatus {
    Pending,
    Approved,
    Rejected,
    Scheduled,
    Completed,
    Cancelled,
}

/// Body of a parent's one-on-one meeting request.
///
/// `scheduledTime` arrives as raw text from a `datetime-local` picker and is
/// parsed with the school's local timezone before the meeting is stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOnOneMeetingRequest {
    pub parent_id: Option<String>,
    pub teacher_id: Option<String>,
    pub teacher_name: Option<String>,
    pub parent_name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub scheduled_time: Option<String>,
}
