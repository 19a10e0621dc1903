use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// A school trip parents can register their children for.
///
/// `registeredStudents` stays `Option` so an update body that omits the field
/// can be told apart from one that clears it; the trip service preserves the
/// existing list in that case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub trip_id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub image_url: Option<String>,
    pub price: Option<f64>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub trip_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub eligible_grades: Vec<String>,
    pub registered_students: Option<Vec<String>>,
    #[serde(default = "crate::model::default_true")]
    pub active: bool,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl Default for Trip {
    fn default() -> Self {
        Self {
            trip_id: None,
            title: String::new(),
            description: None,
            destination: None,
            image_url: None,
            price: None,
            trip_date: None,
            eligible_grades: Vec::new(),
            registered_students: None,
            active: true,
            created_at: None,
        }
    }
}

impl StoreRecord for Trip {
    const COLLECTION: &'static str = "trips";

    fn id(&self) -> Option<&str> {
        self.trip_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.trip_id = Some(id);
    }
}
