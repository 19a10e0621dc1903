use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// A payment record for a trip registration.
///
/// Payments are simulated: completing one stamps `paidAt` and a generated
/// transaction reference, no external processor is involved.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: Option<String>,
    pub student_id: Option<String>,
    pub trip_id: Option<String>,
    pub parent_id: Option<String>,
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub status: PaymentStatus,
    pub payment_method: Option<String>,
    pub transaction_reference: Option<String>,
    pub payment_note: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub paid_at: Option<Timestamp>,
}

impl StoreRecord for Payment {
    const COLLECTION: &'static str = "payments";

    fn id(&self) -> Option<&str> {
        self.payment_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.payment_id = Some(id);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}
