use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// An enrolled or prospective student.
///
/// Created by a parent during registration and held in `PENDING` status until
/// an admin approves or rejects the application. `birthCertificateId` is the
/// uniqueness key guarding against duplicate registrations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub student_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    pub gender: Option<Gender>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub date_of_birth: Option<Timestamp>,
    pub birth_certificate_id: Option<String>,
    pub nationality: Option<String>,
    pub grade: Option<String>,
    pub year_of_admission: Option<i32>,
    pub previous_school: Option<String>,
    pub latest_school_report: Option<String>,
    pub parent_id: Option<String>,
    pub class_name: Option<String>,
    pub teacher: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub status: StudentStatus,
    pub rejection_reason: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub grades: Vec<Grade>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl Student {
    /// Display name assembled from the stored name parts.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

impl StoreRecord for Student {
    const COLLECTION: &'static str = "students";

    fn id(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.student_id = Some(id);
    }
}

/// A single report-card entry embedded in a student record.
///
/// Scores are free text so both letter grades and percentages fit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Grade {
    pub subject: Option<String>,
    pub score: Option<String>,
    pub term: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub date: Option<Timestamp>,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Registration review state. New students always start out `PENDING`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}
