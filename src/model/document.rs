use serde::{Deserialize, Serialize};

use crate::store::StoreRecord;
use crate::util::timestamp::Timestamp;

/// An uploaded file reference, either a storage URL or inline base64 data.
///
/// Uploads come from parents (certificates, proofs) and admins (timetables,
/// reports). Admins can mark a document `verified` after review.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_id: Option<String>,
    #[serde(default)]
    pub file_name: String,
    pub file_url: Option<String>,
    pub document_type: Option<DocumentType>,
    pub student_id: Option<String>,
    pub parent_id: Option<String>,
    pub uploaded_by: Option<String>,
    pub uploaded_by_role: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: Option<i64>,
    pub description: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub uploaded_at: Option<Timestamp>,
    #[serde(default)]
    pub verified: bool,
    pub verified_by: Option<String>,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub verified_at: Option<Timestamp>,
}

impl StoreRecord for Document {
    const COLLECTION: &'static str = "documents";

    fn id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.document_id = Some(id);
    }
}

/// A parent's request for a document the school must produce, such as a
/// transfer letter or a copy of a report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRequest {
    pub request_id: Option<String>,
    pub parent_id: Option<String>,
    pub student_id: Option<String>,
    pub document_type: Option<DocumentType>,
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_default")]
    pub status: RequestStatus,
    #[serde(default, with = "crate::util::timestamp::serde_opt")]
    pub created_at: Option<Timestamp>,
}

impl StoreRecord for DocumentRequest {
    const COLLECTION: &'static str = "documentRequests";

    fn id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.request_id = Some(id);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentType {
    Timetable,
    TransferLetter,
    Complaint,
    StudentReport,
    BirthCertificate,
    ImmunizationRecord,
    PreviousSchoolReport,
    IdDocument,
    ProofOfResidence,
    MedicalCertificate,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}
