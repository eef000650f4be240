use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploaded prescription record. Create-only: no mutation or deletion path
/// exists. `file_reference` points at externally hosted file storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: Uuid,
    pub patient_external_id: String,
    pub file_reference: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPrescriptionRequest {
    pub patient_external_id: String,
    pub file_reference: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PrescriptionError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<shared_database::supabase::StoreError> for PrescriptionError {
    fn from(e: shared_database::supabase::StoreError) -> Self {
        PrescriptionError::Store(e.to_string())
    }
}
