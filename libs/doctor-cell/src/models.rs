use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Doctor directory entry. Created by an administrative insert and read-only
/// from every patient-facing flow. `specialties` is free text searched by
/// substring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialties: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialties: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,

    #[error("Invalid doctor id: {0}")]
    InvalidId(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<shared_database::supabase::StoreError> for DoctorError {
    fn from(e: shared_database::supabase::StoreError) -> Self {
        DoctorError::Store(e.to_string())
    }
}
