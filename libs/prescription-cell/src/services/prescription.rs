use chrono::Utc;
use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Prescription, PrescriptionError, UploadPrescriptionRequest};

pub struct PrescriptionService {
    supabase: SupabaseClient,
}

impl PrescriptionService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn upload(
        &self,
        request: UploadPrescriptionRequest,
    ) -> Result<Prescription, PrescriptionError> {
        if request.patient_external_id.trim().is_empty()
            || request.file_reference.trim().is_empty()
        {
            return Err(PrescriptionError::ValidationError(
                "patientExternalId and fileReference are required".to_string(),
            ));
        }

        debug!(
            "Recording prescription upload for patient {}",
            request.patient_external_id
        );

        let row = json!({
            "patient_external_id": request.patient_external_id,
            "file_reference": request.file_reference,
            "uploaded_at": Utc::now().to_rfc3339(),
        });

        let prescription = self.supabase.insert_returning("prescriptions", row).await?;
        Ok(prescription)
    }
}
