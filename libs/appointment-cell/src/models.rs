use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Appointment ledger entry. `date` and `time` are kept as the calendar-date
/// and local-time strings the patient picked; the store sorts on `date`
/// lexicographically, which is chronological for ISO dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_external_id: String,
    pub doctor_id: Uuid,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
}

/// Only `pending` is reachable: no confirm or cancel endpoint exists, the
/// other states are schema placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// `doctor_id` arrives as a raw string so the ledger can classify a
/// malformed identifier as an unknown doctor rather than a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub patient_external_id: String,
    pub doctor_id: String,
    pub date: String,
    pub time: String,
}

/// Appointment augmented with the referenced doctor's name. `doctor_name` is
/// null when the reference no longer resolves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: Uuid,
    pub patient_external_id: String,
    pub doctor_id: Uuid,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub doctor_name: Option<String>,
}

/// Store row shape for the embedded doctor join (`select=*,doctors(name)`).
#[derive(Debug, Deserialize)]
pub struct AppointmentJoinRow {
    pub id: Uuid,
    pub patient_external_id: String,
    pub doctor_id: Uuid,
    pub date: String,
    pub time: String,
    pub status: AppointmentStatus,
    pub doctors: Option<EmbeddedDoctor>,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddedDoctor {
    pub name: String,
}

impl From<AppointmentJoinRow> for AppointmentView {
    fn from(row: AppointmentJoinRow) -> Self {
        AppointmentView {
            id: row.id,
            patient_external_id: row.patient_external_id,
            doctor_id: row.doctor_id,
            date: row.date,
            time: row.time,
            status: row.status,
            doctor_name: row.doctors.map(|d| d.name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<shared_database::supabase::StoreError> for AppointmentError {
    fn from(e: shared_database::supabase::StoreError) -> Self {
        AppointmentError::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AppointmentStatus::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_join_row_maps_missing_doctor_to_null_name() {
        let row: AppointmentJoinRow = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "patient_external_id": "ext-1",
            "doctor_id": Uuid::new_v4(),
            "date": "2025-03-01",
            "time": "10:30",
            "status": "pending",
            "doctors": null
        }))
        .unwrap();

        let view = AppointmentView::from(row);
        assert_eq!(view.doctor_name, None);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = AppointmentView {
            id: Uuid::new_v4(),
            patient_external_id: "ext-1".to_string(),
            doctor_id: Uuid::new_v4(),
            date: "2025-03-01".to_string(),
            time: "10:30".to_string(),
            status: AppointmentStatus::Pending,
            doctor_name: Some("Dr. Grey".to_string()),
        };

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["doctorName"], "Dr. Grey");
        assert_eq!(value["patientExternalId"], "ext-1");
    }
}
