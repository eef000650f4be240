use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use doctor_cell::models::Doctor;

use crate::models::{
    Appointment, AppointmentError, AppointmentJoinRow, AppointmentStatus, AppointmentView,
    BookAppointmentRequest,
};
use crate::services::notify::MailClient;

/// Creates appointment records and lists a patient's bookings joined with
/// doctor names.
///
/// Booking is a fixed sequence: validate, resolve the doctor, persist,
/// notify. The notification step is observed purely for logging; its outcome
/// never affects the committed booking.
pub struct AppointmentBookingService {
    supabase: SupabaseClient,
    mailer: MailClient,
}

impl AppointmentBookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            mailer: MailClient::new(config),
        }
    }

    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        if request.patient_external_id.trim().is_empty()
            || request.doctor_id.trim().is_empty()
            || request.date.trim().is_empty()
            || request.time.trim().is_empty()
        {
            return Err(AppointmentError::ValidationError(
                "All fields are required".to_string(),
            ));
        }

        // A malformed id cannot reference any doctor, so it gets the same
        // answer as an unknown one.
        let doctor_id = Uuid::parse_str(request.doctor_id.trim())
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        let doctor = self.find_doctor(doctor_id).await?;

        let row = json!({
            "patient_external_id": request.patient_external_id,
            "doctor_id": doctor_id,
            "date": request.date,
            "time": request.time,
            "status": AppointmentStatus::Pending.to_string(),
        });

        let appointment: Appointment = self.supabase.insert_returning("appointments", row).await?;
        info!(
            "Appointment {} booked for patient {} with doctor {}",
            appointment.id, appointment.patient_external_id, doctor_id
        );

        // Best effort only. The appointment is already committed, so a mail
        // failure is logged and swallowed.
        if let Err(e) = self
            .mailer
            .notify_doctor_of_booking(&doctor, &request.date, &request.time)
            .await
        {
            warn!(
                "Booking notification for appointment {} failed: {}",
                appointment.id, e
            );
        }

        Ok(appointment)
    }

    /// All appointments for a patient, newest date first, each carrying the
    /// referenced doctor's name (null when the doctor record is gone).
    pub async fn list_for_patient(
        &self,
        patient_external_id: &str,
    ) -> Result<Vec<AppointmentView>, AppointmentError> {
        debug!("Listing appointments for patient {}", patient_external_id);

        let rows: Vec<AppointmentJoinRow> = self
            .supabase
            .select(
                "appointments",
                &format!(
                    "patient_external_id=eq.{}&select=*,doctors(name)&order=date.desc",
                    patient_external_id
                ),
            )
            .await?;

        Ok(rows.into_iter().map(AppointmentView::from).collect())
    }

    async fn find_doctor(&self, doctor_id: Uuid) -> Result<Doctor, AppointmentError> {
        let rows: Vec<Doctor> = self
            .supabase
            .select("doctors", &format!("id=eq.{}", doctor_id))
            .await?;

        rows.into_iter()
            .next()
            .ok_or(AppointmentError::DoctorNotFound)
    }
}
