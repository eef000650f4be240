use tracing::debug;
use uuid::Uuid;

use serde_json::json;
use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{CreateDoctorRequest, Doctor, DoctorError};

/// Read-mostly lookup and free-text search over the doctor collection.
pub struct DoctorDirectoryService {
    supabase: SupabaseClient,
}

impl DoctorDirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Case-insensitive substring search on `name` or `specialties`. A
    /// missing, empty, or literal `all` term returns the whole directory.
    /// Ordered by name so identical searches paginate-free and stable.
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Doctor>, DoctorError> {
        let query = match term {
            None => None,
            Some(t) if t.trim().is_empty() || t.eq_ignore_ascii_case("all") => None,
            Some(t) => Some(t.trim().to_string()),
        };

        debug!("Searching doctors with term: {:?}", query);

        let path_query = match query {
            None => "order=name.asc".to_string(),
            Some(t) => format!(
                "or=(name.ilike.*{}*,specialties.ilike.*{}*)&order=name.asc",
                t, t
            ),
        };

        let doctors = self.supabase.select("doctors", &path_query).await?;
        Ok(doctors)
    }

    pub async fn get_by_id(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        let id = Uuid::parse_str(doctor_id)
            .map_err(|_| DoctorError::InvalidId(doctor_id.to_string()))?;

        debug!("Fetching doctor {}", id);

        let rows: Vec<Doctor> = self
            .supabase
            .select("doctors", &format!("id=eq.{}", id))
            .await?;

        rows.into_iter().next().ok_or(DoctorError::NotFound)
    }

    /// Administrative insert; every field is required.
    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        if request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.phone.trim().is_empty()
            || request.specialties.trim().is_empty()
        {
            return Err(DoctorError::ValidationError(
                "All doctor fields are required".to_string(),
            ));
        }

        debug!("Creating doctor profile for {}", request.email);

        let row = json!({
            "name": request.name,
            "email": request.email,
            "phone": request.phone,
            "specialties": request.specialties,
        });

        let doctor = self.supabase.insert_returning("doctors", row).await?;
        Ok(doctor)
    }
}
