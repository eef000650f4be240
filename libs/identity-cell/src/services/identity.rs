use serde_json::json;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::{StoreError, SupabaseClient};

use crate::models::{CreateUserRequest, IdentityError, User, UserRole};

/// Resolves externally-issued identities to local user records.
pub struct IdentityService {
    supabase: SupabaseClient,
}

impl IdentityService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// Look up a user by external id, creating one (role `patient`) on first
    /// sight. Idempotent: a concurrent insert racing this one trips the
    /// unique index on `external_id`, and the conflict is resolved by
    /// fetching the row the other writer stored.
    pub async fn ensure_user(&self, request: CreateUserRequest) -> Result<User, IdentityError> {
        if request.external_id.trim().is_empty() || request.email.trim().is_empty() {
            return Err(IdentityError::ValidationError(
                "externalId and email are required".to_string(),
            ));
        }

        if let Some(existing) = self.find_by_external_id(&request.external_id).await? {
            debug!("User already exists for external id {}", request.external_id);
            return Ok(existing);
        }

        let row = json!({
            "external_id": request.external_id,
            "email": request.email,
            "role": UserRole::Patient.to_string(),
        });

        match self.supabase.insert_returning("users", row).await {
            Ok(user) => Ok(user),
            Err(StoreError::Conflict(_)) => {
                debug!(
                    "Concurrent insert for external id {}, fetching existing record",
                    request.external_id
                );
                self.find_by_external_id(&request.external_id)
                    .await?
                    .ok_or_else(|| {
                        IdentityError::Store("conflicting user record disappeared".to_string())
                    })
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_role(&self, external_id: &str) -> Result<UserRole, IdentityError> {
        self.find_by_external_id(external_id)
            .await?
            .map(|user| user.role)
            .ok_or(IdentityError::NotFound)
    }

    async fn find_by_external_id(&self, external_id: &str) -> Result<Option<User>, IdentityError> {
        let rows: Vec<User> = self
            .supabase
            .select("users", &format!("external_id=eq.{}&limit=1", external_id))
            .await?;

        Ok(rows.into_iter().next())
    }
}
