use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A user record correlated to the external identity provider by
/// `external_id`. Created once per external id and never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub external_id: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Patient,
    Doctor,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Patient => write!(f, "patient"),
            UserRole::Doctor => write!(f, "doctor"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub external_id: String,
    pub email: String,
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("User not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<shared_database::supabase::StoreError> for IdentityError {
    fn from(e: shared_database::supabase::StoreError) -> Self {
        IdentityError::Store(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Patient).unwrap(), "\"patient\"");
        assert_eq!(UserRole::Doctor.to_string(), "doctor");
    }

    #[test]
    fn test_create_user_request_uses_camel_case() {
        let request: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "externalId": "ext-123",
            "email": "patient@example.com"
        }))
        .unwrap();
        assert_eq!(request.external_id, "ext-123");
    }
}
