use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;

/// Test configuration with every provider pointed at localhost.
///
/// Tests overwrite the relevant base URLs with wiremock server URIs before
/// converting to an `AppConfig`.
pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from_address: String,
    pub twilio_base_url: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_phone_number: String,
    pub openai_base_url: String,
    pub openai_api_key: String,
    pub daily_base_url: String,
    pub daily_api_key: String,
    pub app_base_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
            mail_api_url: "http://localhost:54322".to_string(),
            mail_api_key: "test-mail-key".to_string(),
            mail_from_address: "clinic@example.com".to_string(),
            twilio_base_url: "http://localhost:54323".to_string(),
            twilio_account_sid: "ACtest".to_string(),
            twilio_auth_token: "test-twilio-token".to_string(),
            twilio_phone_number: "+15005550006".to_string(),
            openai_base_url: "http://localhost:54324".to_string(),
            openai_api_key: "test-openai-key".to_string(),
            daily_base_url: "http://localhost:54325".to_string(),
            daily_api_key: "test-daily-key".to_string(),
            app_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            mail_api_url: self.mail_api_url.clone(),
            mail_api_key: self.mail_api_key.clone(),
            mail_from_address: self.mail_from_address.clone(),
            twilio_base_url: self.twilio_base_url.clone(),
            twilio_account_sid: self.twilio_account_sid.clone(),
            twilio_auth_token: self.twilio_auth_token.clone(),
            twilio_phone_number: self.twilio_phone_number.clone(),
            openai_base_url: self.openai_base_url.clone(),
            openai_api_key: self.openai_api_key.clone(),
            daily_base_url: self.daily_base_url.clone(),
            daily_api_key: self.daily_api_key.clone(),
            app_base_url: self.app_base_url.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned store rows matching the collection schemas.
pub struct MockStoreResponses;

impl MockStoreResponses {
    pub fn user_row(external_id: &str, email: &str, role: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "external_id": external_id,
            "email": email,
            "role": role,
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn doctor_row(doctor_id: &str, name: &str, specialties: &str) -> serde_json::Value {
        json!({
            "id": doctor_id,
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "phone": "+353871234567",
            "specialties": specialties
        })
    }

    pub fn appointment_row(
        patient_external_id: &str,
        doctor_id: &str,
        date: &str,
        time: &str,
    ) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "patient_external_id": patient_external_id,
            "doctor_id": doctor_id,
            "date": date,
            "time": time,
            "status": "pending"
        })
    }

    /// Appointment row with the embedded doctor join, as returned by
    /// `select=*,doctors(name)`. Pass `None` for a dangling doctor reference.
    pub fn appointment_join_row(
        patient_external_id: &str,
        doctor_id: &str,
        date: &str,
        time: &str,
        doctor_name: Option<&str>,
    ) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "patient_external_id": patient_external_id,
            "doctor_id": doctor_id,
            "date": date,
            "time": time,
            "status": "pending",
            "doctors": doctor_name.map(|name| json!({ "name": name }))
        })
    }

    pub fn prescription_row(patient_external_id: &str, file_reference: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "patient_external_id": patient_external_id,
            "file_reference": file_reference,
            "uploaded_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn chat_completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": content },
                    "finish_reason": "stop"
                }
            ]
        })
    }

    pub fn daily_room(url: &str) -> serde_json::Value {
        json!({
            "id": Uuid::new_v4(),
            "name": "quickclinic-room",
            "url": url,
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    pub fn twilio_message(sid: &str) -> serde_json::Value {
        json!({
            "sid": sid,
            "status": "queued"
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({ "error": { "message": message } })
    }
}
