use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
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

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            supabase_url: env::var("SUPABASE_URL")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_URL not set, using empty value");
                    String::new()
                }),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .unwrap_or_else(|_| {
                    warn!("SUPABASE_ANON_KEY not set, using empty value");
                    String::new()
                }),
            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| {
                    warn!("MAIL_API_URL not set, using empty value");
                    String::new()
                }),
            mail_api_key: env::var("MAIL_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("MAIL_API_KEY not set, using empty value");
                    String::new()
                }),
            mail_from_address: env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| {
                    warn!("MAIL_FROM_ADDRESS not set, using empty value");
                    String::new()
                }),
            twilio_base_url: env::var("TWILIO_BASE_URL")
                .unwrap_or_else(|_| "https://api.twilio.com".to_string()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_ACCOUNT_SID not set, using empty value");
                    String::new()
                }),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_AUTH_TOKEN not set, using empty value");
                    String::new()
                }),
            twilio_phone_number: env::var("TWILIO_PHONE_NUMBER")
                .unwrap_or_else(|_| {
                    warn!("TWILIO_PHONE_NUMBER not set, using empty value");
                    String::new()
                }),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("OPENAI_API_KEY not set, using empty value");
                    String::new()
                }),
            daily_base_url: env::var("DAILY_BASE_URL")
                .unwrap_or_else(|_| "https://api.daily.co/v1".to_string()),
            daily_api_key: env::var("DAILY_API_KEY")
                .unwrap_or_else(|_| {
                    warn!("DAILY_API_KEY not set, using empty value");
                    String::new()
                }),
            app_base_url: env::var("APP_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.supabase_url.is_empty() && !self.supabase_anon_key.is_empty()
    }

    pub fn is_mail_configured(&self) -> bool {
        !self.mail_api_url.is_empty()
            && !self.mail_api_key.is_empty()
            && !self.mail_from_address.is_empty()
    }

    pub fn is_sms_configured(&self) -> bool {
        !self.twilio_account_sid.is_empty()
            && !self.twilio_auth_token.is_empty()
            && !self.twilio_phone_number.is_empty()
    }

    pub fn is_ai_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    pub fn is_video_configured(&self) -> bool {
        !self.daily_api_key.is_empty() && !self.daily_base_url.is_empty()
    }
}
