use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error};

use shared_config::AppConfig;

use crate::models::{AdviceError, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);
const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Pure relay to the chat-completion provider. No retries, no caching, and
/// no interpretation of the returned text.
pub struct SymptomAdviceClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SymptomAdviceClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.openai_base_url.clone(),
            api_key: config.openai_api_key.clone(),
        }
    }

    /// Forward free-text symptoms and return the provider's first suggestion
    /// verbatim. Empty input is rejected before any provider traffic.
    pub async fn suggest(&self, symptoms: &str) -> Result<String, AdviceError> {
        if symptoms.trim().is_empty() {
            return Err(AdviceError::ValidationError(
                "Symptoms are required".to_string(),
            ));
        }

        self.complete(
            "You are a medical AI. Suggest possible conditions based on symptoms.",
            &format!("Symptoms: {}", symptoms),
        )
        .await
    }

    /// Ask the provider which medical specialty fits the symptoms.
    pub async fn suggest_specialty(&self, symptoms: &str) -> Result<String, AdviceError> {
        if symptoms.trim().is_empty() {
            return Err(AdviceError::ValidationError(
                "Symptoms are required".to_string(),
            ));
        }

        let specialty = self
            .complete(
                "You are a helpful medical AI assistant. Based on the user's symptoms, suggest a medical specialty.",
                &format!("What type of specialist should I see for: {}", symptoms),
            )
            .await?;

        Ok(specialty.trim().to_string())
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, AdviceError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        debug!("Requesting chat completion from {}", url);

        let request = ChatCompletionRequest {
            model: CHAT_MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Chat-completion provider error ({}): {}", status, message);
            return Err(AdviceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(AdviceError::Transport)?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(AdviceError::NoSuggestion)
    }
}
