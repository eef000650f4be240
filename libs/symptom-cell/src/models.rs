use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomCheckRequest {
    pub symptoms: String,
}

/// Wire shapes for the chat-completion provider.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

#[derive(Debug, thiserror::Error)]
pub enum AdviceError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("provider returned no suggestion")]
    NoSuggestion,

    #[error("provider error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
