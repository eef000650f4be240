use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client, Method,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use shared_config::AppConfig;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors surfaced by the document store's REST interface.
///
/// `Conflict` corresponds to a unique-index violation (HTTP 409) and is
/// meaningful to callers that implement create-if-absent flows.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    Conflict(String),

    #[error("store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("store transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("store returned no rows")]
    EmptyResult,

    #[error("failed to decode store row: {0}")]
    Decode(String),
}

/// Thin client over the store's PostgREST-style interface.
///
/// All persistence in the system goes through this client: single-row reads,
/// filtered selects, and single-row inserts. There are no multi-document
/// transactions; atomicity is at the row level.
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            base_url: config.supabase_url.clone(),
            anon_key: config.supabase_anon_key.clone(),
        }
    }

    fn get_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", HeaderValue::from_str(&self.anon_key).unwrap());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        self.request_with_headers(method, path, body, None).await
    }

    pub async fn request_with_headers<T>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        extra_headers: Option<HeaderMap>,
    ) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!("Making store request to {}", url);

        let mut headers = self.get_headers();
        if let Some(extra) = extra_headers {
            headers.extend(extra);
        }

        let mut req = self.client.request(method, &url).headers(headers);

        if let Some(body_data) = body {
            req = req.json(&body_data);
        }

        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Store error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                409 => StoreError::Conflict(error_text),
                code => StoreError::Api {
                    status: code,
                    message: error_text,
                },
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))
    }

    /// Select rows from a table, `query` being a raw PostgREST filter string.
    pub async fn select<T>(&self, table: &str, query: &str) -> Result<Vec<T>, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = format!("/rest/v1/{}?{}", table, query);
        self.request(Method::GET, &path, None).await
    }

    /// Insert a single row and return the stored representation.
    pub async fn insert_returning<T>(&self, table: &str, row: Value) -> Result<T, StoreError>
    where
        T: DeserializeOwned,
    {
        let path = format!("/rest/v1/{}", table);

        let mut headers = HeaderMap::new();
        headers.insert("Prefer", HeaderValue::from_static("return=representation"));

        let rows: Vec<T> = self
            .request_with_headers(Method::POST, &path, Some(row), Some(headers))
            .await?;

        rows.into_iter().next().ok_or(StoreError::EmptyResult)
    }
}
