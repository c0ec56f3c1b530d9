//! reqwest-backed [`CharacterSource`] for the characters REST API.
//!
//! One GET per activation against `{base_url}/characters`. No auth, no body.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;

use super::source::{CharacterSource, FetchError, ImageLoadError};
use super::types::{Character, CharacterEnvelope, CharacterQuery};

pub const DEFAULT_BASE_URL: &str = "https://futuramaapi.com/api";

pub struct HttpCharacterSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCharacterSource {
    /// Builds a source for `base_url` (trailing slashes are dropped).
    /// `timeout` bounds every request, avatar loads included.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self { base_url, client }
    }

    pub fn characters_url(&self) -> String {
        format!("{}/characters", self.base_url)
    }
}

fn network_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Network(format!("request timed out: {e}"))
    } else {
        FetchError::Network(e.to_string())
    }
}

#[async_trait]
impl CharacterSource for HttpCharacterSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_characters(
        &self,
        query: &CharacterQuery,
    ) -> Result<Vec<Character>, FetchError> {
        let url = self.characters_url();
        info!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(network_error)?;

        debug!("Characters response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Characters API error: {} - {}", status, message);
            return Err(FetchError::Api { status, message });
        }

        let body = response.text().await.map_err(network_error)?;
        let envelope: CharacterEnvelope =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        info!("Fetched {} characters", envelope.items.len());
        Ok(envelope.items)
    }

    async fn load_image(&self, uri: &str) -> Result<(), ImageLoadError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| ImageLoadError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ImageLoadError::Status(response.status().as_u16()));
        }

        // A missing Content-Type is tolerated; a non-image one is not.
        if let Some(content_type) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            && !content_type.starts_with("image/")
        {
            return Err(ImageLoadError::NotAnImage(content_type.to_string()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ImageLoadError::Network(e.to_string()))?;
        if bytes.is_empty() {
            return Err(ImageLoadError::NotAnImage("empty body".to_string()));
        }

        debug!("Loaded avatar {} ({} bytes)", uri, bytes.len());
        Ok(())
    }
}
