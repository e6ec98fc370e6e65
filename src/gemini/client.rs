use crate::config::Settings;
use crate::core::error::ProbeError;
use crate::gemini::types::GeminiRequest;
use reqwest::{Client, StatusCode};
use tracing::debug;

/// Status and undecoded body of a `generateContent` call.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

#[derive(Clone)]
pub struct GeminiClient {
    pub model: String,
    base_url: String,
    api_key: String,
    client: Client,
}

impl GeminiClient {
    pub fn new(settings: &Settings) -> Result<Self, ProbeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            model: settings.model.clone(),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            client: builder.build()?,
        })
    }

    /// Endpoint URL without the `key` query parameter.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// POST `payload` once. Any HTTP status is returned as a response; only
    /// transport failures are errors.
    pub async fn generate_content(&self, payload: &GeminiRequest) -> Result<RawResponse, ProbeError> {
        let url = self.endpoint();
        debug!(url = %url, model = %self.model, "Sending generateContent request");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(RawResponse { status, body })
    }
}
