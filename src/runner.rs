use crate::core::error::ProbeError;
use crate::gemini::{GeminiClient, GeminiRequest, RawResponse};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{info, warn};

/// Result of a request that reached the server.
#[derive(Debug, Clone, PartialEq)]
pub enum ProbeOutcome {
    /// 200 with a body that carries a generated title
    Success {
        status: StatusCode,
        body: Value,
        title: String,
    },
    /// Any non-200 status; the body is kept as raw text
    HttpError { status: StatusCode, body: String },
    /// 200 whose body is not JSON (`body` is `None`) or has no title at the
    /// expected path
    Unreadable {
        status: StatusCode,
        body: Option<Value>,
        error: String,
    },
}

/// Send `prompt` once and classify what came back.
pub async fn run_probe(client: &GeminiClient, prompt: &str) -> Result<ProbeOutcome, ProbeError> {
    let payload = GeminiRequest::from_prompt(prompt);
    let response = client.generate_content(&payload).await?;
    classify(response)
}

/// Turn a raw response into an outcome. Only a 200 body is parsed.
pub fn classify(response: RawResponse) -> Result<ProbeOutcome, ProbeError> {
    let RawResponse { status, body } = response;

    if status != StatusCode::OK {
        warn!(status = status.as_u16(), "API returned a non-success status");
        return Ok(ProbeOutcome::HttpError { status, body });
    }

    let body: Value = match serde_json::from_str(&body) {
        Ok(body) => body,
        Err(err) => {
            let error = ProbeError::from(err).to_string();
            warn!(error = %error, "200 response body is not JSON");
            return Ok(ProbeOutcome::Unreadable {
                status,
                body: None,
                error,
            });
        }
    };

    match extract_title(&body) {
        Ok(title) => {
            info!(title = %title, "Extracted generated title");
            Ok(ProbeOutcome::Success {
                status,
                body,
                title,
            })
        }
        Err(err) => {
            warn!(error = %err, "200 response has no generated title");
            Ok(ProbeOutcome::Unreadable {
                status,
                body: Some(body),
                error: err.to_string(),
            })
        }
    }
}

/// Read `candidates[0].content.parts[0].text`, naming the first step that is
/// absent when the shape does not match.
pub fn extract_title(body: &Value) -> Result<String, ProbeError> {
    let candidates = body
        .get("candidates")
        .ok_or_else(|| ProbeError::missing("candidates"))?;
    let candidate = candidates
        .get(0)
        .ok_or_else(|| ProbeError::missing("candidates[0]"))?;
    let content = candidate
        .get("content")
        .ok_or_else(|| ProbeError::missing("candidates[0].content"))?;
    let parts = content
        .get("parts")
        .ok_or_else(|| ProbeError::missing("candidates[0].content.parts"))?;
    let part = parts
        .get(0)
        .ok_or_else(|| ProbeError::missing("candidates[0].content.parts[0]"))?;

    part.get("text")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProbeError::missing("candidates[0].content.parts[0].text"))
}
