use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Unified error type for a probe run
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Transport failures: DNS, refused connections, TLS, timeouts, bad URLs
    #[error("{0}")]
    Network(String),

    /// A 200 response whose JSON lacks `candidates[0].content.parts[0].text`
    #[error("Response is missing expected field: {path}")]
    MissingField { path: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ProbeError {
    pub fn missing(path: impl Into<String>) -> Self {
        ProbeError::MissingField { path: path.into() }
    }

    /// Whether the failure happened on the wire rather than in the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Network(_))
    }
}

// reqwest puts the full URL, query string included, into its Display output.
// The query carries the API key, so it is stripped before describing.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Network(format!("Request timed out: {}", describe(err)))
        } else if err.is_connect() {
            ProbeError::Network(format!("Connection failed: {}", describe(err)))
        } else if err.is_builder() {
            ProbeError::Network(format!("Invalid request: {}", describe(err)))
        } else {
            ProbeError::Network(format!("Request failed: {}", describe(err)))
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Serialization(format!("JSON error: {}", err))
    }
}
