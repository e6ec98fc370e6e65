mod client;
mod types;

pub use client::{GeminiClient, RawResponse};
pub use types::{GeminiContent, GeminiPart, GeminiRequest};
