use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeminiContent {
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    /// A single-turn request carrying one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_to_nested_contents_parts_text() {
        let request = GeminiRequest::from_prompt("hello");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [ { "parts": [ { "text": "hello" } ] } ] })
        );
    }

    #[test]
    fn has_no_role_or_system_instruction() {
        let encoded = serde_json::to_string(&GeminiRequest::from_prompt("x")).unwrap();
        assert!(!encoded.contains("role"));
        assert!(!encoded.contains("system_instruction"));
    }
}
