//! Gemini `generateContent` client

use async_trait::async_trait;
use omnihub_core::prelude::*;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::prompt::system_instruction;

/// Shown when the request itself fails (network, auth, server error).
pub const FALLBACK_REPLY: &str = "I'm having trouble connecting to the smart hub right now.";

/// Shown when the model answers with no usable text.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't process that request.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const TEMPERATURE: f64 = 0.7;

/// Something that can answer a user prompt about the device collection.
///
/// The UI layer holds this as a trait object so tests can swap in a
/// canned responder.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String>;
}

/// Resolve a completion outcome to the text shown in the transcript.
pub fn reply_or_fallback(result: Result<String>) -> String {
    match result {
        Ok(text) => text,
        Err(Error::EmptyCompletion) => EMPTY_REPLY.to_string(),
        Err(e) => {
            warn!("Assistant request failed: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    #[serde(rename = "system_instruction")]
    system_instruction: ContentBlock,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct ContentBlock {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

// ─────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────

/// HTTP client for the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_base: impl Into<String>, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_base: api_base.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn build_request(prompt: &str, context: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: ContentBlock {
                parts: vec![Part {
                    text: system_instruction(context),
                }],
            },
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
            },
        }
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::EmptyCompletion);
        }
        Ok(text)
    }
}

#[async_trait]
impl CompletionService for GeminiClient {
    async fn complete(&self, prompt: &str, context: &str) -> Result<String> {
        let body = Self::build_request(prompt, context);

        debug!(model = %self.model, "Sending assistant request");
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::assistant(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::assistant(format!(
                "server returned {status}: {detail}"
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::assistant(format!("malformed response: {e}")))?;

        Self::extract_text(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/",
            "gemini-3-flash-preview",
            "k",
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let request = GeminiClient::build_request("movie night", "Living Room TV (Hisense TV)");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "movie night");
        assert_eq!(json["generationConfig"]["temperature"], 0.7);

        let instruction = json["system_instruction"]["parts"][0]["text"]
            .as_str()
            .unwrap();
        assert!(instruction.contains("Living Room TV (Hisense TV)"));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "Turn on the TV"}, {"text": " and dim the lights."}]}}
                ]
            }"#,
        )
        .unwrap();

        let text = GeminiClient::extract_text(response).unwrap();
        assert_eq!(text, "Turn on the TV and dim the lights.");
    }

    #[test]
    fn test_extract_text_empty_is_error() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(Error::EmptyCompletion)
        ));

        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "   "}]}}]}"#,
        )
        .unwrap();
        assert!(matches!(
            GeminiClient::extract_text(response),
            Err(Error::EmptyCompletion)
        ));
    }

    #[test]
    fn test_reply_or_fallback_mapping() {
        assert_eq!(reply_or_fallback(Ok("hi".into())), "hi");
        assert_eq!(reply_or_fallback(Err(Error::EmptyCompletion)), EMPTY_REPLY);
        assert_eq!(
            reply_or_fallback(Err(Error::assistant("boom"))),
            FALLBACK_REPLY
        );
    }
}
