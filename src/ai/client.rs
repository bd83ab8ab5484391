//! Generative Model API Client
//!
//! One credential-bound client executing a single generateContent call.
//! Non-success responses become classified `Api` errors carrying the HTTP
//! status so the dispatcher can decide whether rotation could help.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::request::{ModelRequest, Part, ResponseFormat};
use crate::types::{AdforgeError, Result};

/// Client bound to exactly one credential from the pool.
pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    model: String,
    /// Zero-based position of the bound credential in the pool, for logging
    ordinal: usize,
    key: SecretString,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("ordinal", &self.ordinal)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        http: reqwest::Client,
        api_base: impl Into<String>,
        model: impl Into<String>,
        ordinal: usize,
        key: SecretString,
    ) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            model: model.into(),
            ordinal,
            key,
        }
    }

    /// Pool position of the credential this client is bound to.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Execute one generateContent call and return the concatenated text of
    /// the first candidate. An empty candidate list or text-free parts yield
    /// an empty string; semantic emptiness is the retry wrapper's concern.
    pub async fn generate(&self, request: &ModelRequest) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        );

        let body = GenerateContentRequest {
            system_instruction: Instruction {
                parts: vec![Part::text(request.system_instruction.clone())],
            },
            contents: vec![Content {
                role: "user",
                parts: &request.parts,
            }],
            generation_config: match request.format {
                ResponseFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json",
                }),
                ResponseFormat::Text => None,
            },
        };

        debug!(
            model = %self.model,
            credential = self.ordinal + 1,
            parts = request.parts.len(),
            "Sending generateContent request"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", self.key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AdforgeError::api(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdforgeError::api_status(status.as_u16(), body));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdforgeError::api(format!("unreadable response body: {e}")))?;

        Ok(payload.text())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    system_instruction: Instruction,
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Instruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: &'a [Part],
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ErrorClassifier;

    fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
        GeminiClient::new(
            reqwest::Client::new(),
            server.url(),
            "gemini-2.5-flash",
            0,
            SecretString::from("test-key".to_string()),
        )
    }

    #[tokio::test]
    async fn test_generate_extracts_candidate_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .with_status(200)
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"part one "},{"text":"part two"}]}}]}"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ModelRequest::new("system").with_text("hello");
        let text = client.generate(&request).await.unwrap();

        assert_eq!(text, "part one part two");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rate_limited_response_is_credential_fault() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ModelRequest::new("system").with_text("hello");
        let err = client.generate(&request).await.unwrap_err();

        assert!(matches!(
            err,
            AdforgeError::Api {
                status: Some(429),
                ..
            }
        ));
        assert!(ErrorClassifier::is_credential_fault(&err));
    }

    #[tokio::test]
    async fn test_server_fault_is_not_credential_fault() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ModelRequest::new("system").with_text("hello");
        let err = client.generate(&request).await.unwrap_err();

        assert!(!ErrorClassifier::is_credential_fault(&err));
    }

    #[tokio::test]
    async fn test_empty_candidates_yield_empty_string() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ModelRequest::new("system").with_text("hello");
        assert_eq!(client.generate(&request).await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_json_hint_sets_response_mime_type() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-2.5-flash:generateContent")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "generation_config": {"response_mime_type": "application/json"}
            })))
            .with_status(200)
            .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"{}"}]}}]}"#)
            .create_async()
            .await;

        let client = client_for(&server);
        let request = ModelRequest::new("system").with_text("x").expect_json();
        client.generate(&request).await.unwrap();
        mock.assert_async().await;
    }
}
