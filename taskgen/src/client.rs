use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::domain::{TaskDate, TaskDraft};
use crate::prompt::{build_instruction, response_schema};
use crate::response::parse_drafts;
use crate::TaskGenerator;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const USER_MESSAGE: &str =
    "Failed to generate tasks. The AI might be having trouble. Please try rephrasing your request.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("No Gemini API key configured (set GEMINI_API_KEY or api_key in config)")]
    MissingApiKey,
    #[error("RequestError: {0}")]
    Request(String),
    #[error("Gemini returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Model returned no content")]
    EmptyResponse,
    #[error("MalformedResponse: {0}")]
    Malformed(String),
    #[error("Invalid task at index {index}: {reason}")]
    InvalidDraft { index: usize, reason: String },
}

impl GenerationError {
    /// The message shown to the user regardless of the underlying cause.
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint in JSON-schema mode.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(settings: GeminiSettings) -> Result<Self, GenerationError> {
        if settings.api_key.trim().is_empty() {
            return Err(GenerationError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| GenerationError::Request(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: settings.api_key,
            model: settings.model,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TaskGenerator for GeminiClient {
    #[tracing::instrument(skip_all, fields(model = %self.model, reference_date = %reference_date))]
    async fn generate(
        &self,
        prompt: &str,
        reference_date: TaskDate,
    ) -> Result<Vec<TaskDraft>, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: build_instruction(prompt, reference_date),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
            },
        };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let raw = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|envelope| envelope.error.message)
                .unwrap_or(raw);
            tracing::warn!(status = status.as_u16(), %message, "generateContent failed");
            return Err(GenerationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = resp.json::<GenerateContentResponse>().await.map_err(|e| {
            GenerationError::Malformed(format!("Failed to parse response as JSON: {}", e))
        })?;

        let text = parsed.into_text().ok_or(GenerationError::EmptyResponse)?;
        let drafts = parse_drafts(&text)?;
        tracing::info!(count = drafts.len(), "generated task drafts");
        Ok(drafts)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

    fn client_for(server: &MockServer) -> GeminiClient {
        let mut settings = GeminiSettings::new("test-key");
        settings.base_url = server.uri();
        GeminiClient::new(settings).unwrap()
    }

    fn candidate_with_text(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    fn reference() -> TaskDate {
        TaskDate::parse("2024-07-01").unwrap()
    }

    #[test]
    fn blank_api_key_is_rejected() {
        assert_eq!(
            GeminiClient::new(GeminiSettings::new("  ")).unwrap_err(),
            GenerationError::MissingApiKey
        );
    }

    #[tokio::test]
    async fn generate_returns_validated_drafts() {
        let server = MockServer::start().await;
        let text = r#"[{"title":"Doctor's appointment","description":"At 2pm","date":"2024-07-25","color":"red"}]"#;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_with_text(text)))
            .expect(1)
            .mount(&server)
            .await;

        let drafts = client_for(&server)
            .generate("Doctor's appointment on 2024-07-25 at 2pm", reference())
            .await
            .unwrap();

        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].date.to_string(), "2024-07-25");
        assert_eq!(drafts[0].title, "Doctor's appointment");
    }

    #[tokio::test]
    async fn http_error_carries_service_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" }
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("anything", reference())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GenerationError::Status {
                status: 429,
                message: "Resource exhausted".to_string()
            }
        );
        assert!(err.user_message().starts_with("Failed to generate tasks."));
    }

    #[tokio::test]
    async fn missing_candidates_is_an_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("anything", reference())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::EmptyResponse);
    }

    #[tokio::test]
    async fn structurally_invalid_text_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_with_text(r#"[{"title":"No date"}]"#)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .generate("anything", reference())
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }
}
