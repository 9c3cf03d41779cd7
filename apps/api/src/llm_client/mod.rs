/// LLM Client — the single point of entry for all Gemini API calls in FitCheck.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All model interactions MUST go through this module, behind the
/// [`Analyzer`] trait so tests can substitute a deterministic stub.
///
/// Model: gemini-1.5-flash (hardcoded — do not make configurable to prevent drift)
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::extract::PageImage;

pub mod prompts;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls in FitCheck.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-1.5-flash";
const MAX_OUTPUT_TOKENS: u32 = 2048;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types — Gemini generateContent request/response
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

#[derive(Debug, Serialize)]
struct InlineData<'a> {
    #[serde(rename = "mimeType")]
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
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

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect::<Vec<_>>()
            .join("");
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer trait — the narrow seam the rest of the pipeline depends on
// ────────────────────────────────────────────────────────────────────────────

/// The model-call seam. Carried in `AppState` as `Arc<dyn Analyzer>` so the
/// handler and pipeline never depend on the live network client.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, prompt: &str, image: Option<&PageImage>)
        -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient — the production backend
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by the analysis pipeline.
/// Wraps the Gemini generateContent API. One attempt per submission: errors
/// surface to the caller, which reports a generic failure — there is no
/// retry, backoff, or response caching.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a raw call to the Gemini API, returning the full response object.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        image: Option<&PageImage>,
    ) -> Result<GenerateContentResponse, LlmError> {
        let request_body = build_request(prompt, system, image);

        let response = self
            .client
            .post(format!("{GEMINI_API_URL}/{MODEL}:generateContent"))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse the Gemini error envelope for its message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, candidate_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }
}

#[async_trait]
impl Analyzer for GeminiClient {
    async fn analyze(
        &self,
        prompt: &str,
        image: Option<&PageImage>,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, prompts::ANALYSIS_SYSTEM, image).await?;
        response.text().ok_or(LlmError::EmptyContent)
    }
}

fn build_request<'a>(
    prompt: &'a str,
    system: &'a str,
    image: Option<&'a PageImage>,
) -> GenerateContentRequest<'a> {
    let mut parts = vec![Part {
        text: Some(prompt),
        inline_data: None,
    }];
    if let Some(image) = image {
        parts.push(Part {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type,
                data: &image.data,
            }),
        });
    }

    GenerateContentRequest {
        system_instruction: Content {
            parts: vec![Part {
                text: Some(system),
                inline_data: None,
            }],
        },
        contents: vec![Content { parts }],
        generation_config: GenerationConfig {
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_image_has_single_text_part() {
        let request = build_request("evaluate this", "system", None);
        let json = serde_json::to_value(&request).unwrap();
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0]["text"], "evaluate this");
        assert!(parts[0].get("inlineData").is_none());
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "system");
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_request_with_image_carries_inline_data() {
        let image = PageImage {
            mime_type: "image/jpeg",
            data: "aGVsbG8=".to_string(),
        };
        let request = build_request("evaluate this", "system", Some(&image));
        let json = serde_json::to_value(&request).unwrap();
        let parts = json["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1]["inlineData"]["mimeType"], "image/jpeg");
        assert_eq!(parts[1]["inlineData"]["data"], "aGVsbG8=");
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Strong match. "}, {"text": "Relevance Percentage: 90%"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            response.text().unwrap(),
            "Strong match. Relevance Percentage: 90%"
        );
    }

    #[test]
    fn test_response_text_is_none_when_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_error_envelope_parses_message() {
        let json = r#"{"error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let parsed: GeminiError = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.error.message, "Resource exhausted");
    }
}
