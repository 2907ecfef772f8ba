//! Minimal Anthropic Messages API client for PDF document extraction.
//!
//! The application makes exactly one kind of call: a base64 PDF document
//! block plus extraction instructions in, a single JSON text block out. The
//! import validators own everything beyond getting that JSON back.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 8192;

#[derive(Error, Debug)]
pub enum AiError {
    /// Transport-level failure talking to the API.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Extraction service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The API answered 200 but the payload wasn't the expected single JSON
    /// text block.
    #[error("Malformed extraction response: {0}")]
    MalformedResponse(String),
}

/// Anthropic Messages API request.
#[derive(Debug, Clone, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock {
    Document { source: DocumentSource },
    Text { text: String },
}

#[derive(Debug, Clone, Serialize)]
struct DocumentSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Client for the document-extraction calls.
///
/// Cheap to clone; the reqwest client is reference-counted internally.
#[derive(Clone)]
pub struct ExtractionClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl ExtractionClient {
    pub fn new(http: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http,
            api_key,
            model,
        }
    }

    /// Sends a PDF with extraction instructions and parses the JSON the
    /// model returns.
    ///
    /// # Arguments
    /// - `pdf_base64` - The PDF file, already base64-encoded
    /// - `instructions` - Extraction prompt describing the expected JSON
    ///
    /// # Returns
    /// - `Ok(value)` - Parsed JSON from the model's text block
    /// - `Err(AiError)` - Transport error, API error status, or a response
    ///   that wasn't parseable JSON
    pub async fn extract_json(
        &self,
        pdf_base64: &str,
        instructions: &str,
    ) -> Result<serde_json::Value, AiError> {
        let request = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentBlock::Document {
                        source: DocumentSource {
                            kind: "base64",
                            media_type: "application/pdf",
                            data: pdf_base64.to_string(),
                        },
                    },
                    ContentBlock::Text {
                        text: instructions.to_string(),
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let body: MessagesResponse = response.json().await?;

        let text = body
            .content
            .iter()
            .find(|block| block.kind == "text")
            .map(|block| block.text.as_str())
            .ok_or_else(|| AiError::MalformedResponse("no text block in response".to_string()))?;

        let stripped = strip_code_fences(text);

        serde_json::from_str(stripped)
            .map_err(|e| AiError::MalformedResponse(format!("not valid JSON: {}", e)))
    }
}

/// Removes a Markdown code fence if the model wrapped its JSON in one.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag on the opening fence line, if any.
    let inner = match inner.split_once('\n') {
        Some((_lang, rest)) => rest,
        None => inner,
    };

    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_plain_json_through() {
        assert_eq!(strip_code_fences("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn strips_fence_with_language_tag() {
        let fenced = "```json\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fences(fenced), "{\"a\": 1}");
    }

    #[test]
    fn strips_fence_without_language_tag() {
        let fenced = "```\n[1, 2]\n```";
        assert_eq!(strip_code_fences(fenced), "[1, 2]");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(strip_code_fences("  {\"a\": 1}\n"), "{\"a\": 1}");
    }
}
