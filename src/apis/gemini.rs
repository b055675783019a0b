use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, warn};

use crate::errors::GenerateError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed image model; the whole tool is built around this one endpoint.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

// Generation can genuinely take half a minute; the timeout only guards
// against a hung connection.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

pub struct GeminiClient {
    client: ReqwestClient,
    api_key: String,
    model: String,
}

// -- Response types --

#[derive(Debug, Default, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

#[derive(Debug, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One segment of a candidate's content. The backend also emits part kinds
/// we don't care about (thought signatures and the like); those land in
/// `Other` instead of failing the whole parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
    Other(Value),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

pub struct InlineImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl GeminiClient {
    pub fn new(api_key: &str, model: &str) -> Result<Self, GenerateError> {
        if api_key.trim().is_empty() {
            return Err(GenerateError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": {
                "responseModalities": ["IMAGE"]
            }
        })
    }

    /// One blocking `generateContent` call. A single attempt: no retry, no
    /// caching; transport and API failures come back as typed errors for
    /// classification.
    pub async fn generate(&self, final_prompt: &str) -> Result<GenerationResponse, GenerateError> {
        if final_prompt.trim().is_empty() {
            return Err(GenerateError::EmptyPrompt);
        }

        let url = format!("{}/{}:generateContent", GEMINI_BASE_URL, self.model);
        debug!("requesting generateContent ({} prompt chars)", final_prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&Self::request_body(final_prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("generateContent returned {}", status);
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed = response.json::<GenerationResponse>().await?;
        debug!("response has {} candidate(s)", parsed.candidates.len());
        Ok(parsed)
    }
}

/// Locate the first inline image in a response: first candidate only, parts
/// in order, first non-empty payload wins. Later candidates are never
/// inspected — that mirrors the behaviour clients already depend on, so it
/// stays even though the API may return more.
pub fn extract_image(response: &GenerationResponse) -> Option<InlineImage> {
    let candidate = response.candidates.first()?;
    for part in &candidate.content.parts {
        if let Part::Inline { inline_data } = part {
            if inline_data.data.is_empty() {
                continue;
            }
            match BASE64.decode(&inline_data.data) {
                Ok(bytes) => {
                    return Some(InlineImage {
                        bytes,
                        mime_type: inline_data.mime_type.clone(),
                    })
                }
                Err(e) => {
                    warn!("inline payload is not valid base64: {e}");
                    return None;
                }
            }
        }
    }
    None
}

/// Any text the first candidate produced, for surfacing when no image came
/// back. Empty/whitespace-only text counts as nothing.
pub fn diagnostic_text(response: &GenerationResponse) -> Option<String> {
    let candidate = response.candidates.first()?;
    let text = candidate
        .content
        .parts
        .iter()
        .filter_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inline_part(mime_type: &str, bytes: &[u8]) -> Part {
        Part::Inline {
            inline_data: InlineData {
                mime_type: mime_type.to_string(),
                data: BASE64.encode(bytes),
            },
        }
    }

    fn response_with(parts: Vec<Part>) -> GenerationResponse {
        GenerationResponse {
            candidates: vec![Candidate {
                content: Content { parts },
            }],
        }
    }

    #[test]
    fn builds_gemini_request_body() {
        let body = GeminiClient::request_body("draw a banana");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "draw a banana");
        assert_eq!(body["generationConfig"]["responseModalities"][0], "IMAGE");
    }

    #[test]
    fn rejects_empty_api_key() {
        assert!(matches!(
            GeminiClient::new("  ", DEFAULT_IMAGE_MODEL),
            Err(GenerateError::MissingApiKey)
        ));
    }

    #[test]
    fn no_candidates_means_no_image() {
        let response = GenerationResponse { candidates: vec![] };
        assert!(extract_image(&response).is_none());
        assert!(diagnostic_text(&response).is_none());
    }

    #[test]
    fn first_inline_part_wins() {
        let response = response_with(vec![
            Part::Text {
                text: "here is your image".to_string(),
            },
            inline_part("image/png", b"AAAA"),
            inline_part("image/jpeg", b"BBBB"),
        ]);
        let image = extract_image(&response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"AAAA");
    }

    #[test]
    fn later_candidates_are_ignored() {
        // Only the first candidate is ever inspected, even when a later one
        // carries an image. Regression guard for the documented tie-break.
        let response = GenerationResponse {
            candidates: vec![
                Candidate {
                    content: Content {
                        parts: vec![Part::Text {
                            text: "no image here".to_string(),
                        }],
                    },
                },
                Candidate {
                    content: Content {
                        parts: vec![inline_part("image/png", b"CCCC")],
                    },
                },
            ],
        };
        assert!(extract_image(&response).is_none());
    }

    #[test]
    fn empty_inline_payloads_are_skipped() {
        let response = response_with(vec![
            Part::Inline {
                inline_data: InlineData {
                    mime_type: "image/png".to_string(),
                    data: String::new(),
                },
            },
            inline_part("image/webp", b"DD"),
        ]);
        let image = extract_image(&response).unwrap();
        assert_eq!(image.mime_type, "image/webp");
    }

    #[test]
    fn diagnostic_text_joins_text_parts() {
        let response = response_with(vec![
            Part::Text {
                text: "first line".to_string(),
            },
            Part::Other(json!({ "thoughtSignature": "xyz" })),
            Part::Text {
                text: "second line".to_string(),
            },
        ]);
        assert_eq!(
            diagnostic_text(&response).unwrap(),
            "first line\nsecond line"
        );
    }

    #[test]
    fn parses_wire_response() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "rendering" },
                        { "inlineData": { "mimeType": "image/png", "data": BASE64.encode(b"pngbytes") } },
                        { "thoughtSignature": "opaque" }
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "modelVersion": "gemini-3-pro-image-preview"
        });
        let response: GenerationResponse = serde_json::from_value(raw).unwrap();
        let image = extract_image(&response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"pngbytes");
    }

    #[test]
    fn garbage_base64_is_a_soft_failure() {
        let response = response_with(vec![Part::Inline {
            inline_data: InlineData {
                mime_type: "image/png".to_string(),
                data: "not base64 @@@".to_string(),
            },
        }]);
        assert!(extract_image(&response).is_none());
    }
}
