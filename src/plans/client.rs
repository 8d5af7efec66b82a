use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::error;

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Outbound text-generation seam. The production implementation talks to
/// Gemini; tests substitute their own.
#[async_trait]
pub trait PlanClient: Send + Sync {
    async fn generate(&self, api_key: &str, prompt: &str) -> anyhow::Result<String>;
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    model: String,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

impl GeminiClient {
    pub fn new(model: String) -> Self {
        Self {
            client: Client::new(),
            model,
        }
    }
}

#[async_trait]
impl PlanClient for GeminiClient {
    async fn generate(&self, api_key: &str, prompt: &str) -> anyhow::Result<String> {
        let url = format!(
            "{API_BASE_URL}/models/{}:generateContent?key={}",
            self.model, api_key
        );
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, "gemini request failed");
            anyhow::bail!("{status}: {body}");
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| anyhow::anyhow!("response contained no candidates"))?;
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_parsing_extracts_first_candidate_text() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "eat more greens"}, {"text": "ignored"}]}}
            ]
        }"#;
        let parsed: GeminiResponse = serde_json::from_str(raw).expect("parse response");
        let text = parsed
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone());
        assert_eq!(text.as_deref(), Some("eat more greens"));
    }

    #[test]
    fn request_serializes_to_gemini_shape() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".into(),
                }],
            }],
        };
        let json = serde_json::to_value(&request).expect("serialize request");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
    }
}
