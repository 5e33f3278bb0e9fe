//! Google Gemini API backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{create_http_client, error_for_status, extract_api_key};
use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm::{GEMINI_MAX_OUTPUT_TOKENS, TEMPERATURE};
use crate::error::{RepocoderError, Result};
use crate::llm::ModelBackend;

const DEFAULT_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-1.5-pro-002";
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini generateContent backend.
///
/// # Configuration example
/// ```toml
/// [llm.providers.gemini]
/// api_key = "AIza..."
/// model = "gemini-1.5-pro-002"
/// endpoint = "https://generativelanguage.googleapis.com" # optional
/// ```
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    system_instruction: GeminiContent,
    contents: Vec<GeminiContent>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiResponseContent>,
}

#[derive(Deserialize)]
struct GeminiResponseContent {
    #[serde(default)]
    parts: Option<Vec<GeminiResponsePart>>,
}

#[derive(Deserialize)]
struct GeminiResponsePart {
    text: String,
}

impl GeminiBackend {
    pub fn new(config: &ProviderConfig, network: &NetworkConfig) -> Result<Self> {
        let api_key = extract_api_key(config, "Gemini", API_KEY_ENV)?;

        let base_url = config
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_BASE)
            .trim_end_matches('/')
            .to_string();

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: create_http_client(network)?,
            api_key,
            base_url,
            model,
        })
    }

    fn generate_content_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, system: &str, prompt: &str) -> GeminiRequest {
        GeminiRequest {
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: system.to_string(),
                }],
            },
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: GEMINI_MAX_OUTPUT_TOKENS,
            },
        }
    }
}

#[async_trait]
impl ModelBackend for GeminiBackend {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = self.build_request(system, prompt);

        tracing::debug!(
            "Gemini API request: model={}, system_len={}, prompt_len={}",
            self.model,
            system.len(),
            prompt.len()
        );

        let response = self
            .client
            .post(self.generate_content_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;
        let response = error_for_status("Gemini", response).await?;

        let body: GeminiResponse = response.json().await?;
        // Replies can arrive split across several parts; concatenate them all.
        let text = body
            .candidates
            .and_then(|candidates| candidates.into_iter().next())
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts)
            .map(|parts| parts.into_iter().map(|part| part.text).collect::<String>())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(RepocoderError::Llm(
                "Gemini returned no candidates".to_string(),
            ));
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
