//! Anthropic Claude API backend.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{create_http_client, error_for_status, extract_api_key};
use crate::config::{NetworkConfig, ProviderConfig};
use crate::constants::llm::{CLAUDE_MAX_TOKENS, TEMPERATURE};
use crate::error::{RepocoderError, Result};
use crate::llm::ModelBackend;

const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20240620";
const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude messages-API backend.
///
/// # Configuration example
/// ```toml
/// [llm.providers.claude]
/// api_key = "sk-ant-..."
/// model = "claude-3-5-sonnet-20240620"
/// endpoint = "https://api.anthropic.com" # optional
/// ```
pub struct ClaudeBackend {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

#[derive(Serialize)]
struct ClaudeRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    system: String,
    messages: Vec<MessagePayload>,
}

#[derive(Serialize)]
struct MessagePayload {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ClaudeResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}

impl ClaudeBackend {
    pub fn new(config: &ProviderConfig, network: &NetworkConfig) -> Result<Self> {
        let api_key = extract_api_key(config, "Claude", API_KEY_ENV)?;

        let endpoint = config
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
            .to_string();

        let model = config
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            client: create_http_client(network)?,
            api_key,
            endpoint,
            model,
        })
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint)
    }
}

#[async_trait]
impl ModelBackend for ClaudeBackend {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let request = ClaudeRequest {
            model: self.model.clone(),
            max_tokens: CLAUDE_MAX_TOKENS,
            temperature: TEMPERATURE,
            system: system.to_string(),
            messages: vec![MessagePayload {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        tracing::debug!(
            "Claude API request: model={}, system_len={}, prompt_len={}",
            self.model,
            system.len(),
            prompt.len()
        );

        let response = self
            .client
            .post(self.messages_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&request)
            .send()
            .await?;
        let response = error_for_status("Claude", response).await?;

        let body: ClaudeResponse = response.json().await?;
        let text = body
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .map(|block| block.text)
            .collect::<Vec<_>>()
            .join("\n");

        if text.is_empty() {
            return Err(RepocoderError::Llm(
                "Claude returned no text content".to_string(),
            ));
        }
        Ok(text)
    }

    fn name(&self) -> &str {
        "claude"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use pretty_assertions::assert_eq;

    fn backend(server_url: String) -> ClaudeBackend {
        ClaudeBackend::new(
            &ProviderConfig {
                endpoint: Some(server_url),
                api_key: Some("sk-ant-test".to_string()),
                model: Some("claude-3-5-sonnet-20240620".to_string()),
            },
            &NetworkConfig::default(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_claude_success_response_parsing() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "sk-ant-test")
            .match_header("anthropic-version", ANTHROPIC_VERSION)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"content":[{"type":"text","text":"Hello from Claude"}]}"#,
            )
            .create_async()
            .await;

        let backend = backend(server.url());
        let result = backend.complete("system", "hi").await.unwrap();
        assert_eq!(result, "Hello from Claude");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_claude_joins_multiple_text_blocks() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"content":[{"type":"text","text":"one"},{"type":"tool_use"},{"type":"text","text":"two"}]}"#,
            )
            .create_async()
            .await;

        let backend = backend(server.url());
        let result = backend.complete("system", "hi").await.unwrap();
        assert_eq!(result, "one\ntwo");
    }

    #[tokio::test]
    async fn test_claude_api_error_401() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let backend = backend(server.url());
        let err = backend.complete("system", "hi").await.unwrap_err();
        match err {
            RepocoderError::LlmApi {
                provider, status, ..
            } => {
                assert_eq!(provider, "Claude");
                assert_eq!(status, 401);
            }
            other => panic!("Expected LlmApi, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_claude_empty_content_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/v1/messages")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"content":[]}"#)
            .create_async()
            .await;

        let backend = backend(server.url());
        let err = backend.complete("system", "hi").await.unwrap_err();
        assert!(matches!(err, RepocoderError::Llm(_)));
    }

    #[test]
    fn test_claude_missing_api_key() {
        // ANTHROPIC_API_KEY may exist in the environment; an empty explicit
        // key exercises the same rejection path.
        let Err(err) = ClaudeBackend::new(
            &ProviderConfig {
                api_key: Some("   ".to_string()),
                ..Default::default()
            },
            &NetworkConfig::default(),
        ) else {
            panic!("expected a configuration error");
        };
        assert!(matches!(err, RepocoderError::Config(_)));
    }
}
