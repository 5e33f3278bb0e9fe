//! Backend factory and shared HTTP plumbing.

pub mod claude;
pub mod gemini;

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use reqwest::Client;

use crate::config::{AppConfig, NetworkConfig, ProviderConfig};
use crate::error::{RepocoderError, Result};
use crate::llm::ModelBackend;

/// Global HTTP client shared by both backends (one connection pool).
static HTTP_CLIENT: OnceLock<Client> = OnceLock::new();

/// Gets or creates the shared HTTP client.
///
/// The first caller's [`NetworkConfig`] decides the timeouts.
pub(crate) fn create_http_client(network: &NetworkConfig) -> Result<Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client.clone());
    }

    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    let client = Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(network.request_timeout))
        .connect_timeout(Duration::from_secs(network.connect_timeout))
        .build()
        .map_err(|e| RepocoderError::Llm(format!("Failed to create HTTP client: {}", e)))?;

    let _ = HTTP_CLIENT.set(client.clone());
    Ok(client)
}

/// Overrides taken from the command line, applied over the config file.
#[derive(Debug, Clone, Default)]
pub struct BackendOverrides {
    /// Explicit API key; wins over config file and environment.
    pub api_key: Option<String>,
    /// Explicit model name.
    pub model: Option<String>,
}

/// Creates the backend for a provider name.
///
/// Unsupported names are configuration errors, surfaced before any request
/// is made.
pub fn create_backend(
    name: &str,
    config: &AppConfig,
    overrides: &BackendOverrides,
) -> Result<Arc<dyn ModelBackend>> {
    let provider_config = merged_provider_config(name, config, overrides);

    match name.to_lowercase().as_str() {
        "claude" => Ok(Arc::new(claude::ClaudeBackend::new(
            &provider_config,
            &config.network,
        )?)),
        "gemini" => Ok(Arc::new(gemini::GeminiBackend::new(
            &provider_config,
            &config.network,
        )?)),
        other => Err(RepocoderError::Config(format!(
            "Unsupported LLM: {}. Please choose either 'claude' or 'gemini'.",
            other
        ))),
    }
}

fn merged_provider_config(
    name: &str,
    config: &AppConfig,
    overrides: &BackendOverrides,
) -> ProviderConfig {
    let mut provider_config = config
        .llm
        .providers
        .get(&name.to_lowercase())
        .cloned()
        .unwrap_or_default();
    if overrides.api_key.is_some() {
        provider_config.api_key = overrides.api_key.clone();
    }
    if overrides.model.is_some() {
        provider_config.model = overrides.model.clone();
    }
    provider_config
}

/// Resolves the API key: explicit config value first, then the provider's
/// environment variable. Absence of both is a configuration error.
pub(crate) fn extract_api_key(
    config: &ProviderConfig,
    provider: &str,
    env_var: &str,
) -> Result<String> {
    config
        .api_key
        .clone()
        .or_else(|| std::env::var(env_var).ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            RepocoderError::Config(format!(
                "{} API key not found. Set {} or configure in config.toml",
                provider, env_var
            ))
        })
}

/// Maps a non-success HTTP response to a structured API error.
pub(crate) async fn error_for_status(
    provider: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RepocoderError::LlmApi {
        provider: provider.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use serial_test::serial;

    #[test]
    fn test_unsupported_provider_is_config_error() {
        let config = AppConfig::default();
        let Err(err) = create_backend("mistral", &config, &BackendOverrides::default()) else {
            panic!("expected a configuration error");
        };
        match err {
            RepocoderError::Config(msg) => assert!(msg.contains("Unsupported LLM: mistral")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_config_error() {
        // No explicit key and a guaranteed-absent env var.
        let config = ProviderConfig::default();
        let err = extract_api_key(&config, "Claude", "REPOCODER_TEST_NO_SUCH_KEY").unwrap_err();
        match err {
            RepocoderError::Config(msg) => {
                assert!(msg.contains("Claude API key not found"));
                assert!(msg.contains("REPOCODER_TEST_NO_SUCH_KEY"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_explicit_key_wins_over_environment() {
        let config = ProviderConfig {
            api_key: Some("explicit".to_string()),
            ..Default::default()
        };
        let key = extract_api_key(&config, "Claude", "REPOCODER_TEST_NO_SUCH_KEY").unwrap();
        assert_eq!(key, "explicit");
    }

    #[test]
    fn test_backend_overrides_replace_config_values() {
        let config = AppConfig::default();
        let overrides = BackendOverrides {
            api_key: Some("cli-key".to_string()),
            model: Some("cli-model".to_string()),
        };
        let merged = merged_provider_config("claude", &config, &overrides);
        assert_eq!(merged.api_key.as_deref(), Some("cli-key"));
        assert_eq!(merged.model.as_deref(), Some("cli-model"));
    }
}
