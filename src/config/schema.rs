//! Configuration structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::crawl::{DEFAULT_MAX_FILE_SIZE, DEFAULT_OUTPUT_FILE};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// LLM provider selection and settings.
    pub llm: LlmConfig,
    /// Crawl defaults merged into every invocation.
    pub crawl: CrawlConfig,
    /// Outbound HTTP settings.
    pub network: NetworkConfig,
    /// Terminal output settings.
    pub ui: UiConfig,
}

/// LLM configuration.
///
/// # Example
/// ```toml
/// [llm]
/// default_provider = "claude"
///
/// [llm.providers.claude]
/// api_key = "sk-ant-..."
/// model = "claude-3-5-sonnet-20240620"
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider used when `--llm` is not given.
    pub default_provider: String,
    /// Provider settings keyed by provider name.
    pub providers: HashMap<String, ProviderConfig>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            default_provider: "claude".to_string(),
            providers: HashMap::new(),
        }
    }
}

/// Settings for one entry under `[llm.providers.<name>]`.
#[derive(Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Custom API endpoint.
    pub endpoint: Option<String>,
    /// API key; falls back to the provider's environment variable.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name; each backend has a built-in default.
    pub model: Option<String>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the key itself.
        let masked = self.api_key.as_deref().map(|_| "***");
        f.debug_struct("ProviderConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &masked)
            .field("model", &self.model)
            .finish()
    }
}

/// Crawl configuration.
///
/// # Example
/// ```toml
/// [crawl]
/// exclude_dirs = ["dist"]
/// exclude_extensions = [".min.js"]
/// use_gitignore = true
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Extra directory names or wildcard patterns to exclude.
    pub exclude_dirs: Vec<String>,
    /// Extra file names or wildcard patterns to exclude.
    pub exclude_files: Vec<String>,
    /// Extra extension suffixes to exclude.
    pub exclude_extensions: Vec<String>,
    /// Whether the built-in default exclusion lists apply.
    pub use_default_excludes: bool,
    /// Whether `.gitignore` files contribute exclusion rules.
    pub use_gitignore: bool,
    /// Per-file size limit in bytes; larger files get a placeholder.
    pub max_file_size: u64,
    /// Name of the bundle artifact.
    pub output_file: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: Vec::new(),
            exclude_files: Vec::new(),
            exclude_extensions: Vec::new(),
            use_default_excludes: true,
            use_gitignore: true,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

/// Network configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Whole-request timeout in seconds.
    pub request_timeout: u64,
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            request_timeout: 300,
            connect_timeout: 10,
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiConfig {
    /// Whether output uses ANSI colors.
    pub colored: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}
