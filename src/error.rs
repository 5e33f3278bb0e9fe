use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepocoderError>;

#[derive(Error, Debug)]
pub enum RepocoderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid action '{0}': custom actions must be longer than 5 characters")]
    InvalidAction(String),

    #[error("No content found in the specified directory")]
    EmptyBundle,

    #[error("LLM provider error: {0}")]
    Llm(String),

    #[error("{provider} API error ({status}): {message}")]
    LlmApi {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parsing error: {0}")]
    ConfigParse(#[from] config::ConfigError),
}

impl RepocoderError {
    /// Returns an actionable hint for common failure modes.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            RepocoderError::InvalidAction(_) => Some(
                "Use one of the built-in actions (see 'repocoder-rs actions') or a longer custom instruction",
            ),
            RepocoderError::EmptyBundle => {
                Some("Check the target directory and your exclusion patterns")
            }
            RepocoderError::Config(msg) if msg.contains("API key") => {
                if msg.contains("Claude") {
                    Some(
                        "Set ANTHROPIC_API_KEY, pass --api-key, or add 'api_key' to [llm.providers.claude] in config.toml",
                    )
                } else if msg.contains("Gemini") {
                    Some(
                        "Set GEMINI_API_KEY, pass --api-key, or add 'api_key' to [llm.providers.gemini] in config.toml",
                    )
                } else {
                    Some("Set the provider api_key in config.toml")
                }
            }
            RepocoderError::Config(msg) if msg.contains("Unsupported LLM") => {
                Some("Choose either 'claude' or 'gemini'")
            }
            RepocoderError::LlmApi { status: 401, .. } => {
                Some("Check if your API key is valid and has not expired")
            }
            RepocoderError::LlmApi { status: 429, .. } => {
                Some("Rate limit exceeded. Wait a moment and try again, or upgrade your API plan")
            }
            RepocoderError::LlmApi { status, .. } if *status >= 500 => {
                Some("API service is temporarily unavailable. Try again in a few moments")
            }
            RepocoderError::Network(_) => {
                Some("Check your network connection, proxy settings, or API endpoint configuration")
            }
            _ => None,
        }
    }
}
