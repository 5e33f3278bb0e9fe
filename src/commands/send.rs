//! The `send` command: crawl, bundle, prompt, one API call, render.

use std::path::Path;

use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::llm::prompt::{SYSTEM_PROMPT, build_prompt, validate_action};
use crate::llm::provider::{BackendOverrides, create_backend};
use crate::ui;

use super::{SendOptions, build_bundle};

/// Runs the full pipeline.
///
/// The action is validated and the backend constructed before any network
/// traffic, so bad input fails fast. The single API attempt is made with no
/// retry; a failed call is reported and the run degrades to "no response"
/// rather than aborting.
pub async fn run(options: &SendOptions, config: &AppConfig) -> Result<()> {
    let colored = config.ui.colored;

    validate_action(&options.action)?;

    let provider = options
        .llm
        .clone()
        .unwrap_or_else(|| config.llm.default_provider.clone());
    let overrides = BackendOverrides {
        api_key: options.api_key.clone(),
        model: options.model.clone(),
    };
    let backend = create_backend(&provider, config, &overrides)?;

    ui::step("1/3", "Crawling directory and writing bundle", colored);
    let artifact = build_bundle(&options.crawl, config)?;
    info!(
        files = artifact.file_count,
        output = %artifact.output.display(),
        "bundle written"
    );

    ui::step("2/3", &format!("Sending to {}", backend.name()), colored);
    let prompt = build_prompt(&artifact.text, &options.action);
    debug!(prompt_bytes = prompt.len(), "prompt assembled");

    let response = match backend.complete(SYSTEM_PROMPT, &prompt).await {
        Ok(text) => Some(text),
        Err(e) => {
            ui::error(&e.to_string(), colored);
            if let Some(hint) = e.suggestion() {
                println!("{}", ui::info(hint, colored));
            }
            None
        }
    };

    ui::step("3/3", "Rendering response", colored);
    ui::render_response(Path::new("."), response.as_deref(), colored)
}
