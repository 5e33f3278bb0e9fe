pub mod schema;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::Result;
pub use schema::*;

/// Loads the application configuration.
///
/// Priority, highest last:
/// 1. Defaults ([`AppConfig::default`])
/// 2. Config file (`~/.config/repocoder/config.toml`)
/// 3. Environment variables (`REPOCODER__*`, double underscore nesting,
///    e.g. `REPOCODER__LLM__DEFAULT_PROVIDER=gemini`)
pub fn load_config() -> Result<AppConfig> {
    let mut builder = Config::builder()
        .set_default("llm.default_provider", "claude")?
        .set_default("crawl.use_default_excludes", true)?
        .set_default("crawl.use_gitignore", true)?
        .set_default(
            "crawl.max_file_size",
            crate::constants::crawl::DEFAULT_MAX_FILE_SIZE,
        )?
        .set_default(
            "crawl.output_file",
            crate::constants::crawl::DEFAULT_OUTPUT_FILE,
        )?
        .set_default("network.request_timeout", 300)?
        .set_default("network.connect_timeout", 10)?
        .set_default("ui.colored", true)?;

    if let Some(config_path) = get_config_path() {
        if config_path.exists() {
            builder = builder.add_source(File::from(config_path));
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("REPOCODER")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    Ok(config.try_deserialize()?)
}

/// Returns `~/.config/repocoder/config.toml` (platform equivalent).
fn get_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "repocoder").map(|dirs| dirs.config_dir().join("config.toml"))
}
