//! The `bundle` command: crawl and write the artifact, no API call.

use crate::config::AppConfig;
use crate::error::Result;
use crate::ui;

use super::{CrawlOptions, build_bundle};

/// Crawls the directory and writes the bundle, reporting what was written.
pub fn run(options: &CrawlOptions, config: &AppConfig) -> Result<()> {
    let artifact = build_bundle(options, config)?;
    ui::success(
        &format!(
            "Bundled {} file(s) into {}",
            artifact.file_count,
            artifact.output.display()
        ),
        config.ui.colored,
    );
    Ok(())
}
