//! Command implementations.
//!
//! # Modules
//! - `send` - Full pipeline: crawl, bundle, prompt, API call, render.
//! - `bundle` - Crawl and write the bundle artifact only.
//! - `actions` - List the built-in action vocabulary.

/// Action vocabulary listing.
pub mod actions;
/// Bundle-only command flow.
pub mod bundle;
/// Full send pipeline.
pub mod send;

use std::path::PathBuf;

use crate::config::AppConfig;
use crate::crawl::{
    self, ExclusionOverrides, ExclusionSet, crawl_directory, read_files, render_root_tree,
};
use crate::error::{RepocoderError, Result};
use crate::ui;

/// Crawl-related options shared by `send` and `bundle`.
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Directory to crawl.
    pub dir: PathBuf,
    /// Bundle artifact path override.
    pub output: Option<PathBuf>,
    /// Extra directory exclusions.
    pub exclude_dirs: Vec<String>,
    /// Extra file exclusions.
    pub exclude_files: Vec<String>,
    /// Extra extension exclusions.
    pub exclude_extensions: Vec<String>,
    /// Disable the built-in default exclusion lists.
    pub no_default_excludes: bool,
    /// Disable `.gitignore` parsing.
    pub no_gitignore: bool,
}

/// Options for the `send` command.
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Crawl options.
    pub crawl: CrawlOptions,
    /// Action keyword or custom instruction.
    pub action: String,
    /// Provider name override (`claude` or `gemini`).
    pub llm: Option<String>,
    /// Model name override.
    pub model: Option<String>,
    /// API key override.
    pub api_key: Option<String>,
}

/// A written bundle plus the stats the commands report.
#[derive(Debug)]
pub struct BundleArtifact {
    /// The serialized bundle text.
    pub text: String,
    /// Number of files whose content is embedded.
    pub file_count: usize,
    /// Where the artifact was written.
    pub output: PathBuf,
}

/// Merges config-file crawl settings with command-line flags.
fn exclusion_overrides(options: &CrawlOptions, config: &AppConfig) -> ExclusionOverrides {
    let mut dirs = config.crawl.exclude_dirs.clone();
    dirs.extend(options.exclude_dirs.iter().cloned());
    let mut files = config.crawl.exclude_files.clone();
    files.extend(options.exclude_files.iter().cloned());
    let mut extensions = config.crawl.exclude_extensions.clone();
    extensions.extend(options.exclude_extensions.iter().cloned());

    ExclusionOverrides {
        dirs,
        files,
        extensions,
        use_defaults: config.crawl.use_default_excludes && !options.no_default_excludes,
        use_gitignore: config.crawl.use_gitignore && !options.no_gitignore,
    }
}

/// Runs the crawl stages and writes the bundle artifact.
///
/// This is the shared front half of `send` and `bundle`: exclusion merge,
/// traversal, tree rendering, content reading, serialization, write.
pub fn build_bundle(options: &CrawlOptions, config: &AppConfig) -> Result<BundleArtifact> {
    let overrides = exclusion_overrides(options, config);
    let exclusions = ExclusionSet::resolve(&options.dir, &overrides)?;

    let result = crawl_directory(&options.dir, &exclusions);
    if result.is_empty() {
        return Err(RepocoderError::EmptyBundle);
    }
    if result.files.is_empty() {
        ui::warning(
            "Every file was excluded; the bundle contains only the directory structure",
            config.ui.colored,
        );
    }

    let tree = render_root_tree(&options.dir, &result.structure);
    let contents = read_files(&result.files, config.crawl.max_file_size);
    let text = crawl::render_bundle(&result.files, &contents, &tree);

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.crawl.output_file));
    crawl::write_bundle(&output, &text)?;

    Ok(BundleArtifact {
        text,
        file_count: result.files.len(),
        output,
    })
}
