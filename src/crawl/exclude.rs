//! Exclusion rule resolution.
//!
//! Merges three rule sources into one immutable [`ExclusionSet`]:
//! built-in defaults, caller-supplied lists, and `.gitignore`-derived
//! patterns. Wildcard patterns are compiled with `globset`.

use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::constants::crawl::{
    DEFAULT_EXCLUDE_DIRS, DEFAULT_EXCLUDE_EXTENSIONS, DEFAULT_EXCLUDE_FILES, IGNORE_FILE_NAME,
};
use crate::error::{RepocoderError, Result};

/// Caller-supplied additions to the default exclusion rules.
#[derive(Debug, Clone)]
pub struct ExclusionOverrides {
    /// Extra directory names or wildcard patterns.
    pub dirs: Vec<String>,
    /// Extra file names or wildcard patterns.
    pub files: Vec<String>,
    /// Extra extension suffixes (with or without leading dot).
    pub extensions: Vec<String>,
    /// Whether the built-in default lists apply.
    pub use_defaults: bool,
    /// Whether `.gitignore` files are parsed for extra rules.
    pub use_gitignore: bool,
}

impl Default for ExclusionOverrides {
    fn default() -> Self {
        Self {
            dirs: Vec::new(),
            files: Vec::new(),
            extensions: Vec::new(),
            use_defaults: true,
            use_gitignore: true,
        }
    }
}

/// Merged exclusion rules, immutable once resolved.
///
/// Literal names are kept in sets, wildcard patterns in compiled
/// [`GlobSet`]s, extensions as plain suffixes. Matching is always against
/// a single path component (file or directory name), never a full path.
#[derive(Debug)]
pub struct ExclusionSet {
    dir_names: BTreeSet<String>,
    dir_globs: GlobSet,
    file_names: BTreeSet<String>,
    file_globs: GlobSet,
    extensions: Vec<String>,
}

impl ExclusionSet {
    /// Resolves the merged exclusion set for one crawl of `root`.
    ///
    /// Gitignore parsing failures are logged and ignored; a missing ignore
    /// file is not an error. Invalid caller-supplied wildcard patterns are
    /// configuration errors.
    pub fn resolve(root: &Path, overrides: &ExclusionOverrides) -> Result<Self> {
        let mut dirs: Vec<String> = Vec::new();
        let mut files: Vec<String> = Vec::new();
        let mut extensions: Vec<String> = Vec::new();

        if overrides.use_defaults {
            dirs.extend(DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()));
            files.extend(DEFAULT_EXCLUDE_FILES.iter().map(|s| s.to_string()));
            extensions.extend(DEFAULT_EXCLUDE_EXTENSIONS.iter().map(|s| s.to_string()));
        }

        dirs.extend(overrides.dirs.iter().cloned());
        files.extend(overrides.files.iter().cloned());
        extensions.extend(overrides.extensions.iter().map(|e| normalize_extension(e)));

        if overrides.use_gitignore {
            let mut candidates = vec![root.join(IGNORE_FILE_NAME)];
            if let Some(parent) = root.parent() {
                candidates.push(parent.join(IGNORE_FILE_NAME));
            }
            for candidate in candidates {
                let rules = parse_ignore_file(&candidate);
                dirs.extend(rules.dirs);
                files.extend(rules.files);
                extensions.extend(rules.extensions);
            }
        }

        Self::from_lists(&dirs, &files, extensions)
    }

    fn from_lists(dirs: &[String], files: &[String], extensions: Vec<String>) -> Result<Self> {
        let mut dir_names = BTreeSet::new();
        let mut dir_glob_builder = GlobSetBuilder::new();
        for dir in dirs {
            if dir.contains('*') {
                dir_glob_builder.add(compile_glob(dir)?);
            } else {
                dir_names.insert(dir.clone());
            }
        }

        let mut file_names = BTreeSet::new();
        let mut file_glob_builder = GlobSetBuilder::new();
        for file in files {
            if file.contains('*') {
                file_glob_builder.add(compile_glob(file)?);
            } else {
                file_names.insert(file.clone());
            }
        }

        Ok(Self {
            dir_names,
            dir_globs: dir_glob_builder
                .build()
                .map_err(|e| RepocoderError::Config(format!("Invalid glob set: {}", e)))?,
            file_names,
            file_globs: file_glob_builder
                .build()
                .map_err(|e| RepocoderError::Config(format!("Invalid glob set: {}", e)))?,
            extensions,
        })
    }

    /// Whether a directory with this name is pruned before descending.
    pub fn is_dir_excluded(&self, name: &str) -> bool {
        self.dir_names.contains(name) || self.dir_globs.is_match(Path::new(name))
    }

    /// Whether a file with this name is dropped from the crawl.
    pub fn is_file_excluded(&self, name: &str) -> bool {
        self.file_names.contains(name)
            || self.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
            || self.file_globs.is_match(Path::new(name))
    }
}

fn compile_glob(pattern: &str) -> Result<Glob> {
    Glob::new(pattern)
        .map_err(|e| RepocoderError::Config(format!("Invalid glob pattern \"{}\": {}", pattern, e)))
}

fn normalize_extension(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Rules extracted from one ignore file.
#[derive(Debug, Default)]
struct IgnoreRules {
    dirs: Vec<String>,
    files: Vec<String>,
    extensions: Vec<String>,
}

/// Parses one ignore file, line-oriented.
///
/// Classification: trailing `/` is a directory pattern, leading `*.` an
/// extension suffix, any other line containing `*` a wildcard file pattern,
/// anything else a literal name matching both files and directories.
/// Invalid wildcard lines are skipped with a warning; so is an unreadable
/// file. A missing file yields no rules.
fn parse_ignore_file(path: &Path) -> IgnoreRules {
    let mut rules = IgnoreRules::default();

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return rules,
        Err(e) => {
            tracing::warn!("Could not read ignore file {}: {}", path.display(), e);
            return rules;
        }
    };

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(dir) = line.strip_suffix('/') {
            rules.dirs.push(dir.to_string());
        } else if let Some(suffix) = line.strip_prefix("*.") {
            rules.extensions.push(format!(".{}", suffix));
        } else if line.contains('*') {
            // Validate here so a bad gitignore line stays non-fatal.
            match Glob::new(line) {
                Ok(_) => rules.files.push(line.to_string()),
                Err(e) => {
                    tracing::warn!(
                        "Skipping invalid pattern \"{}\" in {}: {}",
                        line,
                        path.display(),
                        e
                    );
                }
            }
        } else {
            rules.files.push(line.to_string());
            rules.dirs.push(line.to_string());
        }
    }

    rules
}
