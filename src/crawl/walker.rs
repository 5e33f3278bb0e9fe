//! Filtered directory traversal.
//!
//! Top-down recursive walk producing the nested structure listing and the
//! flat file list consumed by the reader and bundle writer. Excluded
//! directories are hard-pruned: their subtrees are never visited.

use std::fs;
use std::path::{Path, PathBuf};

use super::exclude::ExclusionSet;

/// One entry of the structure listing.
///
/// `children` is `None` for a file and `Some` for a directory; a directory
/// left empty after filtering still appears, with no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureEntry {
    /// Path relative to the crawl root.
    pub path: String,
    /// Nested entries for a directory, `None` for a file.
    pub children: Option<Vec<StructureEntry>>,
}

impl StructureEntry {
    fn file(path: String) -> Self {
        Self {
            path,
            children: None,
        }
    }

    fn dir(path: String, children: Vec<StructureEntry>) -> Self {
        Self {
            path,
            children: Some(children),
        }
    }

    /// Total number of entries in this subtree, self included.
    pub fn count(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map(count_entries)
            .unwrap_or(0)
    }
}

/// Counts all entries in a structure listing, transitively.
pub fn count_entries(entries: &[StructureEntry]) -> usize {
    entries.iter().map(StructureEntry::count).sum()
}

/// Output of one crawl: structure listing plus flat file list.
///
/// `files` holds root-joined paths in traversal order; it is index-aligned
/// with the contents the reader produces later.
#[derive(Debug, Default)]
pub struct CrawlResult {
    /// Nested structure listing in traversal order.
    pub structure: Vec<StructureEntry>,
    /// Surviving file paths in traversal order.
    pub files: Vec<PathBuf>,
}

impl CrawlResult {
    /// True when the crawl found nothing at all.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty() && self.files.is_empty()
    }
}

/// Crawls `root` top-down, applying the exclusion set.
///
/// Directory entries are visited in name order so the output is
/// deterministic across platforms; within a directory, files come before
/// subdirectories. Unreadable subdirectories are logged and skipped, never
/// aborting the crawl.
pub fn crawl_directory(root: &Path, exclusions: &ExclusionSet) -> CrawlResult {
    let mut result = CrawlResult::default();
    result.structure = walk(root, Path::new(""), exclusions, &mut result.files);
    result
}

fn walk(
    dir: &Path,
    rel: &Path,
    exclusions: &ExclusionSet,
    files: &mut Vec<PathBuf>,
) -> Vec<StructureEntry> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) => {
            tracing::warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut file_names: Vec<String> = Vec::new();
    let mut dir_names: Vec<String> = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Error reading entry in {}: {}", dir.display(), e);
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        // Symlinks are not followed; anything that is not a plain directory
        // is treated as a file.
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => dir_names.push(name),
            Ok(_) => file_names.push(name),
            Err(e) => {
                tracing::warn!("Could not stat {}: {}", entry.path().display(), e);
            }
        }
    }
    file_names.sort();
    dir_names.sort();

    let mut entries = Vec::new();

    for name in file_names {
        if exclusions.is_file_excluded(&name) {
            continue;
        }
        let rel_path = rel.join(&name);
        entries.push(StructureEntry::file(rel_path.display().to_string()));
        files.push(dir.join(&name));
    }

    for name in dir_names {
        if exclusions.is_dir_excluded(&name) {
            continue;
        }
        let rel_path = rel.join(&name);
        let children = walk(&dir.join(&name), &rel_path, exclusions, files);
        entries.push(StructureEntry::dir(rel_path.display().to_string(), children));
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::exclude::ExclusionOverrides;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn exclusions(tmp: &TempDir, overrides: ExclusionOverrides) -> ExclusionSet {
        let mut overrides = overrides;
        overrides.use_gitignore = false;
        ExclusionSet::resolve(tmp.path(), &overrides).unwrap()
    }

    /// Two files plus one subdirectory holding a third.
    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "alpha").unwrap();
        fs::write(tmp.path().join("b.txt"), "beta").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub/c.txt"), "gamma").unwrap();
        tmp
    }

    fn paths(entries: &[StructureEntry]) -> Vec<String> {
        let mut out = Vec::new();
        fn visit(entries: &[StructureEntry], out: &mut Vec<String>) {
            for entry in entries {
                out.push(entry.path.clone());
                if let Some(children) = &entry.children {
                    visit(children, out);
                }
            }
        }
        visit(entries, &mut out);
        out
    }

    #[test]
    fn test_fixture_traversal_order() {
        let tmp = fixture();
        let excl = exclusions(&tmp, ExclusionOverrides::default());
        let result = crawl_directory(tmp.path(), &excl);

        assert_eq!(paths(&result.structure), vec!["a.txt", "b.txt", "sub", "sub/c.txt"]);
        assert_eq!(
            result.files,
            vec![
                tmp.path().join("a.txt"),
                tmp.path().join("b.txt"),
                tmp.path().join("sub/c.txt"),
            ]
        );
    }

    #[test]
    fn test_excluded_directory_is_pruned_transitively() {
        let tmp = fixture();
        fs::create_dir_all(tmp.path().join("build/nested")).unwrap();
        fs::write(tmp.path().join("build/out.txt"), "x").unwrap();
        fs::write(tmp.path().join("build/nested/deep.txt"), "y").unwrap();

        let excl = exclusions(
            &tmp,
            ExclusionOverrides {
                dirs: vec!["build".to_string()],
                ..Default::default()
            },
        );
        let result = crawl_directory(tmp.path(), &excl);

        let all = paths(&result.structure);
        assert!(all.iter().all(|p| !p.contains("build")));
        assert!(result.files.iter().all(|p| !p.to_string_lossy().contains("build")));
    }

    #[test]
    fn test_file_exclusion_by_name_extension_and_wildcard() {
        let tmp = fixture();
        fs::write(tmp.path().join("debug.log"), "log").unwrap();
        fs::write(tmp.path().join("temp1.txt"), "tmp").unwrap();
        fs::write(tmp.path().join("keep_temp1.txt"), "keep").unwrap();

        let excl = exclusions(
            &tmp,
            ExclusionOverrides {
                files: vec!["b.txt".to_string(), "temp*.txt".to_string()],
                extensions: vec![".log".to_string()],
                ..Default::default()
            },
        );
        let result = crawl_directory(tmp.path(), &excl);

        let all = paths(&result.structure);
        assert!(!all.contains(&"b.txt".to_string()));
        assert!(!all.contains(&"debug.log".to_string()));
        assert!(!all.contains(&"temp1.txt".to_string()));
        assert!(all.contains(&"keep_temp1.txt".to_string()));
    }

    #[test]
    fn test_empty_directory_still_recorded() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("empty")).unwrap();

        let excl = exclusions(&tmp, ExclusionOverrides::default());
        let result = crawl_directory(tmp.path(), &excl);

        assert_eq!(
            result.structure,
            vec![StructureEntry {
                path: "empty".to_string(),
                children: Some(Vec::new()),
            }]
        );
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_directory_emptied_by_filtering_still_recorded() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("logs")).unwrap();
        fs::write(tmp.path().join("logs/run.log"), "x").unwrap();

        let excl = exclusions(
            &tmp,
            ExclusionOverrides {
                extensions: vec![".log".to_string()],
                ..Default::default()
            },
        );
        let result = crawl_directory(tmp.path(), &excl);

        assert_eq!(paths(&result.structure), vec!["logs"]);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_crawl_is_idempotent() {
        let tmp = fixture();
        let excl = exclusions(&tmp, ExclusionOverrides::default());

        let first = crawl_directory(tmp.path(), &excl);
        let second = crawl_directory(tmp.path(), &excl);

        assert_eq!(first.structure, second.structure);
        assert_eq!(first.files, second.files);
    }

    #[test]
    fn test_missing_root_yields_empty_result() {
        let tmp = TempDir::new().unwrap();
        let excl = exclusions(&tmp, ExclusionOverrides::default());
        let result = crawl_directory(&tmp.path().join("does-not-exist"), &excl);
        assert!(result.is_empty());
    }

    #[test]
    fn test_count_entries_matches_flattened_paths() {
        let tmp = fixture();
        let excl = exclusions(&tmp, ExclusionOverrides::default());
        let result = crawl_directory(tmp.path(), &excl);
        assert_eq!(count_entries(&result.structure), paths(&result.structure).len());
    }
}
