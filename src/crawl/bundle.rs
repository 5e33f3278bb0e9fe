//! Bundle artifact serialization.
//!
//! Fixed wire format consumed as model input:
//!
//! ```text
//! Directory Structure:
//! <tree lines>
//!
//! File Contents:
//!
//! File Path: <path>
//! Code:
//! <content>
//!
//! ...
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Serializes the rendered tree and the aligned path/content sequences
/// into one bundle string.
///
/// Callers guarantee `paths.len() == contents.len()`; files appear in the
/// order given.
pub fn render_bundle(paths: &[PathBuf], contents: &[String], tree: &[String]) -> String {
    debug_assert_eq!(paths.len(), contents.len());

    let mut out = String::new();
    out.push_str("Directory Structure:\n");
    out.push_str(&tree.join("\n"));
    out.push_str("\n\nFile Contents:\n\n");
    for (path, content) in paths.iter().zip(contents) {
        let _ = write!(out, "File Path: {}\nCode:\n{}\n\n", path.display(), content);
    }
    out
}

/// Writes the bundle to disk, overwriting any previous artifact.
pub fn write_bundle(output: &Path, bundle: &str) -> Result<()> {
    fs::write(output, bundle)?;
    tracing::debug!("Wrote bundle artifact to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_bundle_format() {
        let paths = vec![PathBuf::from("a.txt"), PathBuf::from("sub/c.txt")];
        let contents = vec!["alpha".to_string(), "gamma".to_string()];
        let tree = vec![
            "project/".to_string(),
            "├── a.txt".to_string(),
            "└── sub".to_string(),
        ];

        let bundle = render_bundle(&paths, &contents, &tree);
        assert_eq!(
            bundle,
            "Directory Structure:\n\
             project/\n├── a.txt\n└── sub\n\
             \nFile Contents:\n\n\
             File Path: a.txt\nCode:\nalpha\n\n\
             File Path: sub/c.txt\nCode:\ngamma\n\n"
        );
    }

    #[test]
    fn test_bundle_block_count_matches_files() {
        let paths = vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")];
        let contents = vec!["x".to_string(), "y".to_string()];
        let bundle = render_bundle(&paths, &contents, &["root/".to_string()]);
        assert_eq!(bundle.matches("File Path: ").count(), 2);
    }

    #[test]
    fn test_write_bundle_persists() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("all_code.txt");
        write_bundle(&output, "Directory Structure:\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "Directory Structure:\n"
        );
    }

    #[test]
    fn test_write_bundle_io_error_surfaces() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("no-such-dir").join("all_code.txt");
        assert!(write_bundle(&output, "x").is_err());
    }
}
