//! Source tree crawling and bundling.
//!
//! The pipeline that turns a directory into one text artifact:
//!
//! ```text
//! exclude.rs (merge rules)
//!   └── walker.rs (filtered traversal)
//!         ├── tree.rs (indented listing)
//!         └── reader.rs (encoding-resilient content)
//!               └── bundle.rs (single artifact)
//! ```

/// Bundle artifact serialization.
pub mod bundle;
/// Exclusion rule merging and `.gitignore` parsing.
pub mod exclude;
/// Encoding-fallback file reading.
pub mod reader;
/// Directory structure rendering.
pub mod tree;
/// Filtered directory traversal.
pub mod walker;

pub use bundle::{render_bundle, write_bundle};
pub use exclude::{ExclusionOverrides, ExclusionSet};
pub use reader::read_files;
pub use tree::{render_root_tree, render_tree};
pub use walker::{crawl_directory, CrawlResult, StructureEntry};
