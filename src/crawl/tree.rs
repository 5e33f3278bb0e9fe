//! Indented text rendering of the structure listing.

use std::path::Path;

use super::walker::StructureEntry;

const BRANCH: &str = "├── ";
const BRANCH_LAST: &str = "└── ";
const INDENT: &str = "    ";
const INDENT_CONTINUED: &str = "│   ";

/// Renders a structure listing as tree lines, one line per entry.
///
/// Non-last siblings get `├── `, the last sibling `└── `; ancestors that
/// were last at their level contribute blank indentation, others a vertical
/// continuation bar.
pub fn render_tree(structure: &[StructureEntry]) -> Vec<String> {
    let mut lines = Vec::new();
    render_level(structure, "", &mut lines);
    lines
}

/// Renders the tree with the root directory name as a leading line,
/// the shape the bundle artifact carries.
pub fn render_root_tree(root: &Path, structure: &[StructureEntry]) -> Vec<String> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    let mut lines = vec![format!("{}/", root_name)];
    lines.extend(render_tree(structure));
    lines
}

fn render_level(entries: &[StructureEntry], prefix: &str, lines: &mut Vec<String>) {
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i == entries.len() - 1;
        let branch = if is_last { BRANCH_LAST } else { BRANCH };
        lines.push(format!("{}{}{}", prefix, branch, entry.path));

        if let Some(children) = &entry.children {
            if !children.is_empty() {
                let continuation = if is_last { INDENT } else { INDENT_CONTINUED };
                let child_prefix = format!("{}{}", prefix, continuation);
                render_level(children, &child_prefix, lines);
            }
        }
    }
}
