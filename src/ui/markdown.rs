//! Model reply rendering and persistence.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::constants::llm::RESPONSE_FILE;
use crate::error::Result;

fn fence_regex() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    // An opening fence with a language annotation, e.g. ```python
    FENCE.get_or_init(|| Regex::new(r"```[A-Za-z0-9_+\-]+\n").expect("valid fence regex"))
}

/// Strips language annotations from code fence openers so fenced blocks
/// become language-neutral.
pub fn clean_code_fences(text: &str) -> String {
    fence_regex().replace_all(text, "```\n").into_owned()
}

/// Persists and prints a model reply, or a diagnostic when there is none.
///
/// The cleaned text is written to `response.md` in `dir`, overwriting any
/// previous run's file.
pub fn render_response(dir: &Path, response: Option<&str>, colored: bool) -> Result<()> {
    match response {
        Some(text) => {
            let cleaned = clean_code_fences(text);
            let output = dir.join(RESPONSE_FILE);
            std::fs::write(&output, &cleaned)?;
            println!("{}", cleaned);
            super::colors::success(
                &format!("Response saved to {}", output.display()),
                colored,
            );
        }
        None => {
            println!("No response received from the API.");
        }
    }
    Ok(())
}
