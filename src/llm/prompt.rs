//! Action vocabulary and prompt construction.

use crate::constants::llm::MIN_ACTION_LEN;
use crate::error::{RepocoderError, Result};

/// Built-in actions and their instruction sentences.
pub const ACTIONS: &[(&str, &str)] = &[
    (
        "code-review",
        "Please review the following code and provide suggestions or identify any errors.",
    ),
    (
        "code-improvement",
        "Please suggest improvements to the following code.",
    ),
    (
        "code-completion",
        "Please add to the following code by adding limited new files or missing functionality.",
    ),
    (
        "code-correction",
        "Correct the following code by fixing any errors or issues.",
    ),
];

/// Fixed style instruction sent with every request.
pub const SYSTEM_PROMPT: &str = "You are a world-class software developer. \
Provide complete, error-free code only when changes are made. \
Include ALL comments in updated code. Never use placeholders or ellipsis. \
State 'No changes required' without including code if no changes are needed. \
Format in Markdown with appropriate headers, lists, and code blocks. \
Use triple backticks for code blocks without language specification. \
Analyze thoroughly before responding. Provide clear, concise change lists. \
Follow the exact format in the instructions.";

/// Maps an action keyword to its instruction sentence.
///
/// Unknown keywords pass through verbatim, which is what allows arbitrary
/// custom actions.
pub fn resolve_action(action: &str) -> &str {
    ACTIONS
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, instruction)| *instruction)
        .unwrap_or(action)
}

/// Validates an action string before any crawl or network activity.
///
/// The length rule counts characters, not bytes.
pub fn validate_action(action: &str) -> Result<()> {
    if action.chars().count() <= MIN_ACTION_LEN {
        return Err(RepocoderError::InvalidAction(action.to_string()));
    }
    Ok(())
}

/// Builds the full user prompt: resolved instruction, reply-format
/// example, formatting constraints, and the bundle text at the end.
pub fn build_prompt(content: &str, action: &str) -> String {
    let instruction = resolve_action(action);

    format!(
        r#"Action: {instruction}
Instructions: You will be given a directory structure followed by a set of source files in the format: File Path: <file path> Code: <code>. Please apply the Action to each file. Please provide your response in the following format:

File Path: <file path>

Changes:
- <bulleted list of changes/suggestions>

Updated Code:

```
<full, complete file code>
```

Important:
1. Always provide the FULL, UPDATED code for each file that has changes.
2. DO NOT use placeholders or omit any parts of the code.
3. If no changes are required for a file, explicitly state "No changes required." under the Changes section and DO NOT include the "Updated Code" section.
4. Include ALL comments in the updated code.
5. Do not use ellipsis (...) or any other shorthand to indicate unchanged code.

Content:
{content}
"#
    )
}
