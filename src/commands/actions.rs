//! The `actions` command: list the built-in action keywords.

use colored::Colorize;

use crate::config::AppConfig;
use crate::llm::prompt::ACTIONS;

/// Prints each built-in action keyword with its full instruction.
pub fn run(config: &AppConfig) {
    println!("Available actions:");
    for (keyword, instruction) in ACTIONS {
        if config.ui.colored {
            println!("  {}  {}", keyword.cyan().bold(), instruction);
        } else {
            println!("  {}  {}", keyword, instruction);
        }
    }
    println!();
    println!("Any other string longer than 5 characters is sent as a custom instruction.");
}
