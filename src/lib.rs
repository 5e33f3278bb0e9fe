//! repocoder-rs bundles a source tree into a single text file and sends it
//! to an LLM provider with an action-specific prompt.
//!
//! The pipeline has three stages:
//! 1. Crawl: walk the directory, apply exclusion rules, read file contents
//!    with an encoding fallback cascade ([`crawl`]).
//! 2. Prompt: wrap the bundle in the instruction for the requested action
//!    ([`llm::prompt`]).
//! 3. Send: one request to Claude or Gemini, then the reply is cleaned,
//!    saved to `response.md` and printed ([`llm::provider`], [`ui`]).

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod crawl;
pub mod error;
pub mod llm;
pub mod ui;
