//! Model backend abstraction and prompt construction.
//!
//! The gateway surface is one trait with two concrete implementations
//! (Claude and Gemini) sharing the same prompt-building and error-shape
//! contract. Each request is a single synchronous attempt: no retry, no
//! backoff, no streaming.

/// Action vocabulary and prompt templates.
pub mod prompt;
/// Built-in backend implementations and factory helpers.
pub mod provider;

use async_trait::async_trait;

use crate::error::Result;

/// Unified interface implemented by all model backends.
///
/// The only required method is [`complete`](ModelBackend::complete), which
/// sends a pre-built `(system, prompt)` pair and returns the raw reply
/// text. Backends translate provider-level failures into
/// [`RepocoderError`](crate::error::RepocoderError) values; the command
/// layer decides whether a failure aborts or degrades to "no response".
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Sends one prompt pair to the remote model, single attempt.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;

    /// Backend name used in logs and error messages.
    fn name(&self) -> &str;
}
