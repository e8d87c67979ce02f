//! Gateway trait for condensing text.

use super::LlmError;
use async_trait::async_trait;

/// Produces a condensed natural-language summary of a block of text.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::LlmSummarizer`] - chat-completion backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizes `text`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the service call fails.
    async fn summarize(&self, text: &str) -> Result<String, LlmError>;
}
