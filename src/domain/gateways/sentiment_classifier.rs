//! Gateway trait for classifying review sentiment.

use super::LlmError;
use async_trait::async_trait;

/// Assigns a coarse sentiment label to a block of free text.
///
/// The label is free-form natural language (e.g. `"Positive"` or
/// `"negative sentiment"`); callers interpret it with
/// [`crate::domain::entities::Sentiment::from_label`] rather than parsing it.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::LlmSentimentClassifier`] - chat-completion backed
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classifies `text`.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError`] if the service call fails. Callers count the
    /// review as unknown and continue.
    async fn classify(&self, text: &str) -> Result<String, LlmError>;
}
