//! Sentiment classification through the chat-completions API.

use super::ChatClient;
use crate::domain::gateways::{LlmError, SentimentClassifier};
use async_trait::async_trait;
use std::sync::Arc;

const SENTIMENT_INSTRUCTION: &str = "Predict whether the review is Positive or Negative.";

/// [`SentimentClassifier`] that asks the language model for a label.
///
/// The reply is lower-cased and returned as-is; interpretation happens in
/// [`crate::domain::entities::Sentiment::from_label`].
pub struct LlmSentimentClassifier {
    client: Arc<ChatClient>,
}

impl LlmSentimentClassifier {
    pub fn new(client: Arc<ChatClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SentimentClassifier for LlmSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<String, LlmError> {
        let label = self.client.complete(SENTIMENT_INSTRUCTION, text).await?;
        Ok(label.to_lowercase())
    }
}
