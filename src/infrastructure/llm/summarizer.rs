//! Side-effect summarization through the chat-completions API.

use super::ChatClient;
use crate::domain::gateways::{LlmError, Summarizer};
use async_trait::async_trait;
use std::sync::Arc;

const SUMMARY_INSTRUCTION: &str =
    "The given text describes side effects of a medical drug. Provide a summary.";

/// [`Summarizer`] backed by the same [`ChatClient`] as the sentiment classifier.
pub struct LlmSummarizer {
    client: Arc<ChatClient>,
}

impl LlmSummarizer {
    pub fn new(client: Arc<ChatClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Summarizer for LlmSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        self.client.complete(SUMMARY_INSTRUCTION, text).await
    }
}
