//! Language-model gateways.
//!
//! A single [`ChatClient`] is constructed from configuration and shared by:
//! - [`LlmSentimentClassifier`] - review sentiment labels
//! - [`LlmSummarizer`] - side-effect summaries

mod chat_client;
mod sentiment_classifier;
mod summarizer;

pub use chat_client::{ChatClient, ChatClientConfig};
pub use sentiment_classifier::LlmSentimentClassifier;
pub use summarizer::LlmSummarizer;
