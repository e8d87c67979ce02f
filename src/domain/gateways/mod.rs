//! Gateway trait definitions for the domain layer.
//!
//! Gateways abstract the external capabilities the pipeline depends on:
//! fetching pages, classifying text and summarizing text. Concrete adapters
//! live in [`crate::infrastructure`]; mock implementations are generated via
//! `mockall` for unit tests.
//!
//! # Available Gateways
//!
//! - [`PageFetcher`] - Raw page retrieval with bounded timeouts
//! - [`SentimentClassifier`] - Free-form sentiment labels for review text
//! - [`Summarizer`] - Natural-language summaries

pub mod llm_error;
pub mod page_fetcher;
pub mod sentiment_classifier;
pub mod summarizer;

pub use llm_error::LlmError;
pub use page_fetcher::{FetchError, PageFetcher};
pub use sentiment_classifier::SentimentClassifier;
pub use summarizer::Summarizer;

#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
#[cfg(test)]
pub use sentiment_classifier::MockSentimentClassifier;
#[cfg(test)]
pub use summarizer::MockSummarizer;
