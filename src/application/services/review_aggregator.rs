//! Review scraping and sentiment aggregation.

use std::sync::Arc;

use crate::domain::entities::{ResourceLink, Sentiment, SentimentTally, SiteLayout, SourceSite};
use crate::domain::gateways::{PageFetcher, SentimentClassifier};
use crate::infrastructure::html::{Document, ExtractError};
use futures::stream::{self, StreamExt};
use tracing::{debug, info, warn};
use url::Url;

/// Classifies every review on a drug's reviews page and counts the results.
///
/// Classification calls are issued concurrently, at most `concurrency` at a
/// time, and folded into the tally by a single writer. A failed call counts the
/// review as unknown without affecting the others.
pub struct ReviewAggregator<F: PageFetcher, C: SentimentClassifier> {
    fetcher: Arc<F>,
    classifier: Arc<C>,
    site: Arc<SourceSite>,
    concurrency: usize,
}

impl<F: PageFetcher, C: SentimentClassifier> ReviewAggregator<F, C> {
    /// Creates a new aggregator. A `concurrency` of zero is treated as one.
    pub fn new(
        fetcher: Arc<F>,
        classifier: Arc<C>,
        site: Arc<SourceSite>,
        concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            classifier,
            site,
            concurrency: concurrency.max(1),
        }
    }

    /// Tallies the sentiment of every review behind `reviews`.
    ///
    /// Returns the zero tally without any external call when the link is
    /// `NotFound`, and the zero tally when the page cannot be fetched or read.
    pub async fn aggregate(&self, reviews: &ResourceLink) -> SentimentTally {
        let ResourceLink::Found(url) = reviews else {
            debug!("No reviews page; skipping sentiment analysis");
            return SentimentTally::default();
        };

        let blocks = match self.scrape(url).await {
            Some(blocks) => blocks,
            None => return SentimentTally::default(),
        };

        let tally = self.classify_all(blocks).await;
        info!(
            url = %url,
            reviewed = tally.reviewed,
            positive = tally.positive,
            negative = tally.negative,
            "Reviews aggregated"
        );
        tally
    }

    async fn scrape(&self, url: &Url) -> Option<Vec<String>> {
        let raw = match self.fetcher.fetch(url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch reviews page");
                return None;
            }
        };

        match extract_review_blocks(&raw, &self.site.layout) {
            Ok(blocks) => Some(blocks),
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to read reviews page");
                None
            }
        }
    }

    async fn classify_all(&self, blocks: Vec<String>) -> SentimentTally {
        stream::iter(blocks)
            .map(|text| async move { self.classify_one(&text).await })
            .buffer_unordered(self.concurrency)
            .fold(SentimentTally::default(), |mut tally, sentiment| async move {
                tally.record(sentiment);
                tally
            })
            .await
    }

    async fn classify_one(&self, text: &str) -> Sentiment {
        match self.classifier.classify(text).await {
            Ok(label) => Sentiment::from_label(&label),
            Err(e) => {
                warn!(error = %e, "Sentiment classification failed; counting review as unknown");
                Sentiment::Unknown
            }
        }
    }
}

fn extract_review_blocks(raw: &str, layout: &SiteLayout) -> Result<Vec<String>, ExtractError> {
    let document = Document::parse(raw);

    Ok(document
        .select(&layout.review_blocks)?
        .into_iter()
        .map(|block| block.text())
        .collect())
}
