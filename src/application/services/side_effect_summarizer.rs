//! Side-effect scraping and summarization.

use std::sync::Arc;

use crate::domain::entities::{ResourceLink, SideEffectText, SiteLayout, SourceSite};
use crate::domain::gateways::{PageFetcher, Summarizer};
use crate::infrastructure::html::{Document, ExtractError};
use tracing::{debug, warn};
use url::Url;

/// Returned when the drug has no side-effects page.
pub const NO_SIDE_EFFECTS_PAGE: &str = "No side effects found.";

/// Returned when the side-effects page yields no text to summarize.
pub const NO_VALID_CONTENT: &str = "No valid side-effect text found.";

/// Returned when the summarizer call fails.
pub const SUMMARY_UNAVAILABLE: &str = "Error generating summary.";

/// Consolidates a drug's side-effect sections and summarizes them.
///
/// Never fails: missing pages, empty content and summarizer errors each map
/// to a fixed placeholder.
pub struct SideEffectSummarizer<F: PageFetcher, S: Summarizer> {
    fetcher: Arc<F>,
    summarizer: Arc<S>,
    site: Arc<SourceSite>,
}

impl<F: PageFetcher, S: Summarizer> SideEffectSummarizer<F, S> {
    /// Creates a new side-effect summarizer.
    pub fn new(fetcher: Arc<F>, summarizer: Arc<S>, site: Arc<SourceSite>) -> Self {
        Self {
            fetcher,
            summarizer,
            site,
        }
    }

    /// Summarizes the side effects behind `side_effects`.
    ///
    /// Returns [`NO_SIDE_EFFECTS_PAGE`] for a `NotFound` link without any
    /// external call.
    pub async fn summarize(&self, side_effects: &ResourceLink) -> String {
        let ResourceLink::Found(url) = side_effects else {
            debug!("No side-effects page; skipping summary");
            return NO_SIDE_EFFECTS_PAGE.to_string();
        };

        let text = self.collect_text(url).await;
        self.summarize_text(&text).await
    }

    /// Fetches `url` and joins its side-effect sections.
    ///
    /// Fetch or extraction failures yield empty text.
    pub async fn collect_text(&self, url: &Url) -> SideEffectText {
        let raw = match self.fetcher.fetch(url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch side-effects page");
                return SideEffectText::default();
            }
        };

        match extract_side_effect_text(&raw, &self.site.layout) {
            Ok(text) => text,
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to read side-effects page");
                SideEffectText::default()
            }
        }
    }

    /// Summarizes already collected text with a single summarizer call.
    ///
    /// Blank text returns [`NO_VALID_CONTENT`] without calling the summarizer.
    pub async fn summarize_text(&self, text: &SideEffectText) -> String {
        if text.is_blank() {
            return NO_VALID_CONTENT.to_string();
        }

        match self.summarizer.summarize(text.as_str()).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(error = %e, "Side-effect summarization failed");
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }
}

fn extract_side_effect_text(
    raw: &str,
    layout: &SiteLayout,
) -> Result<SideEffectText, ExtractError> {
    let document = Document::parse(raw);
    let blocks = document.select(&layout.side_effect_blocks)?;

    Ok(SideEffectText::from_blocks(
        blocks.into_iter().map(|block| block.text()),
    ))
}
