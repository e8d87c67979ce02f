//! Drug name to detail page resolution.

use std::sync::Arc;

use crate::domain::entities::{DrugEntry, DrugQuery, Resolution, SiteLayout, SourceSite};
use crate::domain::gateways::PageFetcher;
use crate::infrastructure::html::{Document, ExtractError};
use tracing::{debug, info, warn};

/// Resolves a [`DrugQuery`] to the drug's detail page.
///
/// Looks the query up on the alphabetical index page for its shard key and
/// returns the first entry whose display name matches (see
/// [`DrugQuery::matches`]). Fetch and extraction failures resolve to
/// [`Resolution::NotFound`].
pub struct DrugResolver<F: PageFetcher> {
    fetcher: Arc<F>,
    site: Arc<SourceSite>,
}

impl<F: PageFetcher> DrugResolver<F> {
    /// Creates a new resolver.
    pub fn new(fetcher: Arc<F>, site: Arc<SourceSite>) -> Self {
        Self { fetcher, site }
    }

    /// Resolves `query` to an absolute detail page URL.
    ///
    /// An empty query is `NotFound` without any fetch.
    pub async fn resolve(&self, query: &DrugQuery) -> Resolution {
        if query.is_empty() {
            debug!("Empty drug query; skipping index lookup");
            return Resolution::NotFound;
        }

        let shard = query.shard_key();
        let index_url = match self.site.index_url(&shard) {
            Ok(url) => url,
            Err(e) => {
                warn!(shard = %shard, error = %e, "Cannot build index URL");
                return Resolution::NotFound;
            }
        };

        let raw = match self.fetcher.fetch(&index_url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %index_url, error = %e, "Failed to fetch drug index page");
                return Resolution::NotFound;
            }
        };

        let entries = match extract_entries(&raw, &self.site.layout) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(url = %index_url, error = %e, "Failed to read drug index page");
                return Resolution::NotFound;
            }
        };
        debug!(url = %index_url, candidates = entries.len(), "Index page scanned");

        let found = entries
            .iter()
            .filter(|entry| query.matches(&entry.name))
            .find_map(|entry| self.site.absolutize(&entry.href));

        match found {
            Some(url) => {
                info!(drug = %query, url = %url, "Drug resolved");
                Resolution::Found(url)
            }
            None => {
                info!(drug = %query, "Drug not found in index");
                Resolution::NotFound
            }
        }
    }
}

/// Extracts every linked entry from an index page, in document order.
fn extract_entries(raw: &str, layout: &SiteLayout) -> Result<Vec<DrugEntry>, ExtractError> {
    let document = Document::parse(raw);

    let entries = document
        .select(&layout.index_entries)?
        .into_iter()
        .filter_map(|anchor| {
            let href = anchor.attribute("href")?;
            Some(DrugEntry::new(anchor.text(), href))
        })
        .collect();

    Ok(entries)
}
