//! Discovery of review and side-effect pages on a drug detail page.

use std::sync::Arc;

use crate::domain::entities::{ResourceCategory, ResourceLinks, SourceSite};
use crate::domain::gateways::PageFetcher;
use crate::infrastructure::html::{Document, ExtractError};
use tracing::{debug, warn};
use url::Url;

/// Finds the "reviews" and "side effects" links of a drug detail page.
///
/// Only anchors inside the page's resources region are considered. Missing
/// links, a missing region and fetch failures all yield `NotFound` links.
pub struct LinkDiscoverer<F: PageFetcher> {
    fetcher: Arc<F>,
    site: Arc<SourceSite>,
}

impl<F: PageFetcher> LinkDiscoverer<F> {
    /// Creates a new discoverer.
    pub fn new(fetcher: Arc<F>, site: Arc<SourceSite>) -> Self {
        Self { fetcher, site }
    }

    /// Fetches `detail_url` and returns the discovered resource links.
    pub async fn discover(&self, detail_url: &Url) -> ResourceLinks {
        let raw = match self.fetcher.fetch(detail_url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %detail_url, error = %e, "Failed to fetch drug detail page");
                return ResourceLinks::default();
            }
        };

        match find_resource_links(&raw, &self.site) {
            Ok(links) => {
                debug!(
                    url = %detail_url,
                    reviews = links.reviews.is_found(),
                    side_effects = links.side_effects.is_found(),
                    "Resource links discovered"
                );
                links
            }
            Err(e) => {
                warn!(url = %detail_url, error = %e, "Failed to read drug detail page");
                ResourceLinks::default()
            }
        }
    }
}

fn find_resource_links(raw: &str, site: &SourceSite) -> Result<ResourceLinks, ExtractError> {
    let document = Document::parse(raw);
    let mut links = ResourceLinks::default();

    let Some(region) = document.select_first(&site.layout.resources_region)? else {
        debug!("Detail page has no resources region");
        return Ok(links);
    };

    for anchor in region.select(&site.layout.resource_anchors)? {
        let Some(href) = anchor.attribute("href") else {
            continue;
        };
        let Some(category) = ResourceCategory::from_link_text(&anchor.text()) else {
            continue;
        };
        if let Some(url) = site.absolutize(href) {
            links.offer(category, url);
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ResourceLink, SiteLayout};
    use crate::domain::gateways::{FetchError, MockPageFetcher};

    const DETAIL: &str = r#"
        <html><body>
            <a href="/comments/outside-region.html">Aspirin Reviews</a>
            <div class="more-resources">
                <h2>More about aspirin</h2>
                <ul>
                    <li><a href="/dosage/aspirin.html">Dosage Information</a></li>
                    <li><a href="/comments/aspirin/">Aspirin User REVIEWS (1,234)</a></li>
                    <li><a href="/sfx/aspirin-side-effects.html">Aspirin Side Effects</a></li>
                    <li><a href="/comments/aspirin-2/">More reviews</a></li>
                    <li><a>Side effects (no link)</a></li>
                </ul>
            </div>
        </body></html>
    "#;

    fn site() -> Arc<SourceSite> {
        Arc::new(SourceSite::new("https://www.drugs.com", SiteLayout::default()).unwrap())
    }

    fn detail_url() -> Url {
        Url::parse("https://www.drugs.com/aspirin.html").unwrap()
    }

    fn discoverer_with_page(body: &'static str) -> LinkDiscoverer<MockPageFetcher> {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|url| url.as_str() == "https://www.drugs.com/aspirin.html")
            .times(1)
            .returning(move |_| Ok(body.to_string()));

        LinkDiscoverer::new(Arc::new(fetcher), site())
    }

    #[tokio::test]
    async fn test_discovers_both_links() {
        let discoverer = discoverer_with_page(DETAIL);

        let links = discoverer.discover(&detail_url()).await;

        assert_eq!(
            links.reviews,
            ResourceLink::Found(Url::parse("https://www.drugs.com/comments/aspirin/").unwrap())
        );
        assert_eq!(
            links.side_effects,
            ResourceLink::Found(
                Url::parse("https://www.drugs.com/sfx/aspirin-side-effects.html").unwrap()
            )
        );
    }

    #[tokio::test]
    async fn test_missing_region_yields_not_found() {
        let discoverer = discoverer_with_page(
            r#"<html><body><a href="/comments/aspirin/">Reviews</a></body></html>"#,
        );

        let links = discoverer.discover(&detail_url()).await;

        assert_eq!(links, ResourceLinks::default());
    }

    #[tokio::test]
    async fn test_partial_links() {
        let discoverer = discoverer_with_page(
            r#"<div class="more-resources"><a href="/sfx/x.html">X side effects</a></div>"#,
        );

        let links = discoverer.discover(&detail_url()).await;

        assert_eq!(links.reviews, ResourceLink::NotFound);
        assert!(links.side_effects.is_found());
    }

    #[tokio::test]
    async fn test_script_and_offsite_links_do_not_shadow_real_ones() {
        let discoverer = discoverer_with_page(
            r#"<div class="more-resources">
                <a href="javascript:void(0)">Reviews</a>
                <a href="mailto:editor@example.org">Report side effects</a>
                <a href="//cdn.example.org/reviews.html">Reviews mirror</a>
                <a href="/comments/aspirin/">Aspirin Reviews</a>
                <a href="/sfx/aspirin-side-effects.html">Aspirin Side Effects</a>
            </div>"#,
        );

        let links = discoverer.discover(&detail_url()).await;

        assert_eq!(
            links.reviews,
            ResourceLink::Found(Url::parse("https://www.drugs.com/comments/aspirin/").unwrap())
        );
        assert_eq!(
            links.side_effects,
            ResourceLink::Found(
                Url::parse("https://www.drugs.com/sfx/aspirin-side-effects.html").unwrap()
            )
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_not_found() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(1).returning(|url| {
            Err(FetchError::HttpStatus {
                status: 500,
                url: url.to_string(),
            })
        });
        let discoverer = LinkDiscoverer::new(Arc::new(fetcher), site());

        let links = discoverer.discover(&detail_url()).await;

        assert_eq!(links, ResourceLinks::default());
    }
}
