//! End-to-end drug analysis pipeline.

use std::sync::Arc;

use crate::application::services::{
    DrugResolver, LinkDiscoverer, ReviewAggregator, SideEffectSummarizer,
};
use crate::domain::entities::{
    AnalysisResult, DrugQuery, Resolution, ResourceLinks, RunStage, SourceSite,
};
use crate::domain::gateways::{PageFetcher, SentimentClassifier, Summarizer};
use async_trait::async_trait;
use tracing::{info, instrument};
use url::Url;

/// Errors that abort an analysis run.
///
/// Every other failure is absorbed by the stage where it occurs and surfaces
/// as a zero tally or a placeholder summary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Drug '{0}' not found")]
    DrugNotFound(String),
}

/// Tunables for [`AnalysisService`].
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    /// Maximum number of reviews classified at the same time.
    pub classify_concurrency: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            classify_concurrency: 4,
        }
    }
}

/// Anything able to run a full analysis for raw user input.
///
/// Lets the HTTP layer hold the pipeline behind a trait object.
#[async_trait]
pub trait DrugAnalyzer: Send + Sync {
    /// Runs the pipeline for `raw_input`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DrugNotFound`] if the drug cannot be resolved.
    async fn analyze(&self, raw_input: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Sequences resolution, link discovery, review aggregation and side-effect
/// summarization.
///
/// Aggregation and summarization share no state and run concurrently once
/// the links are known.
pub struct AnalysisService<F, C, S>
where
    F: PageFetcher,
    C: SentimentClassifier,
    S: Summarizer,
{
    resolver: DrugResolver<F>,
    discoverer: LinkDiscoverer<F>,
    reviews: ReviewAggregator<F, C>,
    side_effects: SideEffectSummarizer<F, S>,
}

impl<F, C, S> AnalysisService<F, C, S>
where
    F: PageFetcher,
    C: SentimentClassifier,
    S: Summarizer,
{
    /// Creates the pipeline over shared gateways.
    pub fn new(
        fetcher: Arc<F>,
        classifier: Arc<C>,
        summarizer: Arc<S>,
        site: Arc<SourceSite>,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            resolver: DrugResolver::new(fetcher.clone(), site.clone()),
            discoverer: LinkDiscoverer::new(fetcher.clone(), site.clone()),
            reviews: ReviewAggregator::new(
                fetcher.clone(),
                classifier,
                site.clone(),
                options.classify_concurrency,
            ),
            side_effects: SideEffectSummarizer::new(fetcher, summarizer, site),
        }
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DrugNotFound`] if the drug cannot be resolved.
    pub async fn run(&self, raw_input: &str) -> Result<AnalysisResult, AnalysisError> {
        self.run_with_progress(raw_input, |_| {}).await
    }

    /// Runs the full pipeline, reporting each stage to `progress`.
    ///
    /// `Aggregating` and `Summarizing` are both reported before their
    /// concurrent execution starts.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DrugNotFound`] if the drug cannot be resolved.
    #[instrument(skip(self, progress))]
    pub async fn run_with_progress<P>(
        &self,
        raw_input: &str,
        progress: P,
    ) -> Result<AnalysisResult, AnalysisError>
    where
        P: Fn(RunStage) + Send + Sync,
    {
        let (query, drug_url, links) = self.locate_with_progress(raw_input, &progress).await?;

        progress(RunStage::Aggregating);
        progress(RunStage::Summarizing);
        let (tally, side_effect_summary) = tokio::join!(
            self.reviews.aggregate(&links.reviews),
            self.side_effects.summarize(&links.side_effects),
        );

        progress(RunStage::Done);
        info!(
            drug = %query,
            positive = tally.positive,
            negative = tally.negative,
            reviewed = tally.reviewed,
            "Analysis complete"
        );

        Ok(AnalysisResult {
            query,
            drug_url,
            links,
            tally,
            side_effect_summary,
        })
    }

    /// Resolves the drug and discovers its resource links without scraping
    /// reviews or side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DrugNotFound`] if the drug cannot be resolved.
    pub async fn locate(
        &self,
        raw_input: &str,
    ) -> Result<(DrugQuery, Url, ResourceLinks), AnalysisError> {
        self.locate_with_progress(raw_input, &|_| {}).await
    }

    async fn locate_with_progress<P>(
        &self,
        raw_input: &str,
        progress: &P,
    ) -> Result<(DrugQuery, Url, ResourceLinks), AnalysisError>
    where
        P: Fn(RunStage) + Send + Sync,
    {
        let query = DrugQuery::new(raw_input);

        progress(RunStage::Resolving);
        let drug_url = match self.resolver.resolve(&query).await {
            Resolution::Found(url) => url,
            Resolution::NotFound => {
                progress(RunStage::Failed);
                return Err(AnalysisError::DrugNotFound(raw_input.trim().to_string()));
            }
        };

        progress(RunStage::Discovering);
        let links = self.discoverer.discover(&drug_url).await;

        Ok((query, drug_url, links))
    }
}

#[async_trait]
impl<F, C, S> DrugAnalyzer for AnalysisService<F, C, S>
where
    F: PageFetcher,
    C: SentimentClassifier,
    S: Summarizer,
{
    async fn analyze(&self, raw_input: &str) -> Result<AnalysisResult, AnalysisError> {
        self.run(raw_input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::side_effect_summarizer::NO_SIDE_EFFECTS_PAGE;
    use crate::domain::entities::{ResourceLink, SentimentTally, SiteLayout};
    use crate::domain::gateways::{
        FetchError, MockPageFetcher, MockSentimentClassifier, MockSummarizer,
    };
    use std::sync::Mutex;

    const BASE: &str = "https://www.drugs.com";

    fn site() -> Arc<SourceSite> {
        Arc::new(SourceSite::new(BASE, SiteLayout::default()).unwrap())
    }

    fn page_for(url: &Url) -> Result<String, FetchError> {
        let body = match url.path() {
            "/alpha/as.html" => {
                r#"<ul class="ddc-list-column-2"><li><a href="/aspirin.html">Aspirin</a></li></ul>"#
            }
            "/aspirin.html" => {
                r#"<div class="more-resources">
                    <a href="/comments/aspirin/">Aspirin Reviews</a>
                    <a href="/sfx/aspirin-side-effects.html">Aspirin Side Effects</a>
                </div>"#
            }
            "/comments/aspirin/" => {
                r#"<div class="ddc-comment ddc-box ddc-mgb-2">Great</div>
                   <div class="ddc-comment ddc-box ddc-mgb-2">Awful</div>"#
            }
            "/sfx/aspirin-side-effects.html" => {
                r#"<div class="ddc-accordion-content">Nausea.</div>"#
            }
            _ => {
                return Err(FetchError::HttpStatus {
                    status: 404,
                    url: url.to_string(),
                });
            }
        };
        Ok(body.to_string())
    }

    fn service_with_site_pages() -> AnalysisService<MockPageFetcher, MockSentimentClassifier, MockSummarizer> {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(page_for);

        let mut classifier = MockSentimentClassifier::new();
        classifier.expect_classify().returning(|text| {
            Ok(if text == "Great" { "Positive" } else { "Negative" }.to_string())
        });

        let mut summarizer = MockSummarizer::new();
        summarizer
            .expect_summarize()
            .times(1)
            .returning(|text| Ok(format!("Summary of: {text}")));

        AnalysisService::new(
            Arc::new(fetcher),
            Arc::new(classifier),
            Arc::new(summarizer),
            site(),
            AnalysisOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_full_run() {
        let service = service_with_site_pages();

        let result = service.run("  Aspirin ").await.unwrap();

        assert_eq!(result.query.as_str(), "aspirin");
        assert_eq!(result.drug_url.as_str(), "https://www.drugs.com/aspirin.html");
        assert!(result.links.reviews.is_found());
        assert_eq!(
            result.tally,
            SentimentTally {
                positive: 1,
                negative: 1,
                reviewed: 2
            }
        );
        assert_eq!(result.side_effect_summary, "Summary of: Nausea.");
    }

    #[tokio::test]
    async fn test_progress_stages() {
        let service = service_with_site_pages();
        let stages = Mutex::new(Vec::new());

        service
            .run_with_progress("aspirin", |stage| stages.lock().unwrap().push(stage))
            .await
            .unwrap();

        assert_eq!(
            stages.into_inner().unwrap(),
            vec![
                RunStage::Resolving,
                RunStage::Discovering,
                RunStage::Aggregating,
                RunStage::Summarizing,
                RunStage::Done,
            ]
        );
    }

    #[tokio::test]
    async fn test_not_found_stops_pipeline() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(|_| Ok("<ul class=\"ddc-list-column-2\"></ul>".to_string()));
        let mut classifier = MockSentimentClassifier::new();
        classifier.expect_classify().times(0);
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().times(0);

        let service = AnalysisService::new(
            Arc::new(fetcher),
            Arc::new(classifier),
            Arc::new(summarizer),
            site(),
            AnalysisOptions::default(),
        );
        let stages = Mutex::new(Vec::new());

        let err = service
            .run_with_progress(" Unobtainium ", |stage| stages.lock().unwrap().push(stage))
            .await
            .unwrap_err();

        assert_eq!(err, AnalysisError::DrugNotFound("Unobtainium".to_string()));
        assert_eq!(
            stages.into_inner().unwrap(),
            vec![RunStage::Resolving, RunStage::Failed]
        );
    }

    #[tokio::test]
    async fn test_missing_resources_degrades_gracefully() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .times(2)
            .returning(|url| match url.path() {
                "/alpha/as.html" => Ok(
                    r#"<ul class="ddc-list-column-2"><li><a href="/aspirin.html">Aspirin</a></li></ul>"#
                        .to_string(),
                ),
                _ => Ok("<html><body>No resources here</body></html>".to_string()),
            });
        let mut classifier = MockSentimentClassifier::new();
        classifier.expect_classify().times(0);
        let mut summarizer = MockSummarizer::new();
        summarizer.expect_summarize().times(0);

        let service = AnalysisService::new(
            Arc::new(fetcher),
            Arc::new(classifier),
            Arc::new(summarizer),
            site(),
            AnalysisOptions::default(),
        );

        let result = service.run("aspirin").await.unwrap();

        assert_eq!(result.links.reviews, ResourceLink::NotFound);
        assert_eq!(result.links.side_effects, ResourceLink::NotFound);
        assert_eq!(result.tally, SentimentTally::default());
        assert_eq!(result.side_effect_summary, NO_SIDE_EFFECTS_PAGE);
    }

    #[tokio::test]
    async fn test_locate_skips_scraping() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(2).returning(page_for);

        let service = AnalysisService::new(
            Arc::new(fetcher),
            Arc::new(MockSentimentClassifier::new()),
            Arc::new(MockSummarizer::new()),
            site(),
            AnalysisOptions::default(),
        );

        let (query, url, links) = service.locate("ASPIRIN").await.unwrap();

        assert_eq!(query.as_str(), "aspirin");
        assert_eq!(url.as_str(), "https://www.drugs.com/aspirin.html");
        assert_eq!(
            links.side_effects.url().map(|u| u.path()),
            Some("/sfx/aspirin-side-effects.html")
        );
    }
}
