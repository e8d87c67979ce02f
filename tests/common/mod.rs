#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

use drug_review_analyzer::application::services::{AnalysisOptions, AnalysisService};
use drug_review_analyzer::domain::entities::{SiteLayout, SourceSite};
use drug_review_analyzer::domain::gateways::{
    FetchError, LlmError, PageFetcher, SentimentClassifier, Summarizer,
};
use drug_review_analyzer::state::AppState;

pub const BASE: &str = "https://www.drugs.com";

pub const INDEX_AS: &str = r#"
<html><body>
  <ul class="ddc-list-column-2">
    <li><a href="/asacol.html">Asacol</a></li>
    <li><a href="/aspirin.html">Aspirin</a></li>
  </ul>
</body></html>
"#;

pub const INDEX_CO: &str = r#"
<html><body>
  <ul class="ddc-list-column-2">
    <li><a href="/co-codamol.html">Co-Codamol</a></li>
  </ul>
</body></html>
"#;

pub const ASPIRIN_PAGE: &str = r#"
<html><body>
  <div class="more-resources">
    <a href="/comments/aspirin/">Aspirin Reviews</a>
    <a href="/sfx/aspirin-side-effects.html">Aspirin Side Effects</a>
  </div>
</body></html>
"#;

pub const ASPIRIN_REVIEWS: &str = r#"
<html><body>
  <div class="ddc-comment ddc-box ddc-mgb-2"><p>Great for my headaches.</p></div>
  <div class="ddc-comment ddc-box ddc-mgb-2"><p>Great, works fast.</p></div>
  <div class="ddc-comment ddc-box ddc-mgb-2"><p>Awful stomach pain.</p></div>
</body></html>
"#;

pub const ASPIRIN_SIDE_EFFECTS: &str = r#"
<html><body>
  <div class="ddc-accordion-content">Nausea.</div>
  <div class="ddc-accordion-content">Headache.</div>
</body></html>
"#;

pub const CODAMOL_PAGE: &str = r#"
<html><body><h1>Co-Codamol</h1></body></html>
"#;

/// Serves fixed pages by URL and records every request.
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, path: &str, body: &str) -> Self {
        self.pages.insert(format!("{BASE}{path}"), body.to_string());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticPages {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| FetchError::HttpStatus {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// Labels reviews by keyword; reviews mentioning "flaky" fail.
#[derive(Default)]
pub struct KeywordClassifier {
    calls: AtomicUsize,
}

impl KeywordClassifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if text.contains("flaky") {
            Err(LlmError::Request("connection reset".to_string()))
        } else if text.contains("Great") {
            Ok("Positive".to_string())
        } else if text.contains("Awful") {
            Ok("Negative.".to_string())
        } else {
            Ok("It is hard to tell".to_string())
        }
    }
}

/// Echoes its input and records every call.
#[derive(Default)]
pub struct EchoSummarizer {
    inputs: Mutex<Vec<String>>,
}

impl EchoSummarizer {
    pub fn inputs(&self) -> Vec<String> {
        self.inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for EchoSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, LlmError> {
        self.inputs.lock().unwrap().push(text.to_string());
        Ok(format!("Summary: {}", text.replace('\n', " ")))
    }
}

pub type TestService = AnalysisService<StaticPages, KeywordClassifier, EchoSummarizer>;

pub struct TestPipeline {
    pub service: Arc<TestService>,
    pub pages: Arc<StaticPages>,
    pub classifier: Arc<KeywordClassifier>,
    pub summarizer: Arc<EchoSummarizer>,
}

impl TestPipeline {
    pub fn state(&self) -> AppState {
        AppState::new(self.service.clone())
    }
}

/// Aspirin with both sub-pages; co-codamol with neither.
pub fn drug_site() -> StaticPages {
    StaticPages::new()
        .with_page("/alpha/as.html", INDEX_AS)
        .with_page("/alpha/co.html", INDEX_CO)
        .with_page("/aspirin.html", ASPIRIN_PAGE)
        .with_page("/comments/aspirin/", ASPIRIN_REVIEWS)
        .with_page("/sfx/aspirin-side-effects.html", ASPIRIN_SIDE_EFFECTS)
        .with_page("/co-codamol.html", CODAMOL_PAGE)
}

pub fn pipeline(pages: StaticPages) -> TestPipeline {
    let pages = Arc::new(pages);
    let classifier = Arc::new(KeywordClassifier::default());
    let summarizer = Arc::new(EchoSummarizer::default());
    let site = Arc::new(SourceSite::new(BASE, SiteLayout::default()).unwrap());

    let service = Arc::new(AnalysisService::new(
        pages.clone(),
        classifier.clone(),
        summarizer.clone(),
        site,
        AnalysisOptions {
            classify_concurrency: 2,
        },
    ));

    TestPipeline {
        service,
        pages,
        classifier,
        summarizer,
    }
}
