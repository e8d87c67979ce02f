//! HTTP page fetcher backed by `reqwest`.

use crate::domain::gateways::{FetchError, PageFetcher};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; drug-review-analyzer/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Delay between attempts when retries are enabled.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Fetches pages over HTTP(S) with a uniform per-request timeout.
///
/// Each request is attempted once unless `retries` is non-zero, in which case
/// transient failures (see [`FetchError::is_transient`]) are repeated up to
/// `retries` more times with a fixed delay.
#[derive(Clone)]
pub struct HttpPageFetcher {
    client: Client,
    retries: usize,
}

impl HttpPageFetcher {
    /// Creates a fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization failure).
    pub fn new(timeout: Duration, retries: usize) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;

        Ok(Self { client, retries })
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, FetchError> {
        debug!(%url, "Fetching page");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_reqwest_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| classify_reqwest_error(url, e))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let strategy = FixedInterval::new(RETRY_DELAY).take(self.retries);

        RetryIf::spawn(
            strategy,
            || self.fetch_once(url),
            |e: &FetchError| {
                let retry = e.is_transient();
                if retry {
                    debug!(error = %e, "Retrying page fetch");
                }
                retry
            },
        )
        .await
    }
}

fn classify_reqwest_error(url: &Url, e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        }
    }
}
