//! Gateway trait for retrieving raw page content.

use async_trait::async_trait;
use url::Url;

/// Errors that can occur while fetching a page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Timed out fetching {url}")]
    Timeout { url: String },

    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },
}

impl FetchError {
    /// Returns true if repeating the request could succeed.
    ///
    /// Timeouts, connection failures and 5xx responses are transient;
    /// other HTTP statuses are not.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Network { .. } => true,
            Self::HttpStatus { status, .. } => *status >= 500,
        }
    }
}

/// Retrieves raw page content over HTTP.
///
/// Implementations must bound every request with a timeout and report
/// non-2xx responses as [`FetchError::HttpStatus`].
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - reqwest-based fetcher
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the body of `url` as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] on timeout, network failure or a non-success status.
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}
