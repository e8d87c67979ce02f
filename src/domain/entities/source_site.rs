//! Location and markup of the drug database being scraped.

use url::Url;

/// CSS selectors describing where data lives on the source site's pages.
///
/// The defaults match drugs.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Drug links on an alphabetical index page.
    pub index_entries: String,
    /// The "more resources" region of a drug detail page.
    pub resources_region: String,
    /// Anchors inside the resources region.
    pub resource_anchors: String,
    /// One user review on a reviews page.
    pub review_blocks: String,
    /// One content section on a side-effects page.
    pub side_effect_blocks: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            index_entries: "ul.ddc-list-column-2 li a".to_string(),
            resources_region: "div.more-resources".to_string(),
            resource_anchors: "a[href]".to_string(),
            review_blocks: "div.ddc-comment.ddc-box.ddc-mgb-2".to_string(),
            side_effect_blocks: "div.ddc-accordion-content".to_string(),
        }
    }
}

/// Errors raised while building source site URLs.
#[derive(Debug, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Invalid base URL '{0}'")]
    InvalidBase(String),

    #[error("Only HTTP and HTTPS base URLs are supported")]
    UnsupportedProtocol,
}

/// The drug database: its base URL and page layout.
#[derive(Debug, Clone)]
pub struct SourceSite {
    /// Always ends with `/` so relative joins stay under any path prefix.
    base: Url,
    pub layout: SiteLayout,
}

impl SourceSite {
    /// Creates a site rooted at `base_url` (trailing slashes are ignored).
    ///
    /// # Errors
    ///
    /// Returns [`SiteUrlError`] if the base is not an absolute HTTP(S) URL.
    pub fn new(base_url: &str, layout: SiteLayout) -> Result<Self, SiteUrlError> {
        let mut base =
            Url::parse(base_url).map_err(|_| SiteUrlError::InvalidBase(base_url.to_string()))?;

        if !is_web_scheme(&base) {
            return Err(SiteUrlError::UnsupportedProtocol);
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);

        Ok(Self { base, layout })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.base.as_str().trim_end_matches('/')
    }

    /// URL of the alphabetical index page for a shard key.
    ///
    /// The key is percent-encoded as a single path segment.
    pub fn index_url(&self, shard: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("alpha")
            .push(&format!("{shard}.html"));
        Ok(url)
    }

    /// Resolves a link target found on the site to an absolute URL.
    ///
    /// Root-relative targets are placed under the site base, keeping any path
    /// prefix. Returns `None` for blank targets and for anything that does not
    /// point at an HTTP(S) page on the site's own host.
    pub fn absolutize(&self, href: &str) -> Option<Url> {
        let href = href.trim();
        if href.is_empty() {
            return None;
        }

        let relative = match href.strip_prefix('/') {
            Some(rest) if !rest.starts_with('/') => rest,
            _ => href,
        };

        let url = self.base.join(relative).ok()?;
        self.is_own_page(&url).then_some(url)
    }

    fn is_own_page(&self, url: &Url) -> bool {
        is_web_scheme(url)
            && url.host_str() == self.base.host_str()
            && url.port_or_known_default() == self.base.port_or_known_default()
    }
}

fn is_web_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}
