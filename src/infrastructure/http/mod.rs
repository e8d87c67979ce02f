//! Outbound HTTP access to the source site.

mod page_fetcher;

pub use page_fetcher::HttpPageFetcher;
