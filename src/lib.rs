//! # Drug Review Analyzer
//!
//! Looks a drug up on a public drug-information site, classifies its patient
//! reviews with a language model and summarizes its side-effect page.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and gateway traits
//! - **Application Layer** ([`application`]) - The analysis pipeline stages
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetching, HTML extraction, LLM client
//! - **API Layer** ([`api`]) - JSON endpoint, DTOs and middleware
//! - **Web Layer** ([`web`]) - Search page and HTML report with a sentiment chart
//!
//! ## Pipeline
//!
//! 1. Normalize the drug name and find it on the site's alphabetical index
//! 2. Discover the reviews and side-effects sub-pages
//! 3. Classify every review as positive or negative (concurrently, bounded)
//! 4. Summarize the side-effect text
//!
//! Steps 3 and 4 run in parallel. Only an unknown drug aborts a run; every
//! other failure degrades to a zero tally or a placeholder summary.
//!
//! ## Quick Start
//!
//! ```bash
//! export LLM_API_KEY="gsk_..."
//!
//! # Start the web service
//! cargo run
//!
//! # Or analyze from the terminal
//! cargo run --bin analyze -- analyze aspirin
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnalysisError, AnalysisOptions, AnalysisService, DrugAnalyzer,
    };
    pub use crate::domain::entities::{
        AnalysisResult, DrugQuery, ResourceLink, ResourceLinks, RunStage, SentimentTally,
        SourceSite,
    };
    pub use crate::domain::gateways::{
        FetchError, LlmError, PageFetcher, SentimentClassifier, Summarizer,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
