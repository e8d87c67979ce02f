//! Core domain entities representing the analysis data model.
//!
//! Entities are plain data structures with small, self-contained behavior
//! (normalization, matching, counting). They perform no I/O.
//!
//! # Entity Types
//!
//! - [`DrugQuery`] - A normalized drug name
//! - [`DrugEntry`] / [`Resolution`] - Index page entries and the lookup outcome
//! - [`ResourceLink`] / [`ResourceLinks`] - Review and side-effect sub-pages
//! - [`Sentiment`] / [`SentimentTally`] - Review classification and counts
//! - [`SideEffectText`] - Consolidated side-effect narrative
//! - [`AnalysisResult`] / [`RunStage`] - Output and progress of one run
//! - [`SourceSite`] / [`SiteLayout`] - Where and how the data is scraped

pub mod analysis;
pub mod drug_entry;
pub mod drug_query;
pub mod resource_link;
pub mod sentiment;
pub mod side_effect_text;
pub mod source_site;

pub use analysis::{AnalysisResult, RunStage};
pub use drug_entry::{DrugEntry, Resolution};
pub use drug_query::DrugQuery;
pub use resource_link::{ResourceCategory, ResourceLink, ResourceLinks};
pub use sentiment::{Sentiment, SentimentTally};
pub use side_effect_text::SideEffectText;
pub use source_site::{SiteLayout, SiteUrlError, SourceSite};
