//! Domain layer containing the analysis data model and gateway contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (queries, links, tallies, results)
//! - [`gateways`] - Traits for page fetching, classification and summarization
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Gateway traits define contracts implemented by the infrastructure layer
//! - Pipeline logic lives in services (see [`crate::application::services`])
//!
//! # Analysis Flow
//!
//! 1. Raw input becomes an [`entities::DrugQuery`]
//! 2. The query is resolved against the alphabetical index into a detail URL
//! 3. Review and side-effect [`entities::ResourceLink`]s are discovered
//! 4. Reviews are classified into a [`entities::SentimentTally`] while the
//!    side-effect text is summarized
//! 5. Both are assembled into an [`entities::AnalysisResult`]

pub mod entities;
pub mod gateways;
