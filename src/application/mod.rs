//! Application layer services implementing the analysis pipeline.
//!
//! Services consume the gateway traits from [`crate::domain::gateways`] and
//! provide a clean API for HTTP handlers and the CLI.
//!
//! # Available Services
//!
//! - [`services::drug_resolver::DrugResolver`] - Drug name to detail page
//! - [`services::link_discoverer::LinkDiscoverer`] - Review and side-effect links
//! - [`services::review_aggregator::ReviewAggregator`] - Sentiment tally
//! - [`services::side_effect_summarizer::SideEffectSummarizer`] - Side-effect summary
//! - [`services::analysis_service::AnalysisService`] - The full pipeline

pub mod services;
