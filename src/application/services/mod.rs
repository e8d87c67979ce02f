//! Pipeline services for the application layer.

pub mod analysis_service;
pub mod drug_resolver;
pub mod link_discoverer;
pub mod review_aggregator;
pub mod side_effect_summarizer;

pub use analysis_service::{AnalysisError, AnalysisOptions, AnalysisService, DrugAnalyzer};
pub use drug_resolver::DrugResolver;
pub use link_discoverer::LinkDiscoverer;
pub use review_aggregator::ReviewAggregator;
pub use side_effect_summarizer::SideEffectSummarizer;
