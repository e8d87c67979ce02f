//! Result of one analysis run and the stages it passes through.

use std::fmt;
use url::Url;

use super::{DrugQuery, ResourceLinks, SentimentTally};

/// Everything one run produced for the presentation layer.
///
/// The value is derived only from page content and classifier output, so
/// repeated runs over identical inputs yield equal results.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub query: DrugQuery,
    pub drug_url: Url,
    pub links: ResourceLinks,
    pub tally: SentimentTally,
    pub side_effect_summary: String,
}

/// Pipeline stages of a run.
///
/// ```text
/// Idle -> Resolving -> Discovering -> {Aggregating, Summarizing} -> Done
///              \-> Failed (drug not found)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunStage {
    #[default]
    Idle,
    Resolving,
    Discovering,
    Aggregating,
    Summarizing,
    Done,
    Failed,
}

impl RunStage {
    /// Human-readable progress message for the stage.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Idle => "Waiting for input",
            Self::Resolving => "Fetching drug details...",
            Self::Discovering => "Looking up review and side-effect pages...",
            Self::Aggregating => "Analyzing reviews...",
            Self::Summarizing => "Fetching and summarizing side effects...",
            Self::Done => "Analysis complete",
            Self::Failed => "Drug not found",
        }
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Discovering => "discovering",
            Self::Aggregating => "aggregating",
            Self::Summarizing => "summarizing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
