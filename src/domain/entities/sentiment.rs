//! Review sentiment labels and the per-run tally.

/// Coarse sentiment of a single review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Unknown,
}

impl Sentiment {
    /// Maps a free-form classifier label to a sentiment.
    ///
    /// Matching is a case-insensitive substring test: a label mentioning
    /// "positive" counts as positive, otherwise one mentioning "negative"
    /// counts as negative. Everything else is unknown.
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label.contains("positive") {
            Self::Positive
        } else if label.contains("negative") {
            Self::Negative
        } else {
            Self::Unknown
        }
    }
}

/// Positive/negative counters for one aggregation run.
///
/// `reviewed` counts every review block processed, so
/// `positive + negative <= reviewed` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentTally {
    pub positive: usize,
    pub negative: usize,
    pub reviewed: usize,
}

impl SentimentTally {
    /// Counts one processed review.
    pub fn record(&mut self, sentiment: Sentiment) {
        self.reviewed += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
            Sentiment::Unknown => {}
        }
    }

    /// Number of reviews that received a definitive label.
    pub fn classified(&self) -> usize {
        self.positive + self.negative
    }

    /// Share of positive reviews among classified ones, if any were classified.
    pub fn positive_ratio(&self) -> Option<f64> {
        match self.classified() {
            0 => None,
            total => Some(self.positive as f64 / total as f64),
        }
    }
}
