//! DTOs for the analysis endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{AnalysisResult, ResourceLink};

/// Letters, digits, spaces and hyphens.
static DRUG_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N} \-]+$").unwrap());

/// Request to analyze one drug.
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    /// Drug name as typed by the user; case, spaces and hyphens are ignored.
    #[validate(length(min = 1, max = 100))]
    #[validate(regex(path = *DRUG_NAME_REGEX, message = "Drug name may only contain letters, digits, spaces and hyphens"))]
    pub drug: String,
}

/// Analysis outcome for one drug.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// Normalized drug name.
    pub drug: String,
    pub drug_url: String,
    pub links: LinksResponse,
    pub sentiment: SentimentResponse,
    pub side_effect_summary: String,
    pub generated_at: DateTime<Utc>,
}

/// Discovered sub-pages; `null` when not found.
#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub reviews: Option<String>,
    pub side_effects: Option<String>,
}

/// Review sentiment counts.
#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub positive: usize,
    pub negative: usize,
    /// Review blocks scraped, including ones without a definitive label.
    pub reviewed: usize,
    /// Positive share of classified reviews; `null` when none were classified.
    pub positive_ratio: Option<f64>,
}

impl From<AnalysisResult> for AnalyzeResponse {
    fn from(result: AnalysisResult) -> Self {
        Self {
            drug: result.query.to_string(),
            drug_url: result.drug_url.to_string(),
            links: LinksResponse {
                reviews: link_to_string(&result.links.reviews),
                side_effects: link_to_string(&result.links.side_effects),
            },
            sentiment: SentimentResponse {
                positive: result.tally.positive,
                negative: result.tally.negative,
                reviewed: result.tally.reviewed,
                positive_ratio: result.tally.positive_ratio(),
            },
            side_effect_summary: result.side_effect_summary,
            generated_at: Utc::now(),
        }
    }
}

fn link_to_string(link: &ResourceLink) -> Option<String> {
    link.url().map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(drug: &str) -> AnalyzeRequest {
        AnalyzeRequest {
            drug: drug.to_string(),
        }
    }

    #[test]
    fn test_valid_names() {
        for drug in ["aspirin", "Co-Codamol", "Vitamin B12", "Ésoméprazole"] {
            assert!(request(drug).validate().is_ok(), "{drug} should be valid");
        }
    }

    #[test]
    fn test_invalid_names() {
        assert!(request("").validate().is_err());
        assert!(request("aspirin; drop").validate().is_err());
        assert!(request("../etc/passwd").validate().is_err());
        assert!(request(&"a".repeat(101)).validate().is_err());
    }
}
