//! Analysis report page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::api::dto::analyze::AnalyzeRequest;
use crate::application::services::AnalysisError;
use crate::domain::entities::{AnalysisResult, SentimentTally};
use crate::state::AppState;

const POSITIVE_COLOR: &str = "#4CAF50";
const NEGATIVE_COLOR: &str = "#FF5733";
const EMPTY_COLOR: &str = "#d0d0d0";

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub drug: Option<String>,
}

/// Template for the analysis report page.
///
/// Renders `templates/report.html` with a sentiment pie chart and the
/// side-effect summary, or with `error` set when no report could be built.
#[derive(Template, WebTemplate)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub drug: String,
    pub error: Option<String>,
    pub drug_url: String,
    pub reviews_url: Option<String>,
    pub side_effects_url: Option<String>,
    pub positive: usize,
    pub negative: usize,
    pub reviewed: usize,
    pub positive_percent: String,
    pub negative_percent: String,
    pub chart_style: String,
    pub summary: String,
}

impl ReportTemplate {
    fn failed(drug: String, error: impl Into<String>) -> Self {
        Self {
            drug,
            error: Some(error.into()),
            drug_url: String::new(),
            reviews_url: None,
            side_effects_url: None,
            positive: 0,
            negative: 0,
            reviewed: 0,
            positive_percent: String::new(),
            negative_percent: String::new(),
            chart_style: chart_style(&SentimentTally::default()),
            summary: String::new(),
        }
    }
}

impl From<AnalysisResult> for ReportTemplate {
    fn from(result: AnalysisResult) -> Self {
        let tally = result.tally;
        let (positive_percent, negative_percent) = match tally.positive_ratio() {
            Some(ratio) => (
                format!("{:.1}%", ratio * 100.0),
                format!("{:.1}%", (1.0 - ratio) * 100.0),
            ),
            None => ("n/a".to_string(), "n/a".to_string()),
        };

        Self {
            drug: result.query.to_string(),
            error: None,
            drug_url: result.drug_url.to_string(),
            reviews_url: result.links.reviews.url().map(ToString::to_string),
            side_effects_url: result.links.side_effects.url().map(ToString::to_string),
            positive: tally.positive,
            negative: tally.negative,
            reviewed: tally.reviewed,
            positive_percent,
            negative_percent,
            chart_style: chart_style(&tally),
            summary: result.side_effect_summary,
        }
    }
}

/// CSS for a conic-gradient pie chart of the tally.
fn chart_style(tally: &SentimentTally) -> String {
    match tally.positive_ratio() {
        Some(ratio) => format!(
            "background: conic-gradient({POSITIVE_COLOR} 0deg {deg:.1}deg, {NEGATIVE_COLOR} {deg:.1}deg 360deg);",
            deg = ratio * 360.0
        ),
        None => format!("background: {EMPTY_COLOR};"),
    }
}

/// Runs an analysis and renders the report page.
///
/// # Endpoint
///
/// `GET /analyze?drug={name}`
///
/// # Response Codes
///
/// - **200 OK**: Report rendered (possibly with zero counts or placeholder summary)
/// - **400 Bad Request**: Missing or invalid drug name
/// - **404 Not Found**: Drug not listed on the source site
pub async fn report_handler(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> impl IntoResponse {
    let request = AnalyzeRequest {
        drug: query.drug.unwrap_or_default(),
    };

    if request.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            ReportTemplate::failed(
                request.drug,
                "Please enter a drug name (letters, digits, spaces and hyphens only).",
            ),
        );
    }

    match state.analyzer.analyze(&request.drug).await {
        Ok(result) => (StatusCode::OK, ReportTemplate::from(result)),
        Err(AnalysisError::DrugNotFound(drug)) => (
            StatusCode::NOT_FOUND,
            ReportTemplate::failed(drug, "Drug not found on the source site."),
        ),
    }
}
