//! Handler for the drug analysis endpoint.

use axum::{Json, extract::State};
use tracing::info;
use validator::Validate;

use crate::api::dto::analyze::{AnalyzeRequest, AnalyzeResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a drug, classifies its reviews and summarizes its side effects.
///
/// # Endpoint
///
/// `POST /api/analyze`
///
/// # Request Body
///
/// ```json
/// { "drug": "Aspirin" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "drug": "aspirin",
///   "drug_url": "https://www.drugs.com/aspirin.html",
///   "links": {
///     "reviews": "https://www.drugs.com/comments/aspirin/",
///     "side_effects": null
///   },
///   "sentiment": {
///     "positive": 12,
///     "negative": 3,
///     "reviewed": 16,
///     "positive_ratio": 0.8
///   },
///   "side_effect_summary": "No side effects found.",
///   "generated_at": "2026-01-01T12:00:00Z"
/// }
/// ```
///
/// Missing review or side-effect pages and failing LLM calls degrade the
/// result (zero counts, placeholder summary) instead of failing the request.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the drug is not listed on the source site.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    payload.validate()?;

    let result = state.analyzer.analyze(&payload.drug).await?;
    info!(drug = %result.query, "Analysis served");

    Ok(Json(AnalyzeResponse::from(result)))
}
