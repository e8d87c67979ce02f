//! Web UI route configuration.

use crate::state::AppState;
use crate::web::handlers::{home_handler, report_handler};
use axum::{Router, routing::get};

/// Pages that never trigger an analysis.
///
/// # Endpoints
///
/// - `GET /` - Search page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(home_handler))
}

/// Pages that run the analysis pipeline and must sit behind the rate limiter.
///
/// # Endpoints
///
/// - `GET /analyze?drug={name}` - Analysis report with sentiment chart
pub fn analysis_routes() -> Router<AppState> {
    Router::new().route("/analyze", get(report_handler))
}
