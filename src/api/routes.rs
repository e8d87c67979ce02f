//! API route configuration.

use crate::api::handlers::analyze_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /analyze` - Run the analysis pipeline for one drug
pub fn routes() -> Router<AppState> {
    Router::new().route("/analyze", post(analyze_handler))
}
