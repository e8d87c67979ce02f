//! Search page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the search page.
///
/// Renders `templates/index.html`: a single drug name field submitting to
/// `GET /analyze`.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {}

/// Renders the search page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
