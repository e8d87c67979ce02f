//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::DrugAnalyzer;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn DrugAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn DrugAnalyzer>) -> Self {
        Self { analyzer }
    }
}
