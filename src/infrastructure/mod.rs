//! Infrastructure layer for external integrations.
//!
//! This layer implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`html`] - HTML parsing and selector queries
//! - [`http`] - Page fetching from the source site
//! - [`llm`] - Language-model classification and summarization

pub mod html;
pub mod http;
pub mod llm;
