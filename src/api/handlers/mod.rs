//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod analyze;
pub mod health;

pub use analyze::analyze_handler;
pub use health::health_handler;
