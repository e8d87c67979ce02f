//! Web layer for browser-based UI.
//!
//! Provides a search page and an analysis report rendered with Askama
//! templates. The report draws the positive/negative split as a pie chart.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
