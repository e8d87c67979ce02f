//! HTML template rendering handlers for the web UI.

mod home;
mod report;

pub use home::home_handler;
pub use report::report_handler;
