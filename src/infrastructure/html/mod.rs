//! Structured extraction over fetched HTML.
//!
//! Provides [`Document`] (parse + CSS selector queries) and [`Element`]
//! (visible text and attribute access), backed by `scraper`.

mod document;

pub use document::{Document, Element, ExtractError};
