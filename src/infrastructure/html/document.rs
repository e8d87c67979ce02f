//! Parsed HTML documents with CSS selector queries.

use scraper::{ElementRef, Html, Selector};

/// Errors that can occur while querying a document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A parsed HTML page.
///
/// `scraper` trees are not `Send`, so a `Document` should be built, queried
/// and dropped without crossing an `.await`.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses raw page content. Malformed markup is repaired, never rejected.
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Returns every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSelector`] if `selector` does not parse.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'_>>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).map(Element::new).collect())
    }

    /// Returns the first element matching `selector`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSelector`] if `selector` does not parse.
    pub fn select_first(&self, selector: &str) -> Result<Option<Element<'_>>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self.html.select(&selector).next().map(Element::new))
    }
}

/// An element of a [`Document`].
#[derive(Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }

    /// Visible text of the element and its descendants.
    ///
    /// Text nodes are trimmed and joined with single spaces; runs of
    /// whitespace inside a node collapse to one space.
    pub fn text(&self) -> String {
        self.inner
            .text()
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Value of attribute `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.inner.value().attr(name)
    }

    /// Descendants of this element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidSelector`] if `selector` does not parse.
    pub fn select(&self, selector: &str) -> Result<Vec<Element<'a>>, ExtractError> {
        let selector = parse_selector(selector)?;
        Ok(self.inner.select(&selector).map(Element::new).collect())
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{e:?}"),
    })
}
