//! Index entries and drug resolution outcome.

use url::Url;

/// A drug listed on an alphabetical index page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugEntry {
    /// Link text as shown on the index page.
    pub name: String,
    /// Link target, usually relative to the site root.
    pub href: String,
}

impl DrugEntry {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }
}

/// Outcome of resolving a drug name to its detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Found(Url),
    NotFound,
}

impl Resolution {
    /// Returns the detail page URL if the drug was found.
    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }
}
