//! Links from a drug detail page to its review and side-effect pages.

use url::Url;

/// The kinds of sub-page discovered on a drug detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceCategory {
    Reviews,
    SideEffects,
}

impl ResourceCategory {
    /// Classifies an anchor by its visible text.
    ///
    /// Text mentioning "reviews" wins over "side effects" when both appear.
    pub fn from_link_text(text: &str) -> Option<Self> {
        let text = text.to_lowercase();
        if text.contains("reviews") {
            Some(Self::Reviews)
        } else if text.contains("side effects") {
            Some(Self::SideEffects)
        } else {
            None
        }
    }
}

/// A discovered sub-page, or the explicit absence of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResourceLink {
    Found(Url),
    #[default]
    NotFound,
}

impl ResourceLink {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Self::Found(url) => Some(url),
            Self::NotFound => None,
        }
    }
}

/// Review and side-effect links for one drug. Both default to `NotFound`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceLinks {
    pub reviews: ResourceLink,
    pub side_effects: ResourceLink,
}

impl ResourceLinks {
    /// Records `url` for `category` unless that category already has a link.
    ///
    /// Returns true if the link was stored.
    pub fn offer(&mut self, category: ResourceCategory, url: Url) -> bool {
        let slot = match category {
            ResourceCategory::Reviews => &mut self.reviews,
            ResourceCategory::SideEffects => &mut self.side_effects,
        };

        if slot.is_found() {
            return false;
        }

        *slot = ResourceLink::Found(url);
        true
    }
}
