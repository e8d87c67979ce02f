//! Consolidated side-effect narrative scraped from a drug's side-effects page.

/// Side-effect blocks joined with newlines, in document order.
///
/// An empty value is meaningful: the page had no side-effect content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideEffectText(String);

impl SideEffectText {
    /// Joins extracted blocks with `\n`, preserving their order.
    pub fn from_blocks<I, S>(blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = blocks
            .into_iter()
            .map(|block| block.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join("\n");

        Self(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if there is nothing worth summarizing.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_in_order() {
        let text = SideEffectText::from_blocks(["Nausea.", "Headache."]);
        assert_eq!(text.as_str(), "Nausea.\nHeadache.");
        assert!(!text.is_blank());
    }

    #[test]
    fn test_blank_detection() {
        assert!(SideEffectText::default().is_blank());
        assert!(SideEffectText::from_blocks(["", "  "]).is_blank());
        assert!(SideEffectText::from_blocks(Vec::<String>::new()).is_blank());
    }
}
