//! ScopeFilter - Exact-match allow-list of server or channel IDs

/// Allow-list of identifiers. An empty filter allows everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFilter {
    ids: Vec<String>,
}

impl ScopeFilter {
    /// Split a comma-separated field into trimmed, non-empty IDs.
    /// IDs are compared exactly as given; no case change.
    pub fn parse(raw: &str) -> Self {
        let ids = raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    pub fn is_unrestricted(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// An unknown ID never satisfies a non-empty filter
    pub fn allows(&self, id: Option<&str>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        id.is_some_and(|id| self.ids.iter().any(|allowed| allowed == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_allows_everything() {
        let filter = ScopeFilter::parse("  ");
        assert!(filter.is_unrestricted());
        assert!(filter.allows(Some("123")));
        assert!(filter.allows(None));
    }

    #[test]
    fn test_exact_match() {
        let filter = ScopeFilter::parse("123, 456");
        assert!(filter.allows(Some("456")));
        assert!(!filter.allows(Some("45")));
        assert!(!filter.allows(Some(" 456")));
        assert!(!filter.allows(None));
    }

    #[test]
    fn test_case_is_preserved() {
        let filter = ScopeFilter::parse("AbC");
        assert!(filter.allows(Some("AbC")));
        assert!(!filter.allows(Some("abc")));
    }
}
