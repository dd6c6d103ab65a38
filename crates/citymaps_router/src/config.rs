//! Configuration for path matching.

/// Options controlling how request paths are matched against a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterConfig {
    /// Compare path segments case-sensitively.
    pub case_sensitive: bool,

    /// Reject a trailing slash on leaf routes (`/about/` no longer matches
    /// `/about` and falls through to the catch-all).
    pub strict_trailing_slash: bool,

    /// Longest redirect chain accepted when the table is built.
    pub max_redirects: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            strict_trailing_slash: false,
            max_redirects: 8,
        }
    }
}

impl RouterConfig {
    /// Creates a configuration with both case and trailing slash checks on.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            case_sensitive: true,
            strict_trailing_slash: true,
            ..Self::default()
        }
    }

    /// Builder method to set case sensitivity.
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Builder method to set trailing slash strictness.
    #[must_use]
    pub fn with_strict_trailing_slash(mut self, strict: bool) -> Self {
        self.strict_trailing_slash = strict;
        self
    }

    /// Builder method to set the redirect chain limit.
    #[must_use]
    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Compares a request segment against a pattern segment.
    #[must_use]
    pub fn segment_eq(&self, request: &str, pattern: &str) -> bool {
        if self.case_sensitive {
            request == pattern
        } else {
            request.eq_ignore_ascii_case(pattern)
        }
    }
}
