//! Route path patterns and request path normalization.
//!
//! Supported pattern forms:
//! - `/emissions`, `/` - absolute static paths (top level)
//! - `auckland`, `""` - relative static paths (children)
//! - `/:pathMatch(.*)*`, `*` - catch-all, always relative to the parent

use std::fmt;

use citymaps_foundation::{Error, Result};

/// Name of the parameter a bare `*` catch-all captures into.
pub const DEFAULT_CATCH_ALL_PARAM: &str = "pathMatch";

/// A parsed route path pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathPattern {
    /// A fixed sequence of segments.
    Static {
        /// Whether the pattern was written with a leading `/`.
        absolute: bool,
        /// Path segments, as written.
        segments: Vec<String>,
    },
    /// Matches any remainder, capturing it under `param`.
    CatchAll {
        /// Name of the captured parameter.
        param: String,
    },
}

impl PathPattern {
    /// Parses a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidPattern`](citymaps_foundation::ErrorKind::InvalidPattern)
    /// for named parameters other than a catch-all, and for characters that
    /// cannot appear in a path segment.
    pub fn parse(pattern: &str) -> Result<Self> {
        let trimmed = pattern.trim();

        if trimmed == "*" || trimmed == "/*" {
            return Ok(Self::CatchAll {
                param: DEFAULT_CATCH_ALL_PARAM.to_string(),
            });
        }
        if let Some(param) = parse_catch_all(trimmed) {
            return Ok(Self::CatchAll { param });
        }

        let absolute = trimmed.starts_with('/');
        let mut segments = Vec::new();
        for segment in trimmed.split('/').filter(|s| !s.is_empty()) {
            if segment.starts_with(':') {
                return Err(Error::invalid_pattern(
                    pattern,
                    "only catch-all parameters are supported",
                ));
            }
            if let Some(c) = segment
                .chars()
                .find(|c| c.is_whitespace() || matches!(c, '?' | '#' | '*' | '(' | ')'))
            {
                return Err(Error::invalid_pattern(
                    pattern,
                    format!("unexpected character '{c}'"),
                ));
            }
            segments.push(segment.to_string());
        }

        Ok(Self::Static { absolute, segments })
    }

    /// Whether this is a catch-all pattern.
    #[must_use]
    pub const fn is_catch_all(&self) -> bool {
        matches!(self, Self::CatchAll { .. })
    }

    /// Whether this is an absolute static pattern.
    #[must_use]
    pub const fn is_absolute(&self) -> bool {
        matches!(self, Self::Static { absolute: true, .. })
    }

    /// Static segments of this pattern (empty for a catch-all).
    #[must_use]
    pub fn segments(&self) -> &[String] {
        match self {
            Self::Static { segments, .. } => segments,
            Self::CatchAll { .. } => &[],
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static { absolute, segments } => {
                if *absolute {
                    f.write_str("/")?;
                }
                f.write_str(&segments.join("/"))
            }
            Self::CatchAll { param } => write!(f, "/:{param}(.*)*"),
        }
    }
}

/// Recognizes `:name(.*)*`, with or without a leading `/`.
fn parse_catch_all(pattern: &str) -> Option<String> {
    let body = pattern.strip_prefix('/').unwrap_or(pattern);
    let name = body.strip_prefix(':')?.strip_suffix("(.*)*")?;
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| name.to_string())
}

// =============================================================================
// RequestPath
// =============================================================================

/// A request path split into segments.
///
/// The query string and fragment are dropped; empty segments (doubled or
/// trailing slashes) are ignored, but whether the path ended with a slash is
/// remembered for strict matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestPath {
    segments: Vec<String>,
    trailing_slash: bool,
}

impl RequestPath {
    /// Splits a raw request path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let end = raw.find(['?', '#']).unwrap_or(raw.len());
        let path = raw[..end].trim();
        let segments: Vec<String> = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let trailing_slash = !segments.is_empty() && path.ends_with('/');
        Self {
            segments,
            trailing_slash,
        }
    }

    /// Path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the raw path ended with a `/` after at least one segment.
    #[must_use]
    pub const fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }
}

impl fmt::Display for RequestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// Joins segments into an absolute path.
#[must_use]
pub fn join_segments(segments: &[String]) -> String {
    format!("/{}", segments.join("/"))
}
