//! Error types for the citymaps system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Path resolution and number formatting never fail; errors come from
//! building route tables, named navigation, and the runtime surface.

use thiserror::Error;

use crate::location::RouteName;

/// Result alias used throughout citymaps.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for citymaps operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<String>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates an invalid path pattern error.
    #[must_use]
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        })
    }

    /// Creates an invalid route declaration error.
    #[must_use]
    pub fn invalid_route(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRoute {
            path: path.into(),
            reason: reason.into(),
        })
    }

    /// Creates a duplicate route name error.
    #[must_use]
    pub fn duplicate_name(name: RouteName) -> Self {
        Self::new(ErrorKind::DuplicateName(name))
    }

    /// Creates an unknown route name error (named navigation to a route
    /// that is not registered in the table).
    #[must_use]
    pub fn unknown_route_name(name: RouteName) -> Self {
        Self::new(ErrorKind::UnknownRouteName(name))
    }

    /// Creates an unknown symbol error.
    #[must_use]
    pub fn unknown_symbol(symbol: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownSymbol(symbol.into()))
    }

    /// Creates an invalid command or argument error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A route path pattern could not be parsed.
    #[error("invalid path pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A route declaration is inconsistent (e.g. both a component and a redirect).
    #[error("invalid route '{path}': {reason}")]
    InvalidRoute {
        /// The declared path of the route.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A catch-all route is followed by other siblings, or appears twice.
    #[error("catch-all route must be the last sibling under '{parent}'")]
    MisplacedCatchAll {
        /// Full path of the parent (`/` for the top level).
        parent: String,
    },

    /// A sibling list that must be total has no trailing catch-all.
    #[error("missing catch-all route under '{parent}'")]
    MissingCatchAll {
        /// Full path of the parent (`/` for the top level).
        parent: String,
    },

    /// Two routes share the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(RouteName),

    /// A redirect names a route that is not registered.
    #[error("redirect from '{from}' targets unregistered route {target}")]
    UnknownRedirectTarget {
        /// Full path of the redirecting route.
        from: String,
        /// The missing target name.
        target: RouteName,
    },

    /// Following redirects comes back to a route already visited.
    #[error("redirect chain does not settle: {}", display_chain(.0))]
    RedirectCycle(Vec<RouteName>),

    /// A redirect chain is longer than the configured limit.
    #[error("redirect chain exceeds {limit} hops: {}", display_chain(chain))]
    RedirectLimit {
        /// The configured maximum number of hops.
        limit: usize,
        /// The chain followed so far.
        chain: Vec<RouteName>,
    },

    /// Named navigation to a route this table does not register.
    #[error("no route named {0}")]
    UnknownRouteName(RouteName),

    /// A route name symbol or section that is not in the registry.
    #[error("unknown route symbol: {0}")]
    UnknownSymbol(String),

    /// A route table revision that does not exist.
    #[error("unknown revision: {0}")]
    UnknownRevision(String),

    /// A command or command-line argument could not be understood.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Serialization or deserialization error.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn display_chain(chain: &[RouteName]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
