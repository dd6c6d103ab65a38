//! Session state for the REPL.
//!
//! The session holds the active revision, its route table, and the history
//! of resolutions made during the session.

use std::borrow::Cow;

use citymaps_foundation::{Result, RouteName};
use citymaps_router::{Resolution, Revision, RouteMatch, RouteTable, RouterConfig};
use tracing::info;

/// Resolutions kept by default; older ones are dropped first.
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Session state for an interactive session.
pub struct Session {
    /// The active revision.
    revision: Revision,

    /// Matching options; the shared table is used while these are default.
    config: RouterConfig,

    /// Table of the active revision.
    table: Cow<'static, RouteTable>,

    /// Most recent resolutions, oldest first.
    history: Vec<Resolution>,

    /// Maximum length of `history`.
    history_limit: usize,
}

impl Session {
    /// Creates a session on the current revision with default matching.
    #[must_use]
    pub fn new() -> Self {
        Self {
            revision: Revision::CURRENT,
            config: RouterConfig::default(),
            table: Cow::Borrowed(Revision::CURRENT.table()),
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Creates a session on `revision` with the given matching options.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` makes the revision's table invalid.
    pub fn with_config(revision: Revision, config: RouterConfig) -> Result<Self> {
        let table = load_table(revision, &config)?;
        Ok(Self {
            revision,
            config,
            table,
            history: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        })
    }

    /// Keeps at most `limit` resolutions (at least one).
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self.trim_history();
        self
    }

    /// The active revision.
    #[must_use]
    pub const fn revision(&self) -> Revision {
        self.revision
    }

    /// The active route table.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Switches to another revision, keeping the matching options.
    ///
    /// # Errors
    ///
    /// Returns an error if the current options make that revision invalid.
    pub fn set_revision(&mut self, revision: Revision) -> Result<()> {
        self.table = load_table(revision, &self.config)?;
        self.revision = revision;
        info!(revision = %revision, routes = self.table.len(), "switched revision");
        Ok(())
    }

    /// Resolves a path and records it in the history.
    pub fn resolve(&mut self, path: &str) -> &Resolution {
        let resolution = self.table.resolve(path);
        self.push(resolution)
    }

    /// Matches a path without following redirects. Not recorded.
    #[must_use]
    pub fn match_path(&self, path: &str) -> RouteMatch {
        self.table.match_path(path)
    }

    /// Navigates by name and records the result in the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the active table has no route with that name.
    pub fn navigate(&mut self, name: RouteName) -> Result<&Resolution> {
        let resolution = self.table.navigate(name)?;
        Ok(self.push(resolution))
    }

    /// The most recent resolutions, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Resolution] {
        &self.history
    }

    /// The most recent resolution.
    #[must_use]
    pub fn current(&self) -> Option<&Resolution> {
        self.history.last()
    }

    fn push(&mut self, resolution: Resolution) -> &Resolution {
        self.history.push(resolution);
        self.trim_history();
        &self.history[self.history.len() - 1]
    }

    fn trim_history(&mut self) {
        if self.history.len() > self.history_limit {
            let excess = self.history.len() - self.history_limit;
            self.history.drain(..excess);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn load_table(revision: Revision, config: &RouterConfig) -> Result<Cow<'static, RouteTable>> {
    if *config == RouterConfig::default() {
        Ok(Cow::Borrowed(revision.table()))
    } else {
        revision.build_table(config.clone()).map(Cow::Owned)
    }
}
