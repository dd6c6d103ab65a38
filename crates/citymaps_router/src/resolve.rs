//! Path resolution and named navigation.
//!
//! Matching at each level takes the longest static prefix among the
//! siblings (sections match by prefix, leaves must match exactly; ties go to
//! the first declared). When nothing matches, the level's trailing catch-all
//! fires and captures the unmatched remainder. Because every level ends in a
//! catch-all, [`RouteTable::match_path`] and [`RouteTable::resolve`] are total.

use citymaps_foundation::{Error, Page, Result, RouteName};
use tracing::{debug, trace};

use crate::pattern::{PathPattern, RequestPath};
use crate::table::{Level, RouteId, RouteTable, Target};

/// The route a path matches, before any redirect is followed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched route.
    pub route: RouteId,
    /// The normalized request path.
    pub path: String,
    /// Name of the matched route.
    pub name: Option<RouteName>,
    /// What the matched route does.
    pub target: Target,
    /// Enclosing section layouts, outermost first.
    pub layouts: Vec<Page>,
    /// Segments captured by a catch-all (empty for static matches).
    pub path_match: Vec<String>,
}

impl RouteMatch {
    /// The page to render, unless this match is a redirect.
    #[must_use]
    pub const fn page(&self) -> Option<Page> {
        match self.target {
            Target::Render(page) => Some(page),
            Target::Redirect(_) => None,
        }
    }

    /// The redirect target, if this match is a redirect.
    #[must_use]
    pub const fn redirect_target(&self) -> Option<RouteName> {
        match self.target {
            Target::Redirect(name) => Some(name),
            Target::Render(_) => None,
        }
    }

    /// Whether this match redirects.
    #[must_use]
    pub const fn is_redirect(&self) -> bool {
        matches!(self.target, Target::Redirect(_))
    }
}

/// One redirect hop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Declared path of the redirecting route.
    pub from: String,
    /// Name the redirect points to.
    pub to: RouteName,
}

/// The final result of resolving a path: the page to mount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// The normalized request path.
    pub requested: String,
    /// Canonical path of the rendered route.
    pub path: String,
    /// Name of the rendered route.
    pub name: Option<RouteName>,
    /// Page to render.
    pub page: Page,
    /// Enclosing section layouts, outermost first.
    pub layouts: Vec<Page>,
    /// Redirects followed, in order.
    pub redirects: Vec<Redirect>,
    /// Segments captured by the first catch-all matched.
    pub path_match: Vec<String>,
}

impl Resolution {
    /// Whether at least one redirect was followed.
    #[must_use]
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }

    /// Whether two resolutions mount the same route.
    #[must_use]
    pub fn same_destination(&self, other: &Resolution) -> bool {
        self.path == other.path
            && self.name == other.name
            && self.page == other.page
            && self.layouts == other.layouts
    }
}

impl RouteTable {
    /// Matches a path against the table without following redirects.
    #[must_use]
    pub fn match_path(&self, path: &str) -> RouteMatch {
        let request = RequestPath::parse(path);
        let (route, path_match) = self.match_level(&self.top, &request, 0);
        let record = &self.records[route.0];
        RouteMatch {
            route,
            path: request.to_string(),
            name: record.name,
            target: record.target,
            layouts: self.layouts_of(route),
            path_match,
        }
    }

    /// Resolves a path to the page to render, following redirects.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        let matched = self.match_path(path);
        let resolution = self.settle(matched.route, matched.path, matched.path_match);
        debug!(
            requested = %resolution.requested,
            path = %resolution.path,
            page = %resolution.page,
            redirects = resolution.redirects.len(),
            "resolved route"
        );
        resolution
    }

    /// Link to a named route.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownRouteName`](citymaps_foundation::ErrorKind::UnknownRouteName)
    /// if this table has no route with that name.
    pub fn href(&self, name: RouteName) -> Result<String> {
        self.get(name)
            .map(crate::table::RouteRecord::href)
            .ok_or_else(|| Error::unknown_route_name(name))
    }

    /// Resolves named navigation, following redirects.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownRouteName`](citymaps_foundation::ErrorKind::UnknownRouteName)
    /// if this table has no route with that name.
    pub fn navigate(&self, name: RouteName) -> Result<Resolution> {
        let id = self
            .id_of(name)
            .ok_or_else(|| Error::unknown_route_name(name))?;
        let href = self.records[id.0].href();
        let resolution = self.settle(id, href, Vec::new());
        debug!(
            name = %name,
            path = %resolution.path,
            redirects = resolution.redirects.len(),
            "navigated to named route"
        );
        Ok(resolution)
    }

    fn match_level(
        &self,
        level: &Level,
        request: &RequestPath,
        offset: usize,
    ) -> (RouteId, Vec<String>) {
        let rest = &request.segments()[offset..];
        let mut best: Option<(RouteId, usize)> = None;

        for &id in &level.routes {
            let record = &self.records[id.0];
            let PathPattern::Static { segments, .. } = &record.pattern else {
                continue;
            };
            let len = segments.len();
            let fits = if record.children.is_some() {
                rest.len() >= len
            } else {
                rest.len() == len
                    && !(self.config.strict_trailing_slash && request.has_trailing_slash())
            };
            let matched = fits
                && rest
                    .iter()
                    .zip(segments)
                    .all(|(r, p)| self.config.segment_eq(r, p));
            if matched && best.is_none_or(|(_, best_len)| len > best_len) {
                trace!(candidate = %record.path(), consumed = len, "static match");
                best = Some((id, len));
            }
        }

        match best {
            Some((id, len)) => match &self.records[id.0].children {
                Some(children) => self.match_level(children, request, offset + len),
                None => (id, Vec::new()),
            },
            None => {
                trace!(fallback = %self.records[level.fallback.0].path(), "catch-all match");
                (level.fallback, rest.to_vec())
            }
        }
    }

    fn settle(&self, id: RouteId, requested: String, path_match: Vec<String>) -> Resolution {
        let destination = &self.destinations[id.0];
        let mut redirects = Vec::with_capacity(destination.chain.len());
        let mut from = self.records[id.0].path();
        for &to in &destination.chain {
            redirects.push(Redirect {
                from: std::mem::take(&mut from),
                to,
            });
            if let Some(next) = self.get(to) {
                from = next.path();
            }
        }

        let record = &self.records[destination.route.0];
        let path = if record.is_catch_all() {
            requested.clone()
        } else {
            record.href()
        };
        Resolution {
            requested,
            path,
            name: record.name,
            page: destination.page,
            layouts: self.layouts_of(destination.route),
            redirects,
            path_match,
        }
    }
}
