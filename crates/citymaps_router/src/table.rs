//! Compiled route tables.
//!
//! [`RouteTableBuilder::build`] turns [`Route`] declarations into an
//! immutable [`RouteTable`], rejecting any declaration set that would make
//! resolution ambiguous or partial:
//! - every sibling list holding a section or the top level ends with exactly
//!   one catch-all
//! - route names are unique
//! - every redirect names a registered route, and redirect chains settle on
//!   a rendered page within [`RouterConfig::max_redirects`] hops

use std::collections::HashMap;

use citymaps_foundation::{Error, ErrorKind, Page, Result, RouteName};
use tracing::{debug, warn};

use crate::config::RouterConfig;
use crate::pattern::{PathPattern, join_segments};
use crate::route::Route;

// =============================================================================
// Compiled records
// =============================================================================

/// Index of a compiled route within its table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

impl RouteId {
    /// Returns the raw index of this route.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// What a matched route does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// Render a page (a layout shell, for routes with children).
    Render(Page),
    /// Redirect to a named route.
    Redirect(RouteName),
}

/// An ordered sibling list and its catch-all.
#[derive(Clone, Debug)]
pub(crate) struct Level {
    pub(crate) routes: Vec<RouteId>,
    pub(crate) fallback: RouteId,
}

/// Where a route finally lands once redirects are followed.
#[derive(Clone, Debug)]
pub(crate) struct Destination {
    pub(crate) route: RouteId,
    pub(crate) page: Page,
    pub(crate) chain: Vec<RouteName>,
}

/// A compiled route.
#[derive(Clone, Debug)]
pub struct RouteRecord {
    pub(crate) pattern: PathPattern,
    /// Static segments from the root down to and including this route.
    pub(crate) segments: Vec<String>,
    pub(crate) name: Option<RouteName>,
    pub(crate) target: Target,
    pub(crate) parent: Option<RouteId>,
    pub(crate) children: Option<Level>,
}

impl RouteRecord {
    /// The route's own pattern.
    #[must_use]
    pub const fn pattern(&self) -> &PathPattern {
        &self.pattern
    }

    /// The route's name, if it has one.
    #[must_use]
    pub const fn name(&self) -> Option<RouteName> {
        self.name
    }

    /// What the route does when matched.
    #[must_use]
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Parent section, if nested.
    #[must_use]
    pub const fn parent(&self) -> Option<RouteId> {
        self.parent
    }

    /// Child routes in match order.
    #[must_use]
    pub fn children(&self) -> &[RouteId] {
        self.children.as_ref().map_or(&[], |level| &level.routes)
    }

    /// Whether this route matches any remainder.
    #[must_use]
    pub const fn is_catch_all(&self) -> bool {
        self.pattern.is_catch_all()
    }

    /// Link to this route: its static segments joined from the root.
    #[must_use]
    pub fn href(&self) -> String {
        join_segments(&self.segments)
    }

    /// Full declared path, including a trailing catch-all parameter.
    #[must_use]
    pub fn path(&self) -> String {
        match &self.pattern {
            PathPattern::CatchAll { param } if self.segments.is_empty() => {
                format!("/:{param}(.*)*")
            }
            PathPattern::CatchAll { param } => format!("{}/:{param}(.*)*", self.href()),
            PathPattern::Static { .. } => self.href(),
        }
    }
}

// =============================================================================
// RouteTable
// =============================================================================

/// An immutable, validated route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    pub(crate) config: RouterConfig,
    pub(crate) declarations: Vec<Route>,
    pub(crate) records: Vec<RouteRecord>,
    pub(crate) destinations: Vec<Destination>,
    pub(crate) top: Level,
    pub(crate) names: HashMap<RouteName, RouteId>,
}

impl RouteTable {
    /// Starts building a table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Builds a table from declarations with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the declarations are invalid; see
    /// [`RouteTableBuilder::build`].
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        Self::builder().routes(routes).build()
    }

    /// The matching configuration.
    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// The declarations this table was built from.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.declarations
    }

    /// Number of compiled routes, nested ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no routes. Never true for a built table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Top-level routes in match order.
    #[must_use]
    pub fn top_level(&self) -> &[RouteId] {
        &self.top.routes
    }

    /// Looks up a compiled route by id.
    #[must_use]
    pub fn record(&self, id: RouteId) -> Option<&RouteRecord> {
        self.records.get(id.0)
    }

    /// Iterates compiled routes in declaration order (depth first).
    pub fn records(&self) -> impl Iterator<Item = (RouteId, &RouteRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| (RouteId(index), record))
    }

    /// Looks up a route by name.
    #[must_use]
    pub fn get(&self, name: RouteName) -> Option<&RouteRecord> {
        self.names.get(&name).map(|id| &self.records[id.0])
    }

    /// Id of the route with this name.
    #[must_use]
    pub fn id_of(&self, name: RouteName) -> Option<RouteId> {
        self.names.get(&name).copied()
    }

    /// Whether a route with this name is registered.
    #[must_use]
    pub fn contains(&self, name: RouteName) -> bool {
        self.names.contains_key(&name)
    }

    /// Registered names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = RouteName> + '_ {
        self.records.iter().filter_map(|record| record.name)
    }

    /// Section layouts enclosing a route, outermost first.
    #[must_use]
    pub fn layouts_of(&self, id: RouteId) -> Vec<Page> {
        let mut layouts = Vec::new();
        let mut current = self.records.get(id.0).and_then(|r| r.parent);
        while let Some(parent) = current {
            let record = &self.records[parent.0];
            if let Target::Render(page) = record.target {
                layouts.push(page);
            }
            current = record.parent;
        }
        layouts.reverse();
        layouts
    }
}

// =============================================================================
// RouteTableBuilder
// =============================================================================

/// Builder for [`RouteTable`].
#[derive(Clone, Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
    config: RouterConfig,
}

impl RouteTableBuilder {
    /// Creates an empty builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the matching configuration.
    #[must_use]
    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Appends a top-level route.
    #[must_use]
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends top-level routes.
    #[must_use]
    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Validates the declarations and compiles the table.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::InvalidPattern`] for unparseable paths, relative
    ///   top-level paths, or absolute nested paths
    /// - [`ErrorKind::InvalidRoute`] for routes with both or neither of a
    ///   component and a redirect, or with children they cannot have
    /// - [`ErrorKind::MisplacedCatchAll`] / [`ErrorKind::MissingCatchAll`]
    /// - [`ErrorKind::DuplicateName`]
    /// - [`ErrorKind::UnknownRedirectTarget`] / [`ErrorKind::RedirectCycle`]
    /// - [`ErrorKind::RedirectLimit`] for chains longer than
    ///   [`RouterConfig::max_redirects`]
    pub fn build(self) -> Result<RouteTable> {
        match Compiler::default().compile(self.routes, self.config) {
            Ok(table) => {
                debug!(
                    routes = table.len(),
                    names = table.names.len(),
                    "built route table"
                );
                Ok(table)
            }
            Err(err) => {
                warn!(error = %err, "rejected route table");
                Err(err)
            }
        }
    }
}

#[derive(Default)]
struct Compiler {
    records: Vec<RouteRecord>,
    names: HashMap<RouteName, RouteId>,
}

impl Compiler {
    fn compile(mut self, routes: Vec<Route>, config: RouterConfig) -> Result<RouteTable> {
        let top = self.compile_level(&routes, None, &[])?;
        let destinations = self.settle_redirects(config.max_redirects)?;
        Ok(RouteTable {
            config,
            declarations: routes,
            records: self.records,
            destinations,
            top,
            names: self.names,
        })
    }

    fn compile_level(
        &mut self,
        routes: &[Route],
        parent: Option<RouteId>,
        prefix: &[String],
    ) -> Result<Level> {
        let mut ids = Vec::with_capacity(routes.len());

        for (index, route) in routes.iter().enumerate() {
            let pattern = PathPattern::parse(&route.path)?;

            if pattern.is_catch_all() && index + 1 != routes.len() {
                return Err(Error::new(ErrorKind::MisplacedCatchAll {
                    parent: join_segments(prefix),
                }));
            }
            if let PathPattern::Static { absolute, .. } = &pattern {
                if parent.is_some() && *absolute {
                    return Err(Error::invalid_pattern(
                        &route.path,
                        "nested paths must be relative",
                    ));
                }
                if parent.is_none() && !*absolute {
                    return Err(Error::invalid_pattern(
                        &route.path,
                        "top-level paths must start with '/'",
                    ));
                }
            }

            let target = match (route.component, route.redirect) {
                (Some(page), None) => Target::Render(page),
                (None, Some(name)) => Target::Redirect(name),
                (Some(_), Some(_)) => {
                    return Err(Error::invalid_route(
                        &route.path,
                        "has both a component and a redirect",
                    ));
                }
                (None, None) => {
                    return Err(Error::invalid_route(
                        &route.path,
                        "has neither a component nor a redirect",
                    ));
                }
            };
            if !route.children.is_empty() {
                if pattern.is_catch_all() {
                    return Err(Error::invalid_route(
                        &route.path,
                        "a catch-all cannot have children",
                    ));
                }
                if matches!(target, Target::Redirect(_)) {
                    return Err(Error::invalid_route(
                        &route.path,
                        "a redirect cannot have children",
                    ));
                }
            }

            let mut segments = prefix.to_vec();
            segments.extend(pattern.segments().iter().cloned());

            let id = RouteId(self.records.len());
            if let Some(name) = route.name {
                if self.names.insert(name, id).is_some() {
                    return Err(Error::duplicate_name(name));
                }
            }
            self.records.push(RouteRecord {
                pattern,
                segments: segments.clone(),
                name: route.name,
                target,
                parent,
                children: None,
            });

            if !route.children.is_empty() {
                let level = self.compile_level(&route.children, Some(id), &segments)?;
                self.records[id.0].children = Some(level);
            }
            ids.push(id);
        }

        match ids.last() {
            Some(&last) if self.records[last.0].is_catch_all() => Ok(Level {
                routes: ids,
                fallback: last,
            }),
            _ => Err(Error::new(ErrorKind::MissingCatchAll {
                parent: join_segments(prefix),
            })),
        }
    }

    fn settle_redirects(&self, max_redirects: usize) -> Result<Vec<Destination>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| match record.target {
                Target::Render(page) => Ok(Destination {
                    route: RouteId(index),
                    page,
                    chain: Vec::new(),
                }),
                Target::Redirect(first) => self.follow(record, first, max_redirects),
            })
            .collect()
    }

    fn follow(
        &self,
        from: &RouteRecord,
        first: RouteName,
        max_redirects: usize,
    ) -> Result<Destination> {
        let mut chain = vec![first];
        let mut current = first;
        loop {
            if chain.len() > max_redirects {
                return Err(Error::new(ErrorKind::RedirectLimit {
                    limit: max_redirects,
                    chain,
                }));
            }
            let Some(&id) = self.names.get(&current) else {
                return Err(Error::new(ErrorKind::UnknownRedirectTarget {
                    from: from.path(),
                    target: current,
                }));
            };
            match self.records[id.0].target {
                Target::Render(page) => {
                    return Ok(Destination {
                        route: id,
                        page,
                        chain,
                    });
                }
                Target::Redirect(next) => {
                    let looped = chain.contains(&next);
                    chain.push(next);
                    if looped {
                        return Err(Error::new(ErrorKind::RedirectCycle(chain)));
                    }
                    current = next;
                }
            }
        }
    }
}
