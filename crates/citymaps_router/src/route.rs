//! Declarative route records.
//!
//! A [`Route`] is the raw declaration handed to [`RouteTable`](crate::RouteTable):
//! `{ path, name?, component?, redirect?, children? }`. Declarations are not
//! checked until the table is built.

use citymaps_foundation::{Page, RouteName};

/// Path written for catch-all routes by [`Route::catch_all`].
pub const CATCH_ALL_PATH: &str = "/:pathMatch(.*)*";

/// A route declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    /// Path pattern, absolute at the top level and relative for children.
    pub path: String,
    /// Symbolic name for navigation.
    pub name: Option<RouteName>,
    /// Page to render; for a route with children this is the layout shell.
    pub component: Option<Page>,
    /// Named redirect target. Redirects never reference a path.
    pub redirect: Option<RouteName>,
    /// Nested routes, matched first-match-wins.
    pub children: Vec<Route>,
}

impl Route {
    /// A leaf route rendering `page`.
    pub fn page(path: impl Into<String>, name: impl Into<RouteName>, page: Page) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            component: Some(page),
            redirect: None,
            children: Vec::new(),
        }
    }

    /// A section: a layout component wrapping `children`.
    pub fn section(path: impl Into<String>, layout: Page, children: Vec<Route>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: Some(layout),
            redirect: None,
            children,
        }
    }

    /// A route that redirects to the route named `target`.
    pub fn redirect(path: impl Into<String>, target: impl Into<RouteName>) -> Self {
        Self {
            path: path.into(),
            name: None,
            component: None,
            redirect: Some(target.into()),
            children: Vec::new(),
        }
    }

    /// A catch-all route that redirects to the route named `target`.
    pub fn catch_all(target: impl Into<RouteName>) -> Self {
        Self::redirect(CATCH_ALL_PATH, target)
    }

    /// Sets the route's name.
    #[must_use]
    pub fn named(mut self, name: impl Into<RouteName>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a child route.
    #[must_use]
    pub fn with_child(mut self, child: Route) -> Self {
        self.children.push(child);
        self
    }

    /// Iterates this route and all its descendants, depth first.
    pub fn walk(&self) -> Box<dyn Iterator<Item = &Route> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(Route::walk)))
    }
}
