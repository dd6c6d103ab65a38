//! The application's route tables, one per historical revision.
//!
//! Revisions are kept side by side rather than merged: each has its own set
//! of sections and its own global fallback.
//!
//! | Revision          | Sections                                          | Global fallback        |
//! |-------------------|---------------------------------------------------|------------------------|
//! | `emissions`       | `/emissions`                                      | Emissions Christchurch |
//! | `mode-share`      | `/emissions`, `/mode-share`, `/about`             | About                  |
//! | `mode-share-flow` | `/emissions`, `/mode-share-flow`, `/`             | Root                   |
//! | `mode-share-2023` | `/emissions`, `/mode-share-2023`, `/about`        | About                  |
//!
//! Every city section falls back to its Christchurch page.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use citymaps_foundation::{
    City, CityLocation, EmissionsLocation, Error, ErrorKind, ModeShare2023Location,
    ModeShareFlowLocation, ModeShareLocation, Page, Result, RootLocation, RouteName,
};

use crate::config::RouterConfig;
use crate::route::Route;
use crate::table::RouteTable;

/// A historical revision of the route table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Revision {
    /// Emissions maps only.
    Emissions,
    /// Emissions and census mode share, with an about page.
    ModeShare,
    /// Emissions and commuter flows, with a landing page.
    ModeShareFlow,
    /// Emissions and the 2023 census mode-share viewers.
    ModeShare2023,
}

impl Revision {
    /// All revisions, oldest first.
    pub const ALL: [Revision; 4] = [
        Revision::Emissions,
        Revision::ModeShare,
        Revision::ModeShareFlow,
        Revision::ModeShare2023,
    ];

    /// The revision the application currently ships.
    pub const CURRENT: Revision = Revision::ModeShare;

    /// Kebab-case name of this revision.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emissions => "emissions",
            Self::ModeShare => "mode-share",
            Self::ModeShareFlow => "mode-share-flow",
            Self::ModeShare2023 => "mode-share-2023",
        }
    }

    /// Where unmatched top-level paths are redirected.
    #[must_use]
    pub fn global_fallback(self) -> RouteName {
        match self {
            Self::Emissions => EmissionsLocation::Christchurch.into(),
            Self::ModeShare | Self::ModeShare2023 => RootLocation::About.into(),
            Self::ModeShareFlow => RootLocation::Root.into(),
        }
    }

    /// Route declarations of this revision.
    #[must_use]
    pub fn routes(self) -> Vec<Route> {
        match self {
            Self::Emissions => vec![
                emissions_section(),
                Route::catch_all(EmissionsLocation::Christchurch),
            ],
            Self::ModeShare => vec![
                emissions_section(),
                mode_share_section(),
                about_page(),
                Route::catch_all(RootLocation::About).named(RootLocation::Root),
            ],
            Self::ModeShareFlow => vec![
                emissions_section(),
                mode_share_flow_section(),
                Route::page("/", RootLocation::Root, Page::Home),
                Route::catch_all(RootLocation::Root),
            ],
            Self::ModeShare2023 => vec![
                emissions_section(),
                mode_share_2023_section(),
                about_page(),
                Route::catch_all(RootLocation::About).named(RootLocation::Root),
            ],
        }
    }

    /// Builds a fresh table for this revision.
    ///
    /// # Errors
    ///
    /// Returns an error only if `config` makes the declarations invalid
    /// (e.g. a `max_redirects` shorter than a revision's redirect chain).
    pub fn build_table(self, config: RouterConfig) -> Result<RouteTable> {
        RouteTable::builder()
            .config(config)
            .routes(self.routes())
            .build()
    }

    /// The process-wide table of this revision, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the built-in declarations are invalid, which the test
    /// suite rules out.
    #[must_use]
    pub fn table(self) -> &'static RouteTable {
        static EMISSIONS: LazyLock<RouteTable> = LazyLock::new(|| builtin(Revision::Emissions));
        static MODE_SHARE: LazyLock<RouteTable> = LazyLock::new(|| builtin(Revision::ModeShare));
        static MODE_SHARE_FLOW: LazyLock<RouteTable> =
            LazyLock::new(|| builtin(Revision::ModeShareFlow));
        static MODE_SHARE_2023: LazyLock<RouteTable> =
            LazyLock::new(|| builtin(Revision::ModeShare2023));

        match self {
            Self::Emissions => &EMISSIONS,
            Self::ModeShare => &MODE_SHARE,
            Self::ModeShareFlow => &MODE_SHARE_FLOW,
            Self::ModeShare2023 => &MODE_SHARE_2023,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Revision {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("current") {
            return Ok(Self::CURRENT);
        }
        Self::ALL
            .into_iter()
            .find(|rev| rev.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::new(ErrorKind::UnknownRevision(s.to_string())))
    }
}

fn builtin(revision: Revision) -> RouteTable {
    revision
        .build_table(RouterConfig::default())
        .expect("built-in route table is valid")
}

// =============================================================================
// Sections
// =============================================================================

fn city_section<L: CityLocation>(
    base: &str,
    layout: Page,
    page: fn(City) -> Page,
    default: L,
) -> Route {
    let mut children: Vec<Route> = L::ALL
        .iter()
        .map(|&loc| Route::page(loc.city().slug(), loc, page(loc.city())))
        .collect();
    children.push(Route::catch_all(default));
    Route::section(base, layout, children)
}

fn emissions_section() -> Route {
    city_section(
        "/emissions",
        Page::EmissionsBase,
        Page::Emissions,
        EmissionsLocation::Christchurch,
    )
}

fn mode_share_section() -> Route {
    city_section(
        "/mode-share",
        Page::ModeShareBase,
        Page::ModeShare,
        ModeShareLocation::Christchurch,
    )
}

fn mode_share_flow_section() -> Route {
    city_section(
        "/mode-share-flow",
        Page::ModeShareFlowBase,
        Page::ModeShareFlow,
        ModeShareFlowLocation::Christchurch,
    )
}

fn mode_share_2023_section() -> Route {
    city_section(
        "/mode-share-2023",
        Page::ModeShare2023Base,
        Page::ModeShare2023,
        ModeShare2023Location::Christchurch,
    )
}

fn about_page() -> Route {
    Route::page("/about", RootLocation::About, Page::About)
}
