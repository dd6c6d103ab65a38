//! Symbolic route names and the location registry.
//!
//! Every route that other parts of the application navigate to is named by a
//! variant of a per-section enum. Navigation requests go through these names,
//! never through hard-coded path strings, so a path segment can be renamed
//! without breaking callers or fallback redirects.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::city::City;
use crate::error::{Error, Result};

/// Declares a per-city location enum for one section.
///
/// Variants must be named after [`City`] variants.
macro_rules! city_locations {
    (
        $(#[$meta:meta])*
        $name:ident => $wrap:ident {
            $($variant:ident => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(missing_docs)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every location of this section, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Route names of this section, in declaration order.
            pub const NAMES: &'static [RouteName] = &[$(RouteName::$wrap($name::$variant)),+];

            /// Stable symbol of this location.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $symbol),+
                }
            }

            /// The city this location presents.
            #[must_use]
            pub const fn city(self) -> City {
                match self {
                    $(Self::$variant => City::$variant),+
                }
            }

            /// The location of `city` in this section, if the section covers it.
            #[must_use]
            pub fn from_city(city: City) -> Option<Self> {
                Self::ALL.iter().copied().find(|loc| loc.city() == city)
            }
        }

        impl From<$name> for RouteName {
            fn from(loc: $name) -> Self {
                RouteName::$wrap(loc)
            }
        }

        impl CityLocation for $name {
            const ALL: &'static [Self] = $name::ALL;

            fn city(self) -> City {
                $name::city(self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }
    };
}

/// A per-city location enum.
pub trait CityLocation: Copy + Into<RouteName> + 'static {
    /// Every location of the section, in declaration order.
    const ALL: &'static [Self];

    /// The city this location presents.
    fn city(self) -> City;
}

city_locations! {
    /// Per-city pages of the emissions section.
    EmissionsLocation => Emissions {
        Auckland => "EMISSIONS_AUCKLAND",
        Hamilton => "EMISSIONS_HAMILTON",
        Christchurch => "EMISSIONS_CHRISTCHURCH",
        Oamaru => "EMISSIONS_OAMARU",
        Queenstown => "EMISSIONS_QUEENSTOWN",
        Wellington => "EMISSIONS_WELLINGTON",
    }
}

city_locations! {
    /// Per-city pages of the mode-share section.
    ModeShareLocation => ModeShare {
        Auckland => "MODE_SHARE_AUCKLAND",
        Hamilton => "MODE_SHARE_HAMILTON",
        Christchurch => "MODE_SHARE_CHRISTCHURCH",
        Oamaru => "MODE_SHARE_OAMARU",
        Queenstown => "MODE_SHARE_QUEENSTOWN",
        Wellington => "MODE_SHARE_WELLINGTON",
    }
}

city_locations! {
    /// Per-city pages of the mode-share flow section.
    ModeShareFlowLocation => ModeShareFlow {
        Auckland => "MODE_SHARE_FLOW_AUCKLAND",
        Hamilton => "MODE_SHARE_FLOW_HAMILTON",
        Christchurch => "MODE_SHARE_FLOW_CHRISTCHURCH",
        Oamaru => "MODE_SHARE_FLOW_OAMARU",
        Queenstown => "MODE_SHARE_FLOW_QUEENSTOWN",
        Wellington => "MODE_SHARE_FLOW_WELLINGTON",
    }
}

city_locations! {
    /// Per-city viewers of the 2023 census mode-share section.
    ModeShare2023Location => ModeShare2023 {
        Auckland => "MODE_SHARE_2023_AUCKLAND",
        Christchurch => "MODE_SHARE_2023_CHRISTCHURCH",
        Oamaru => "MODE_SHARE_2023_OAMARU",
        Wellington => "MODE_SHARE_2023_WELLINGTON",
    }
}

/// Top-level pages outside the city sections.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RootLocation {
    /// The about page.
    About,
    /// The site root.
    Root,
}

impl RootLocation {
    /// Every root location, in declaration order.
    pub const ALL: &'static [RootLocation] = &[RootLocation::About, RootLocation::Root];

    /// Route names of the root section.
    pub const NAMES: &'static [RouteName] = &[
        RouteName::Root(RootLocation::About),
        RouteName::Root(RootLocation::Root),
    ];

    /// Stable symbol of this location.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::About => "ROOT_ABOUT",
            Self::Root => "ROOT_ROOT",
        }
    }
}

impl From<RootLocation> for RouteName {
    fn from(loc: RootLocation) -> Self {
        RouteName::Root(loc)
    }
}

impl fmt::Display for RootLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// =============================================================================
// RouteName
// =============================================================================

/// A unique, stable identifier of a route, used for named navigation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    /// A page of the emissions section.
    Emissions(EmissionsLocation),
    /// A page of the mode-share section.
    ModeShare(ModeShareLocation),
    /// A page of the mode-share flow section.
    ModeShareFlow(ModeShareFlowLocation),
    /// A page of the 2023 mode-share section.
    ModeShare2023(ModeShare2023Location),
    /// A top-level page.
    Root(RootLocation),
}

impl RouteName {
    /// The section this name belongs to.
    #[must_use]
    pub const fn section(self) -> Section {
        match self {
            Self::Emissions(_) => Section::Emissions,
            Self::ModeShare(_) => Section::ModeShare,
            Self::ModeShareFlow(_) => Section::ModeShareFlow,
            Self::ModeShare2023(_) => Section::ModeShare2023,
            Self::Root(_) => Section::Root,
        }
    }

    /// Stable symbol of this name, e.g. `EMISSIONS_CHRISTCHURCH`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emissions(loc) => loc.as_str(),
            Self::ModeShare(loc) => loc.as_str(),
            Self::ModeShareFlow(loc) => loc.as_str(),
            Self::ModeShare2023(loc) => loc.as_str(),
            Self::Root(loc) => loc.as_str(),
        }
    }

    /// The city this name presents, if any.
    #[must_use]
    pub const fn city(self) -> Option<City> {
        match self {
            Self::Emissions(loc) => Some(loc.city()),
            Self::ModeShare(loc) => Some(loc.city()),
            Self::ModeShareFlow(loc) => Some(loc.city()),
            Self::ModeShare2023(loc) => Some(loc.city()),
            Self::Root(_) => None,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        LocationRegistry::lookup(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for RouteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for RouteName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let symbol = String::deserialize(deserializer)?;
        LocationRegistry::lookup(&symbol).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Section & LocationRegistry
// =============================================================================

/// A logical group of route names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    /// CO2 emissions per statistical area.
    Emissions,
    /// Census journey-to-work mode share.
    ModeShare,
    /// Commuter flows between areas.
    ModeShareFlow,
    /// 2023 census mode share.
    ModeShare2023,
    /// Top-level pages.
    Root,
}

impl Section {
    /// All sections in registry order.
    pub const ALL: [Section; 5] = [
        Section::Emissions,
        Section::ModeShare,
        Section::ModeShareFlow,
        Section::ModeShare2023,
        Section::Root,
    ];

    /// Registry key of this section.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emissions => "Emissions",
            Self::ModeShare => "ModeShare",
            Self::ModeShareFlow => "ModeShareFlow",
            Self::ModeShare2023 => "ModeShare2023",
            Self::Root => "Root",
        }
    }

    /// Route names registered under this section.
    #[must_use]
    pub const fn names(self) -> &'static [RouteName] {
        match self {
            Self::Emissions => EmissionsLocation::NAMES,
            Self::ModeShare => ModeShareLocation::NAMES,
            Self::ModeShareFlow => ModeShareFlowLocation::NAMES,
            Self::ModeShare2023 => ModeShare2023Location::NAMES,
            Self::Root => RootLocation::NAMES,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted: String = s.chars().filter(|c| *c != '-' && *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|section| section.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| Error::unknown_symbol(s))
    }
}

/// Process-wide registry of route names grouped by section.
///
/// The registry is a compile-time constant; it is never mutated.
#[derive(Copy, Clone, Debug, Default)]
pub struct LocationRegistry;

impl LocationRegistry {
    /// All sections.
    #[must_use]
    pub const fn sections() -> &'static [Section] {
        &Section::ALL
    }

    /// Route names of one section.
    #[must_use]
    pub const fn names(section: Section) -> &'static [RouteName] {
        section.names()
    }

    /// Iterates every registered route name.
    pub fn all() -> impl Iterator<Item = RouteName> {
        Section::ALL.into_iter().flat_map(|s| s.names().iter().copied())
    }

    /// Looks up a route name by its symbol.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownSymbol`](crate::ErrorKind::UnknownSymbol)
    /// if no registered name has this symbol.
    pub fn lookup(symbol: &str) -> Result<RouteName> {
        let symbol = symbol.trim();
        Self::all()
            .find(|name| name.as_str().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| Error::unknown_symbol(symbol))
    }
}
