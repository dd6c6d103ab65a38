//! Page component identities.
//!
//! The UI layer owns the actual renderable units. Routes only hold a
//! [`Page`] naming which one to mount, never constructing or destroying it.

use std::fmt;

use crate::city::City;

/// A page component a route can render.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Layout shell of the emissions section.
    EmissionsBase,
    /// Per-SA1 CO2 emissions map of a city.
    Emissions(City),
    /// Layout shell of the mode-share section.
    ModeShareBase,
    /// Mode-share map of a city.
    ModeShare(City),
    /// Layout shell of the mode-share flow section.
    ModeShareFlowBase,
    /// Commuter flow map of a city.
    ModeShareFlow(City),
    /// Layout shell of the 2023 census mode-share section.
    ModeShare2023Base,
    /// 2023 census mode-share viewer of a city.
    ModeShare2023(City),
    /// Landing page.
    Home,
    /// About the project.
    About,
}

impl Page {
    /// Whether this page is a section layout shell rather than a leaf page.
    #[must_use]
    pub const fn is_layout(self) -> bool {
        matches!(
            self,
            Self::EmissionsBase
                | Self::ModeShareBase
                | Self::ModeShareFlowBase
                | Self::ModeShare2023Base
        )
    }

    /// The city this page presents, if any.
    #[must_use]
    pub const fn city(self) -> Option<City> {
        match self {
            Self::Emissions(city)
            | Self::ModeShare(city)
            | Self::ModeShareFlow(city)
            | Self::ModeShare2023(city) => Some(city),
            _ => None,
        }
    }

    /// Component name as registered with the UI layer.
    #[must_use]
    pub fn component_name(self) -> String {
        match self {
            Self::EmissionsBase => "EmissionsBase".to_string(),
            Self::Emissions(city) => format!("{city}Co2Sa1Page"),
            Self::ModeShareBase | Self::ModeShare2023Base => "ModeShareBase".to_string(),
            Self::ModeShare(city) => format!("{city}ModeSharePage"),
            Self::ModeShare2023(City::Christchurch) => "ChristchurchModeSharePage".to_string(),
            Self::ModeShareFlowBase => "ModeShareFlowBase".to_string(),
            Self::ModeShareFlow(city) => format!("{city}ModeShareFlowPage"),
            Self::ModeShare2023(city) => format!("{city}ModeShareViewer"),
            Self::Home => "HomePage".to_string(),
            Self::About => "AboutPage".to_string(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.component_name())
    }
}
