//! Cities with published emissions and mode-share statistics.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A city the application has pages for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum City {
    /// Auckland / Tāmaki Makaurau.
    Auckland,
    /// Hamilton / Kirikiriroa.
    Hamilton,
    /// Christchurch / Ōtautahi. The default city of every section.
    Christchurch,
    /// Oamaru.
    Oamaru,
    /// Queenstown.
    Queenstown,
    /// Wellington / Te Whanganui-a-Tara.
    Wellington,
}

impl City {
    /// All cities in declaration order.
    pub const ALL: [City; 6] = [
        City::Auckland,
        City::Hamilton,
        City::Christchurch,
        City::Oamaru,
        City::Queenstown,
        City::Wellington,
    ];

    /// URL path segment for this city.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Auckland => "auckland",
            Self::Hamilton => "hamilton",
            Self::Christchurch => "christchurch",
            Self::Oamaru => "oamaru",
            Self::Queenstown => "queenstown",
            Self::Wellington => "wellington",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Auckland => "Auckland",
            Self::Hamilton => "Hamilton",
            Self::Christchurch => "Christchurch",
            Self::Oamaru => "Oamaru",
            Self::Queenstown => "Queenstown",
            Self::Wellington => "Wellington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|city| city.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_symbol(s))
    }
}
