//! JSON route manifests for the UI framework's navigation subsystem.
//!
//! A manifest mirrors the route declarations in the shape the front end
//! registers them: `{ path, name?, component?, redirect?: { name }, children? }`.

use citymaps_foundation::{Error, ErrorKind, Result, RouteName};
use serde::{Deserialize, Serialize};

use crate::route::Route;
use crate::table::RouteTable;

/// A named location, as used in redirect declarations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLocation {
    /// Target route name.
    pub name: RouteName,
}

/// One route of a manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteManifest {
    /// Declared path pattern.
    pub path: String,
    /// Route name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<RouteName>,
    /// Component name of the rendered page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Named redirect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<NamedLocation>,
    /// Nested routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteManifest>,
}

impl From<&Route> for RouteManifest {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.clone(),
            name: route.name,
            component: route.component.map(|page| page.component_name()),
            redirect: route.redirect.map(|name| NamedLocation { name }),
            children: route.children.iter().map(RouteManifest::from).collect(),
        }
    }
}

/// Builds the manifest of a table.
#[must_use]
pub fn manifest(table: &RouteTable) -> Vec<RouteManifest> {
    table.routes().iter().map(RouteManifest::from).collect()
}

/// Serializes the manifest of a table as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(table: &RouteTable) -> Result<String> {
    serde_json::to_string_pretty(&manifest(table))
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Parses a manifest from JSON.
///
/// Component names are kept as strings; the manifest is not turned back
/// into a [`RouteTable`].
///
/// # Errors
///
/// Returns an error if the JSON is malformed or names an unknown route.
pub fn from_json(json: &str) -> Result<Vec<RouteManifest>> {
    serde_json::from_str(json).map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}
