//! Core types, route names, and number formatting for citymaps.
//!
//! This crate provides:
//! - [`City`] - The cities the application has statistics for
//! - [`Page`] - Opaque identities of the page components routes render
//! - [`RouteName`] - Closed set of symbolic route names, grouped by [`Section`]
//! - [`LocationRegistry`] - Lookup of route names by section or symbol
//! - [`Error`] - Error types with context
//! - [`round_to_fixed`] - Fixed-point number formatting for display code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod city;
pub mod error;
pub mod format;
pub mod location;
pub mod page;

pub use city::City;
pub use error::{Error, ErrorKind, Result};
pub use format::{round_to_fixed, round_to_fixed_default};
pub use location::{
    CityLocation, EmissionsLocation, LocationRegistry, ModeShare2023Location, ModeShareFlowLocation,
    ModeShareLocation, RootLocation, RouteName, Section,
};
pub use page::Page;
