//! Route tables, path matching, and named navigation for citymaps.
//!
//! This crate provides:
//! - [`Route`] - Declarative route records
//! - [`RouteTable`] - Validated, immutable tables with total path resolution
//! - [`Revision`] - The application's historical route tables
//! - [`RouterConfig`] - Matching options
//! - Route manifests for the front end (with the `serde` feature)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
#[cfg(feature = "serde")]
pub mod manifest;
pub mod pattern;
pub mod resolve;
pub mod revision;
pub mod route;
pub mod table;

pub use config::RouterConfig;
pub use pattern::{PathPattern, RequestPath};
pub use resolve::{Redirect, Resolution, RouteMatch};
pub use revision::Revision;
pub use route::{CATCH_ALL_PATH, Route};
pub use table::{RouteId, RouteRecord, RouteTable, RouteTableBuilder, Target};
