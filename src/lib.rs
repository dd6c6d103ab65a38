//! Citymaps - Route tables for a city transport data explorer
//!
//! This crate re-exports all layers of the Citymaps system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: citymaps_runtime    - REPL, CLI, logging setup, manifest export
//! Layer 1: citymaps_router     - Route declarations, tables, resolution, revisions
//! Layer 0: citymaps_foundation - Core types (City, Page, RouteName, Error), formatting
//! ```

pub use citymaps_foundation as foundation;
pub use citymaps_router as router;
pub use citymaps_runtime as runtime;
