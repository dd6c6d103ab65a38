//! REPL, CLI support, and manifest export for citymaps.
//!
//! This crate provides:
//! - [`Repl`] - Interactive route resolution
//! - [`Session`] - The active revision, table, and navigation history
//! - Route manifest export to JSON files
//! - `tracing` subscriber setup for the CLI

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod export;
pub mod highlight;
pub mod logging;
pub mod render;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::{DEFAULT_HISTORY_LIMIT, Session};
