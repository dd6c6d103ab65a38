//! Integration tests for Layer 1: Router
//!
//! Tests for route tables: building, validation, resolution, and the
//! built-in revisions.

mod building;
mod matching;
mod revisions;
