//! Domain types shared across the archive workspace.
//!
//! This crate has zero internal dependencies so it can be used by the
//! store layer, the query service, and any future CLI tooling alike.

pub mod roll;
pub mod taxonomy;
pub mod types;
