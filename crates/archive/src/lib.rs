//! The Archive Query Service.
//!
//! Typed read/write access to the union's five persisted collections,
//! layered over the [`aluta_store`] boundary. Each repository translates
//! raw store rows into the record structs in [`models`] and surfaces
//! store failures unmodified as [`aluta_store::StoreError`].

pub mod models;
pub mod repositories;
