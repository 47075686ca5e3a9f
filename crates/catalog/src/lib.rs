//! Catalog aggregation (pure derived views).
//!
//! This crate contains the read-only view derivations for a loaded product
//! collection, implemented purely as deterministic logic (no IO, no HTTP, no
//! storage).

pub mod aggregate;

pub use aggregate::CatalogAggregator;
