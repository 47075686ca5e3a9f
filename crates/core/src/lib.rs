//! `shopfront-core` — data model and error foundation for the catalog core.
//!
//! This crate contains **pure types** only (no IO, no HTTP, no runtime
//! concerns): strongly-typed identifiers, the wire-shaped product/category
//! model, and the error taxonomy shared by every other crate in the
//! workspace.

pub mod error;
pub mod id;
pub mod product;

pub use error::{CatalogError, CatalogResult};
pub use id::{CategoryId, ProductId};
pub use product::{Category, NewProduct, PLACEHOLDER_IMAGE, Product};
