//! Clients for the external catalog collaborators.
//!
//! Two interchangeable product sources live here: the remote catalog API
//! (reqwest) and the bundled static dataset. Both sit behind the
//! [`ProductSource`] seam so the aggregation layer works identically
//! regardless of where the collection came from.

pub mod remote;
pub mod source;

pub use remote::{CatalogClient, DEFAULT_BASE_URL};
pub use source::{ProductSource, StaticCatalog};
