//! Incremental loading of a paginated remote list resource.
//!
//! The loader owns a monotonically growing accumulation buffer and an offset
//! cursor, and enforces at most one in-flight fetch per instance.

pub mod list_loader;

pub use list_loader::{
    DEFAULT_PAGE_SIZE, ListLoader, LoadOutcome, LoaderState, PageFetcher,
};
