//! "Load more" state machine for a paginated list view.

use std::future::Future;

use tokio::sync::Mutex;

use shopfront_core::{CatalogResult, Product};

/// Items requested per page unless the view configures its own size.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Seam between the loader and whatever fetches pages (HTTP client in
/// production, scripted fetchers in tests).
///
/// The offset for page `k` (1-indexed) is `(k - 1) * page_size`.
pub trait PageFetcher {
    /// Fetch one page of the remote list resource.
    fn fetch_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;
}

/// Externally observable loader state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Nothing fetched yet.
    Idle,
    /// A fetch for the current cursor is in flight.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed; the buffer and cursor were left untouched and
    /// a retry will reuse the same cursor.
    Failed,
}

/// What a "load more" trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and `count` items were appended to the buffer.
    Appended { count: usize },
    /// A fetch was already in flight; the trigger was ignored.
    AlreadyInFlight,
    /// A previous page came back short, so the resource is exhausted and
    /// nothing was fetched.
    NoMoreData,
}

#[derive(Debug)]
struct Inner {
    state: LoaderState,
    items: Vec<Product>,
    next_offset: usize,
    has_more: bool,
}

/// Incremental loader for a paginated remote list.
///
/// Each instance exclusively owns its accumulation buffer and cursor; the
/// buffer is appended to, never truncated, for the lifetime of the view.
/// There is no fetch-on-construction side effect — the hosting view issues
/// the first [`ListLoader::load_more`] explicitly when it is displayed.
///
/// State lives behind a lock, so a fetch completing after the view has moved
/// on can never interleave a partial update; at most one fetch per instance
/// is in flight at a time.
#[derive(Debug)]
pub struct ListLoader<F> {
    fetcher: F,
    page_size: usize,
    inner: Mutex<Inner>,
}

impl<F: PageFetcher> ListLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_page_size(fetcher, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(fetcher: F, page_size: usize) -> Self {
        assert!(page_size > 0, "page_size must be at least 1");
        Self {
            fetcher,
            page_size,
            inner: Mutex::new(Inner {
                state: LoaderState::Idle,
                items: Vec::new(),
                next_offset: 0,
                has_more: true,
            }),
        }
    }

    /// Fetch the next page and append it to the accumulation buffer.
    ///
    /// Ignored (returns [`LoadOutcome::AlreadyInFlight`]) while a fetch for
    /// the current cursor is running, so rapid repeated triggers never race
    /// overlapping fetches. On success the cursor advances by the page size
    /// and a short page clears `has_more`. On error the buffer and cursor are
    /// unchanged, the state moves to [`LoaderState::Failed`], and the error
    /// is returned as a value so the view can offer a retry.
    pub async fn load_more(&self) -> CatalogResult<LoadOutcome> {
        let offset = {
            let mut inner = self.inner.lock().await;
            if inner.state == LoaderState::Loading {
                tracing::debug!(offset = inner.next_offset, "load_more ignored: fetch in flight");
                return Ok(LoadOutcome::AlreadyInFlight);
            }
            if !inner.has_more {
                return Ok(LoadOutcome::NoMoreData);
            }
            inner.state = LoaderState::Loading;
            inner.next_offset
        };

        tracing::debug!(offset, limit = self.page_size, "fetching page");

        match self.fetcher.fetch_page(offset, self.page_size).await {
            Ok(page) => {
                let mut inner = self.inner.lock().await;
                let count = page.len();
                inner.has_more = count == self.page_size;
                inner.next_offset += self.page_size;
                inner.items.extend(page);
                inner.state = LoaderState::Loaded;
                tracing::debug!(
                    count,
                    total = inner.items.len(),
                    has_more = inner.has_more,
                    "page appended"
                );
                Ok(LoadOutcome::Appended { count })
            }
            Err(err) => {
                let mut inner = self.inner.lock().await;
                inner.state = LoaderState::Failed;
                tracing::warn!(offset, error = %err, "page fetch failed");
                Err(err)
            }
        }
    }

    pub async fn state(&self) -> LoaderState {
        self.inner.lock().await.state
    }

    /// Snapshot of the accumulation buffer (all pages fetched so far).
    pub async fn items(&self) -> Vec<Product> {
        self.inner.lock().await.items.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.items.is_empty()
    }

    /// Whether the last fetched page was full, i.e. another page may exist.
    pub async fn has_more(&self) -> bool {
        self.inner.lock().await.has_more
    }

    /// Offset the next fetch will use.
    pub async fn next_offset(&self) -> usize {
        self.inner.lock().await.next_offset
    }
}
