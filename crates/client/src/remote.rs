//! HTTP client for the remote catalog resource.

use serde::de::DeserializeOwned;

use shopfront_core::{CatalogError, CatalogResult, Category, NewProduct, Product};
use shopfront_loader::PageFetcher;

/// Public demo deployment of the catalog API.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1";

/// Client for the remote catalog collaborators: the paginated product list,
/// the category collection, and the creation resource.
///
/// Transport failures and non-success statuses map to
/// [`CatalogError::NetworkFailure`]; a body that does not decode as the
/// expected shape maps to [`CatalogError::MalformedResponse`].
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fetch the full product collection (non-paginated).
    pub async fn fetch_all(&self) -> CatalogResult<Vec<Product>> {
        let res = self
            .http
            .get(self.endpoint("products"))
            .send()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;
        decode(res).await
    }

    /// Fetch the full category collection ("fetch all", no parameters).
    pub async fn fetch_categories(&self) -> CatalogResult<Vec<Category>> {
        let res = self
            .http
            .get(self.endpoint("categories"))
            .send()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;
        decode(res).await
    }

    /// Pass-through write to the remote creation resource.
    pub async fn create_product(&self, payload: &NewProduct) -> CatalogResult<Product> {
        tracing::debug!(title = %payload.title, "creating product");
        let res = self
            .http
            .post(self.endpoint("products"))
            .json(payload)
            .send()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;
        decode(res).await
    }
}

impl PageFetcher for CatalogClient {
    /// `GET {base}/products?offset={offset}&limit={limit}`.
    async fn fetch_page(&self, offset: usize, limit: usize) -> CatalogResult<Vec<Product>> {
        let res = self
            .http
            .get(self.endpoint("products"))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await
            .map_err(|e| CatalogError::network(e.to_string()))?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> CatalogResult<T> {
    let status = res.status();
    if !status.is_success() {
        return Err(CatalogError::network(format!("unexpected status {status}")));
    }
    res.json::<T>()
        .await
        .map_err(|e| CatalogError::malformed(e.to_string()))
}
