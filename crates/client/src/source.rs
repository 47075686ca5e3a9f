//! Product sources: remote catalog or bundled static dataset.

use std::future::Future;

use shopfront_core::{CatalogError, CatalogResult, Product};

use crate::remote::CatalogClient;

/// A source of the full product collection.
///
/// The aggregation layer consumes this seam without caring whether the
/// collection was fetched over the network or bundled with the binary.
pub trait ProductSource {
    /// The full product collection, in source order.
    fn all_products(&self) -> impl Future<Output = CatalogResult<Vec<Product>>> + Send;
}

impl ProductSource for CatalogClient {
    async fn all_products(&self) -> CatalogResult<Vec<Product>> {
        self.fetch_all().await
    }
}

/// Static product dataset embedded at compile time.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    /// Parse the dataset bundled with this crate.
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(include_str!("../assets/products.json"))
    }

    /// Parse a product collection from a JSON array.
    pub fn from_json(raw: &str) -> CatalogResult<Self> {
        let products = serde_json::from_str(raw)
            .map_err(|e| CatalogError::malformed(format!("static dataset: {e}")))?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl ProductSource for StaticCatalog {
    async fn all_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let catalog = StaticCatalog::bundled().unwrap();
        assert!(!catalog.products().is_empty());

        // Every bundled entry must carry a parseable creation timestamp.
        for product in catalog.products() {
            product.created_at_instant().unwrap();
        }
    }

    #[test]
    fn from_json_rejects_wrong_shape() {
        let err = StaticCatalog::from_json(r#"{"not": "an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedResponse(_)));
    }
}
