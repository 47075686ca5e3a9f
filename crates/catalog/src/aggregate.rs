//! Derived read-only views over a product collection.

use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, Utc};

use shopfront_core::{Category, CategoryId, Product};

/// Pure aggregation over an ordered product collection.
///
/// Borrows the input sequence and derives bounded views from it. All three
/// operations are deterministic functions of the input: no hidden state, no
/// side effects, and the source collection is never mutated. The views are
/// always subsets of the input — entries are never fabricated.
#[derive(Debug, Clone, Copy)]
pub struct CatalogAggregator<'a> {
    products: &'a [Product],
}

impl<'a> CatalogAggregator<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self { products }
    }

    /// The first `n` products in input order.
    ///
    /// Position is the only ranking signal. A collection shorter than `n`
    /// yields everything available; this is not an error.
    pub fn featured(&self, n: usize) -> &'a [Product] {
        &self.products[..n.min(self.products.len())]
    }

    /// Distinct categories referenced by the collection, each exactly once,
    /// in order of first appearance.
    ///
    /// When two products share a category id with differing attributes, the
    /// first occurrence wins; there is no merge policy upstream.
    pub fn categories(&self) -> Vec<Category> {
        let mut seen: HashSet<CategoryId> = HashSet::new();
        let mut out = Vec::new();
        for product in self.products {
            if seen.insert(product.category.id) {
                out.push(product.category.clone());
            }
        }
        out
    }

    /// The top `n` products by `creationAt`, newest first.
    ///
    /// Sorts a keyed copy, never the input. Ties keep their original input
    /// order (the sort is stable over the position index). Products whose
    /// timestamp does not parse are excluded from this view only — the rest
    /// of the collection is unaffected, and callers that want to hard-fail
    /// can check [`Product::created_at_instant`] themselves.
    pub fn latest(&self, n: usize) -> Vec<Product> {
        let mut keyed: Vec<(DateTime<Utc>, usize)> = self
            .products
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| p.created_at_instant().ok().map(|at| (at, idx)))
            .collect();

        keyed.sort_by_key(|&(at, _)| Reverse(at));

        keyed
            .into_iter()
            .take(n)
            .map(|(_, idx)| self.products[idx].clone())
            .collect()
    }
}
