//! Benchmarks for the derived catalog views.
//!
//! Run with: cargo bench -p shopfront-catalog

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use shopfront_catalog::CatalogAggregator;
use shopfront_core::{Category, CategoryId, Product, ProductId};

fn sample_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| Product {
            id: ProductId::new(i as u64),
            title: format!("Product {i}"),
            price: (i % 100) as f64,
            description: "benchmark product".to_string(),
            category: Category {
                id: CategoryId::new((i % 12) as u64),
                name: format!("Category {}", i % 12),
                image: String::new(),
            },
            images: vec![format!("https://example.com/{i}.png")],
            creation_at: format!(
                "2024-{:02}-{:02}T{:02}:00:00.000Z",
                i % 12 + 1,
                i % 28 + 1,
                i % 24
            ),
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let products = sample_products(10_000);

    c.bench_function("featured_4_of_10k", |b| {
        b.iter(|| {
            let agg = CatalogAggregator::new(black_box(&products));
            black_box(agg.featured(4));
        })
    });

    c.bench_function("categories_of_10k", |b| {
        b.iter(|| {
            let agg = CatalogAggregator::new(black_box(&products));
            black_box(agg.categories());
        })
    });

    c.bench_function("latest_4_of_10k", |b| {
        b.iter(|| {
            let agg = CatalogAggregator::new(black_box(&products));
            black_box(agg.latest(4));
        })
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
