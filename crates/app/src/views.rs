//! The three hosting views over the catalog core.

use anyhow::Context;

use shopfront_catalog::CatalogAggregator;
use shopfront_client::{CatalogClient, ProductSource, StaticCatalog};
use shopfront_core::{CategoryId, NewProduct, Product};
use shopfront_loader::{ListLoader, LoadOutcome};

/// How many products the landing view features.
const FEATURED_COUNT: usize = 4;

/// How many latest arrivals the landing view shows.
const LATEST_COUNT: usize = 4;

/// Landing view: featured, categories, latest — derived from either source.
pub async fn home(base_url: &str, remote: bool) -> anyhow::Result<()> {
    let products = if remote {
        tracing::info!(base_url, "loading catalog from remote source");
        CatalogClient::new(base_url)
            .all_products()
            .await
            .context("failed to load the remote catalog")?
    } else {
        StaticCatalog::bundled()
            .context("failed to parse the bundled dataset")?
            .all_products()
            .await?
    };

    render_home(&products);
    Ok(())
}

fn render_home(products: &[Product]) {
    let agg = CatalogAggregator::new(products);

    println!("Featured products");
    for p in agg.featured(FEATURED_COUNT) {
        println!("  #{:<4} {:<40} ${:<8} [{}]", p.id, p.title, p.price, p.category.name);
    }

    println!("\nCategories");
    for c in agg.categories() {
        println!("  #{:<4} {}", c.id, c.name);
    }

    println!("\nLatest arrivals");
    for p in agg.latest(LATEST_COUNT) {
        println!("  #{:<4} {:<40} {}", p.id, p.title, p.creation_at);
    }
}

/// Listing view: issue `pages` "load more" triggers, then print the buffer.
pub async fn products(base_url: &str, pages: usize, page_size: usize) -> anyhow::Result<()> {
    let loader = ListLoader::with_page_size(CatalogClient::new(base_url), page_size);

    for _ in 0..pages {
        match loader.load_more().await {
            Ok(LoadOutcome::Appended { count }) => {
                let total = loader.len().await;
                tracing::info!(count, total, "page loaded");
            }
            Ok(LoadOutcome::NoMoreData) => break,
            Ok(LoadOutcome::AlreadyInFlight) => {}
            Err(err) => {
                // Surfaced as a value: report and stop so the user can retry;
                // the loader kept its cursor, so a rerun resumes cleanly.
                eprintln!(
                    "fetch failed at offset {}: {err} (rerun to retry)",
                    loader.next_offset().await
                );
                break;
            }
        }
    }

    for p in loader.items().await {
        println!("#{:<4} {:<40} ${:<8} [{}]", p.id, p.title, p.price, p.category.name);
    }

    if loader.has_more().await {
        println!("\n(more products available — raise --pages to load them)");
    } else {
        println!("\n(end of catalog)");
    }
    Ok(())
}

/// Creation view: pass-through write to the remote creation resource.
pub async fn create(
    base_url: &str,
    title: String,
    price: f64,
    category_id: u64,
    images: Vec<String>,
    description: String,
) -> anyhow::Result<()> {
    let payload = NewProduct {
        title,
        price,
        category_id: CategoryId::new(category_id),
        images,
        description,
    };

    let created = CatalogClient::new(base_url)
        .create_product(&payload)
        .await
        .context("failed to save the new product")?;

    println!("Created product #{}: {}", created.id, created.title);
    Ok(())
}
