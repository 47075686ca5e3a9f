//! `shopfront` — catalog browsing CLI.
//!
//! Three views mirror the browsing surface: `home` (aggregated featured /
//! categories / latest), `products` (incremental paginated listing), and
//! `create` (pass-through product creation).

use clap::{Parser, Subcommand};

mod views;

#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Browse and manage a remote product catalog")]
struct Cli {
    /// Base URL of the remote catalog API.
    #[arg(
        long,
        global = true,
        env = "CATALOG_BASE_URL",
        default_value = shopfront_client::DEFAULT_BASE_URL
    )]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Landing view: featured products, categories, latest arrivals.
    Home {
        /// Read from the remote catalog instead of the bundled dataset.
        #[arg(long)]
        remote: bool,
    },
    /// Paginated product listing driven by repeated "load more" triggers.
    Products {
        /// Number of "load more" triggers to issue.
        #[arg(long, default_value_t = 3)]
        pages: usize,

        /// Items requested per page.
        #[arg(long, default_value_t = shopfront_loader::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Create a product through the remote creation resource.
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        price: f64,

        #[arg(long)]
        category_id: u64,

        /// Image URL; repeat the flag for multiple images.
        #[arg(long = "image")]
        images: Vec<String>,

        #[arg(long, default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopfront_observability::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Home { remote } => views::home(&cli.base_url, remote).await,
        Command::Products { pages, page_size } => {
            views::products(&cli.base_url, pages, page_size).await
        }
        Command::Create {
            title,
            price,
            category_id,
            images,
            description,
        } => views::create(&cli.base_url, title, price, category_id, images, description).await,
    }
}
