//! Full dataset search pipeline against the live Anthropic API.
//!
//! Requires `ANTHROPIC_API_KEY` in the environment (or a `.env` file).
//!
//! Run with:
//! ```sh
//! cargo run --example dataset_search --features anthropic -- "climate change indicators"
//! ```

use discovery::ai::AnthropicModel;
use discovery::view::{self, SortKey};
use discovery::{MemoryStore, SearchCache, Searcher};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let query = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "renewable energy production".to_string());

    let searcher = Searcher::new(AnthropicModel::from_env()?);
    let cache = SearchCache::new(MemoryStore::new());

    let result = match cache.lookup(&query).await? {
        Some(hit) => {
            println!("(served from cache)");
            hit
        }
        None => {
            let fresh = searcher.search(&query).await?;
            // A failed store must not cost us the result we already have.
            if let Err(e) = cache.store(&fresh).await {
                tracing::warn!(error = %e, "caching failed, continuing");
            }
            fresh
        }
    };

    println!(
        "\n{} dataset(s) for {:?}:\n",
        result.total_count, result.query
    );

    for dataset in view::sort_datasets(&result.datasets, SortKey::Relevance) {
        println!(
            "  [{:.1}] {} ({})\n        {}\n        {}",
            dataset.relevance_score, dataset.name, dataset.domain, dataset.url, dataset.description
        );
        println!("        use cases: {}\n", dataset.use_cases.join(", "));
    }

    Ok(())
}
