pub mod config;
pub mod crawler;
pub mod pathfinder;

use std::sync::Arc;

use anyhow::{bail, Result};
use url::Url;

use crawler::{CrawlConfig, CrawlState};

/// Crawl outward from `start` until `target` turns up as a link, then
/// return the shortest recorded chain of pages between the two.
///
/// An empty vector means no path: either the explored part of the graph
/// never reached the target, or the start page itself could not be fetched.
/// The log distinguishes the two. The one exception is `start == target`,
/// which returns `[start]` without any fetch succeeding.
pub async fn find_path(
    start: Url,
    target: Url,
    concurrency: usize,
    keywords: Vec<String>,
) -> Result<Vec<Url>> {
    if concurrency == 0 {
        bail!("concurrency must be greater than 0");
    }

    let config = Arc::new(
        CrawlConfig::new(start.clone(), target.clone())
            .with_concurrency(concurrency)
            .with_keywords(keywords),
    );
    let state = Arc::new(CrawlState::new());

    crawler::crawl(state.clone(), config).await?;

    let graph = state.graph.snapshot().await;
    let path = pathfinder::find_shortest_path(&start, &target, &graph).unwrap_or_default();

    Ok(path)
}
