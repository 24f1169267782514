use std::sync::atomic::Ordering;
use std::sync::Arc;

use anyhow::Result;
use log2::*;
use reqwest::Client;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use url::Url;

use super::config::CrawlConfigRef;
use super::prioritize::prioritize_links;
use super::scrape::{extract_article_links, fetch_page, resolve_href, PageLink};
use super::state::CrawlStateRef;

/// Expand pages until the target turns up or the frontier drains.
///
/// The start page is expanded here, before any worker runs, so the frontier
/// is seeded (or known empty) by the time the pool starts. A start page that
/// cannot be fetched ends the crawl with an empty graph.
pub async fn crawl(state: CrawlStateRef, config: CrawlConfigRef) -> Result<()> {
    let client = Client::builder().build()?;
    let fetch_limiter = Arc::new(Semaphore::new(config.fetch_concurrency));

    if let Err(e) = expand_page(&config.start_url, &client, &fetch_limiter, &state, &config).await {
        error!("Start page {} is not fetchable: {}", config.start_url, e);
        state.frontier.close();
        return Ok(());
    }

    if state.frontier.is_empty().await {
        // Nothing for the pool to do; close so workers exit immediately.
        state.frontier.close();
    }

    let mut handles: Vec<JoinHandle<()>> = Vec::new();

    for worker_id in 0..config.worker_count {
        let state = Arc::clone(&state);
        let config = Arc::clone(&config);
        let client = client.clone();
        let fetch_limiter = Arc::clone(&fetch_limiter);

        let handle = tokio::spawn(async move {
            info!("Worker {} started", worker_id);

            loop {
                if state.target_found.is_set() {
                    info!("Worker {}: Target has been found. Exiting...", worker_id);
                    break;
                }

                let entry = match state.frontier.take().await {
                    Some(entry) => entry,
                    None => {
                        info!("Worker {}: Frontier exhausted. Exiting...", worker_id);
                        break;
                    }
                };

                // A take that raced with termination is discarded.
                if state.target_found.is_set() {
                    state.frontier.task_done().await;
                    info!("Worker {}: Target has been found. Exiting...", worker_id);
                    break;
                }

                if state.graph.has_entry(&entry.url).await {
                    state.frontier.task_done().await;
                    continue;
                }

                debug!(
                    "Worker {}: expanding {} (priority {})",
                    worker_id, entry.url, entry.priority
                );

                if let Err(e) =
                    expand_page(&entry.url, &client, &fetch_limiter, &state, &config).await
                {
                    debug!("Worker {}: failed to expand {}: {}", worker_id, entry.url, e);
                }

                state.frontier.task_done().await;
            }

            info!("Worker {} finished", worker_id);
        });

        handles.push(handle);
    }

    for handle in handles {
        handle.await?;
    }

    info!(
        "Crawl finished: {} pages expanded, {} nodes and {} edges recorded",
        state.pages_expanded.load(Ordering::Relaxed),
        state.graph.node_count().await,
        state.graph.edge_count().await,
    );

    Ok(())
}

/// Fetch one page, record its outbound edges, and enqueue its links.
///
/// The fetch limiter permit covers the request and the body read, nothing
/// else. A failed fetch leaves the node unexpanded.
async fn expand_page(
    url: &Url,
    client: &Client,
    fetch_limiter: &Semaphore,
    state: &CrawlStateRef,
    config: &CrawlConfigRef,
) -> Result<()> {
    let html = {
        let _permit = fetch_limiter.acquire().await?;
        fetch_page(url, client, config).await?
    };

    let links = extract_article_links(&html, &config.link_prefix)?;
    info!("Found {} links on {}", links.len(), url);

    process_links(url, &links, state, config).await;

    state.graph.mark_expanded(url).await;
    state.pages_expanded.fetch_add(1, Ordering::Relaxed);

    Ok(())
}

/// Record and enqueue a page's links in document order. Hitting the target
/// stops the scan right there: later links on the page are neither recorded
/// nor enqueued.
async fn process_links(
    current: &Url,
    links: &[PageLink],
    state: &CrawlStateRef,
    config: &CrawlConfigRef,
) {
    let ranked = prioritize_links(links, &config.keywords);

    for (priority, href) in ranked {
        let next = match resolve_href(current, &href) {
            Ok(next) => next,
            Err(e) => {
                debug!("Skipping unresolvable href {:?} on {}: {}", href, current, e);
                continue;
            }
        };

        state.graph.add_edge(current, &next).await;

        if next == config.target_url {
            info!("Target {} found on {}", next, current);
            state.target_found.set();
            state.frontier.close();
            break;
        }

        state.frontier.put(priority, next).await;
    }
}
