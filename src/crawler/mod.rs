pub mod config;
pub mod frontier;
pub mod graph;
pub mod prioritize;
pub mod runner;
pub mod scrape;
pub mod signal;
pub mod state;


pub use config::{CrawlConfig, CrawlConfigRef, ARTICLE_LINK_PREFIX, DEFAULT_CONCURRENCY};
pub use frontier::{Frontier, FrontierEntry};
pub use graph::LinkGraph;
pub use prioritize::prioritize_links;
pub use runner::crawl;
pub use scrape::{extract_article_links, fetch_page, resolve_href, PageLink};
pub use signal::TargetSignal;
pub use state::{CrawlState, CrawlStateRef};
