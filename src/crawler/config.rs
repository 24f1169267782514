use std::sync::Arc;
use url::Url;

/// Default number of workers, which also bounds simultaneous fetches
pub const DEFAULT_CONCURRENCY: usize = 25;

/// Default timeout for page requests in seconds
pub const PAGE_REQUEST_TIMEOUT_SEC: u64 = 10;

/// Href prefix marking article-style links worth following
pub const ARTICLE_LINK_PREFIX: &str = "/wiki/";

/// Configuration for one crawl
pub struct CrawlConfig {
    pub start_url: Url,
    pub target_url: Url,
    pub keywords: Vec<String>,
    pub worker_count: usize,
    pub fetch_concurrency: usize,
    pub link_prefix: String,
    pub request_timeout_sec: u64,
}

impl CrawlConfig {
    pub fn new(start_url: Url, target_url: Url) -> Self {
        Self {
            start_url,
            target_url,
            keywords: Vec::new(),
            worker_count: DEFAULT_CONCURRENCY,
            fetch_concurrency: DEFAULT_CONCURRENCY,
            link_prefix: ARTICLE_LINK_PREFIX.to_string(),
            request_timeout_sec: PAGE_REQUEST_TIMEOUT_SEC,
        }
    }

    /// Sets both the worker pool size and the fetch limit, the single knob
    /// exposed on the library surface.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.worker_count = concurrency;
        self.fetch_concurrency = concurrency;
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_fetch_concurrency(mut self, fetch_concurrency: usize) -> Self {
        self.fetch_concurrency = fetch_concurrency;
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = keywords;
        self
    }

    pub fn with_link_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.link_prefix = prefix.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout_sec: u64) -> Self {
        self.request_timeout_sec = timeout_sec;
        self
    }
}

pub type CrawlConfigRef = Arc<CrawlConfig>;
