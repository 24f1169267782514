use std::sync::atomic::AtomicUsize;
use std::sync::Arc;

use super::frontier::Frontier;
use super::graph::LinkGraph;
use super::signal::TargetSignal;

/// Shared state of one crawl
pub struct CrawlState {
    /// Nodes awaiting expansion, keyword-priority first
    pub frontier: Frontier,
    /// Every edge recorded so far
    pub graph: LinkGraph,
    /// Indicator that the target link has been found
    pub target_found: TargetSignal,
    /// Number of pages expanded, for the closing log line
    pub pages_expanded: AtomicUsize,
}

impl CrawlState {
    pub fn new() -> Self {
        Self {
            frontier: Frontier::new(),
            graph: LinkGraph::new(),
            target_found: TargetSignal::new(),
            pages_expanded: AtomicUsize::new(0),
        }
    }
}

impl Default for CrawlState {
    fn default() -> Self {
        Self::new()
    }
}

pub type CrawlStateRef = Arc<CrawlState>;
