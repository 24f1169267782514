use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;
use url::Url;

/// Adjacency map built up by the workers while the crawl runs.
///
/// A key present in the map means the page was expanded (or its expansion is
/// at least recorded); out-edge sets only ever grow. Workers never see the
/// raw map, only this surface.
#[derive(Debug, Default)]
pub struct LinkGraph {
    edges: RwLock<HashMap<Url, HashSet<Url>>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self {
            edges: RwLock::new(HashMap::new()),
        }
    }

    /// Record `source -> target`. Adding the same edge twice is a no-op.
    pub async fn add_edge(&self, source: &Url, target: &Url) {
        let mut edges = self.edges.write().await;
        edges
            .entry(source.clone())
            .or_default()
            .insert(target.clone());
    }

    /// Ensure `node` has an entry even when its page yielded no links,
    /// so another worker dequeuing it later skips the fetch.
    pub async fn mark_expanded(&self, node: &Url) {
        let mut edges = self.edges.write().await;
        edges.entry(node.clone()).or_default();
    }

    /// Has this node been expanded (or its expansion recorded)?
    pub async fn has_entry(&self, node: &Url) -> bool {
        self.edges.read().await.contains_key(node)
    }

    /// Out-edges of `node`; empty set if the node was never expanded.
    pub async fn neighbors(&self, node: &Url) -> HashSet<Url> {
        self.edges
            .read()
            .await
            .get(node)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn node_count(&self) -> usize {
        self.edges.read().await.len()
    }

    pub async fn edge_count(&self) -> usize {
        self.edges.read().await.values().map(HashSet::len).sum()
    }

    /// Clone the adjacency map for pathfinding once the crawl has stopped.
    pub async fn snapshot(&self) -> HashMap<Url, HashSet<Url>> {
        self.edges.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn url(path: &str) -> Url {
        Url::parse(&format!("https://example.com{}", path)).unwrap()
    }

    #[tokio::test]
    async fn add_edge_is_idempotent() {
        let graph = LinkGraph::new();
        graph.add_edge(&url("/a"), &url("/b")).await;
        graph.add_edge(&url("/a"), &url("/b")).await;

        assert_eq!(graph.neighbors(&url("/a")).await.len(), 1);
        assert_eq!(graph.edge_count().await, 1);
    }

    #[tokio::test]
    async fn neighbors_of_unknown_node_are_empty() {
        let graph = LinkGraph::new();
        assert!(graph.neighbors(&url("/missing")).await.is_empty());
        assert!(!graph.has_entry(&url("/missing")).await);
    }

    #[tokio::test]
    async fn mark_expanded_creates_entry_without_edges() {
        let graph = LinkGraph::new();
        graph.mark_expanded(&url("/leaf")).await;

        assert!(graph.has_entry(&url("/leaf")).await);
        assert!(graph.neighbors(&url("/leaf")).await.is_empty());
        assert_eq!(graph.edge_count().await, 0);
    }

    #[tokio::test]
    async fn mark_expanded_keeps_existing_edges() {
        let graph = LinkGraph::new();
        graph.add_edge(&url("/a"), &url("/b")).await;
        graph.mark_expanded(&url("/a")).await;

        assert_eq!(graph.neighbors(&url("/a")).await.len(), 1);
    }

    #[tokio::test]
    async fn edge_count_grows_monotonically() {
        let graph = LinkGraph::new();
        let mut last = 0;
        for i in 0..10 {
            graph.add_edge(&url("/hub"), &url(&format!("/n{}", i))).await;
            let count = graph.edge_count().await;
            assert!(count >= last);
            last = count;
        }
        assert_eq!(last, 10);
    }

    /// Hammer the same and different sources from several tasks; no write
    /// may be lost.
    #[tokio::test]
    async fn concurrent_writes_lose_nothing() {
        let graph = Arc::new(LinkGraph::new());
        let mut handles = Vec::new();

        for task in 0..8 {
            let graph = Arc::clone(&graph);
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    graph
                        .add_edge(&url(&format!("/src{}", task)), &url(&format!("/dst{}", i)))
                        .await;
                    graph.add_edge(&url("/shared"), &url(&format!("/dst{}", i))).await;
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(graph.neighbors(&url("/shared")).await.len(), 50);
        for task in 0..8 {
            assert_eq!(graph.neighbors(&url(&format!("/src{}", task))).await.len(), 50);
        }
        assert_eq!(graph.edge_count().await, 8 * 50 + 50);
    }
}
