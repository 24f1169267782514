use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tokio::sync::{Mutex, Semaphore};
use url::Url;

/// A link waiting to be expanded. Lower `priority` dequeues first.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub priority: usize,
    pub url: Url,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.url == other.url
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (a max-heap) pops the lowest priority first,
        // ties broken by URL string order
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.url.as_str().cmp(self.url.as_str()))
    }
}

struct FrontierInner {
    heap: BinaryHeap<FrontierEntry>,
    /// Entries handed out by `take` whose `task_done` has not arrived yet.
    in_flight: usize,
}

/// Priority queue of links awaiting expansion, shared by all workers.
///
/// The queue is unbounded: there is no backpressure, and a fast producer can
/// grow it without limit. The semaphore holds exactly one permit per queued
/// entry (`put` pushes before adding the permit, so an acquired permit always
/// maps to a popped entry), which is what lets `take` suspend without any
/// sleep-and-poll loop. Closing the semaphore releases every suspended
/// consumer at once; the frontier closes itself when the last in-flight entry
/// finishes with nothing left queued. The lock is never held across an await.
pub struct Frontier {
    inner: Mutex<FrontierInner>,
    items: Semaphore,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FrontierInner {
                heap: BinaryHeap::new(),
                in_flight: 0,
            }),
            items: Semaphore::new(0),
        }
    }

    /// Queue a link for expansion. Entries offered after close are dropped.
    pub async fn put(&self, priority: usize, url: Url) {
        let mut inner = self.inner.lock().await;
        if self.items.is_closed() {
            return;
        }
        inner.heap.push(FrontierEntry { priority, url });
        drop(inner);
        self.items.add_permits(1);
    }

    /// Remove and return the lowest-priority entry, suspending while the
    /// queue is empty. Returns `None` once the frontier is closed. The entry
    /// stays in-flight until the caller's `task_done`.
    pub async fn take(&self) -> Option<FrontierEntry> {
        let permit = self.items.acquire().await.ok()?;
        permit.forget();
        let mut inner = self.inner.lock().await;
        let entry = inner.heap.pop();
        if entry.is_some() {
            inner.in_flight += 1;
        }
        entry
    }

    /// Mark one taken entry as fully processed. When the last in-flight entry
    /// completes and nothing is queued, no producer can exist anymore, so the
    /// frontier closes and all suspended consumers wake with `None`.
    pub async fn task_done(&self) {
        let mut inner = self.inner.lock().await;
        inner.in_flight = inner.in_flight.saturating_sub(1);
        if inner.in_flight == 0 && inner.heap.is_empty() {
            self.items.close();
        }
    }

    /// Stop handing out entries and wake every suspended consumer. Idempotent.
    pub fn close(&self) {
        self.items.close();
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.heap.is_empty()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.heap.len()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
