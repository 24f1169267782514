use std::sync::atomic::{AtomicBool, Ordering};

/// One-shot flag raised when a worker discovers the target page.
///
/// Workers read it at the top of every loop iteration; setting it twice is
/// harmless. SeqCst keeps the flag visible to all workers right after `set`
/// returns.
#[derive(Debug, Default)]
pub struct TargetSignal {
    found: AtomicBool,
}

impl TargetSignal {
    pub fn new() -> Self {
        Self {
            found: AtomicBool::new(false),
        }
    }

    /// Raise the flag. Idempotent and safe to call from any worker.
    pub fn set(&self) {
        self.found.store(true, Ordering::SeqCst);
    }

    pub fn is_set(&self) -> bool {
        self.found.load(Ordering::SeqCst)
    }
}
