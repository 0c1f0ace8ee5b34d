//! Shared run counters.

use std::sync::atomic::{AtomicU64, Ordering};

/// Success/failure tallies shared between in-flight request tasks.
///
/// Updates are increment-only atomics, so concurrent tasks never lose a
/// count. Reads taken while requests are still in flight are best-effort
/// snapshots, not a consistent point-in-time total.
#[derive(Debug, Default)]
pub struct RunCounters {
    success: AtomicU64,
    failed: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful request.
    pub fn record_success(&self) {
        self.success.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed request, returning the post-increment failure count.
    ///
    /// The returned ordinal gates detailed error logging: each failure gets
    /// a unique number, so at most one task ever sees each of the first N.
    pub fn record_failure(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn success(&self) -> u64 {
        self.success.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    /// Best-effort (success, failed) snapshot.
    pub fn snapshot(&self) -> (u64, u64) {
        (self.success(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_failure_ordinals_are_unique() {
        let counters = RunCounters::new();
        assert_eq!(counters.record_failure(), 1);
        assert_eq!(counters.record_failure(), 2);
        assert_eq!(counters.record_failure(), 3);
        assert_eq!(counters.failed(), 3);
    }

    #[test]
    fn test_concurrent_updates_are_not_lost() {
        let counters = Arc::new(RunCounters::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let counters = counters.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.record_success();
                    counters.record_failure();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(counters.snapshot(), (8000, 8000));
    }
}
