//! Metrics hooks for filter operations
//!
//! Thread-safe counters for monitoring training and lookup behavior. The
//! domain types stay pure; recording is driven by the caller.
//!
//! ## Usage
//!
//! ```
//! use std::time::Instant;
//! use bloomsieve::{train_filter, Metrics};
//!
//! let metrics = Metrics::new();
//!
//! let start = Instant::now();
//! let filter = train_filter(["a", "b"], 0.95)?;
//! metrics.record_filter_trained(filter.size_bits(), filter.hash_count(), filter.element_count());
//! metrics.record_train(start.elapsed());
//!
//! let start = Instant::now();
//! let found = filter.contains(&"a");
//! metrics.record_lookup(start.elapsed(), found);
//! assert_eq!(metrics.snapshot().lookups_performed, 1);
//! # Ok::<(), bloomsieve::FilterError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for filter operations
#[derive(Default)]
pub struct Metrics {
    /// Total filters trained
    pub filters_trained: AtomicU64,
    /// Total elements hashed into filters
    pub elements_trained: AtomicU64,
    /// Total lookups performed
    pub lookups_performed: AtomicU64,
    /// Total positive lookups (matches, true or false positives)
    pub lookups_positive: AtomicU64,
    /// Total bytes allocated for bit arrays
    pub bytes_allocated: AtomicU64,
    /// Cumulative training time in nanoseconds
    pub train_time_ns: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed training run
    pub fn record_filter_trained(
        &self,
        size_bits: usize,
        _hash_count: usize,
        element_count: usize,
    ) {
        self.filters_trained.fetch_add(1, Ordering::Relaxed);
        self.elements_trained
            .fetch_add(element_count as u64, Ordering::Relaxed);
        self.bytes_allocated
            .fetch_add((size_bits / 8) as u64, Ordering::Relaxed);
    }

    /// Record time spent training
    pub fn record_train(&self, duration: Duration) {
        self.train_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a lookup and whether it matched
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get a point-in-time snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            filters_trained: self.filters_trained.load(Ordering::Relaxed),
            elements_trained: self.elements_trained.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            bytes_allocated: self.bytes_allocated.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
        }
    }

    /// Average lookup time in nanoseconds
    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to total lookups
    ///
    /// Includes both true positives and false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.filters_trained.store(0, Ordering::Relaxed);
        self.elements_trained.store(0, Ordering::Relaxed);
        self.lookups_performed.store(0, Ordering::Relaxed);
        self.lookups_positive.store(0, Ordering::Relaxed);
        self.bytes_allocated.store(0, Ordering::Relaxed);
        self.train_time_ns.store(0, Ordering::Relaxed);
        self.lookup_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default)]
pub struct MetricsSnapshot {
    pub filters_trained: u64,
    pub elements_trained: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub bytes_allocated: u64,
    pub avg_lookup_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to integrate with external metrics systems.
pub trait MetricsRecorder: Send + Sync {
    /// Record a completed training run
    fn record_filter_trained(&self, size_bits: usize, hash_count: usize, element_count: usize);

    /// Record time spent training
    fn record_train(&self, duration: Duration);

    /// Record a lookup and whether it matched
    fn record_lookup(&self, duration: Duration, found: bool);
}

/// No-op recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_trained(&self, _: usize, _: usize, _: usize) {}
    fn record_train(&self, _: Duration) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_filter_trained(&self, size_bits: usize, hash_count: usize, element_count: usize) {
        Metrics::record_filter_trained(self, size_bits, hash_count, element_count);
    }

    fn record_train(&self, duration: Duration) {
        Metrics::record_train(self, duration);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }
}
