//! Counters describing how a pool served its callers.

use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters owned by a [`Scratch`](crate::Scratch) pool.
///
/// Updated with relaxed ordering; totals are exact once concurrent calls
/// have returned, but a snapshot taken mid-flight may mix generations.
#[derive(Debug, Default)]
pub(crate) struct ScratchStats {
    shared: AtomicU64,
    private: AtomicU64,
    grows: AtomicU64,
    bypassed: AtomicU64,
}

impl ScratchStats {
    pub(crate) fn record_shared(&self) {
        self.shared.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_private(&self) {
        self.private.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_grow(&self) {
        self.grows.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_bypass(&self) {
        self.bypassed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> ScratchStatsSnapshot {
        ScratchStatsSnapshot {
            shared: self.shared.load(Ordering::Relaxed),
            private: self.private.load(Ordering::Relaxed),
            grows: self.grows.load(Ordering::Relaxed),
            bypassed: self.bypassed.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of a pool's counters.
///
/// # Example
///
/// ```
/// use scratchio::Scratch;
///
/// let scratch = Scratch::default();
/// let mut sink: Vec<u8> = Vec::new();
/// scratch.write(&mut sink, "hello")?;
///
/// let stats = scratch.stats();
/// assert_eq!(stats.shared, 1);
/// assert_eq!(stats.total(), 1);
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScratchStatsSnapshot {
    /// Calls served by the shared buffer.
    pub shared: u64,
    /// Calls that did not use the shared buffer, because it was busy or the
    /// request exceeded the retain limit.
    pub private: u64,
    /// Times the shared buffer was reallocated to a larger size.
    pub grows: u64,
    /// Subset of `private` that exceeded the retain limit.
    pub bypassed: u64,
}

impl ScratchStatsSnapshot {
    /// Total number of calls served.
    pub fn total(&self) -> u64 {
        self.shared + self.private
    }
}
