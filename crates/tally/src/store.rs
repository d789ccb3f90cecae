//! Concurrency-safe counter storage.
//!
//! [`CounterStore`] is the leaf component: a sharded map from counter name
//! to signed value. Counters are created lazily at 0 on first increment and
//! live for the lifetime of the store.

use std::collections::HashMap;

use dashmap::DashMap;

/// Thread-safe mapping from counter name to a signed 64-bit value.
///
/// Per-name updates are serialized on the map shard, so concurrent
/// increments of the same counter never lose an update. All arithmetic
/// saturates at the `i64` bounds rather than wrapping.
#[derive(Debug, Default)]
pub struct CounterStore {
    counters: DashMap<String, i64>,
}

impl CounterStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `by` to the counter named `name`, creating it at 0 if absent.
    ///
    /// Saturates at `i64::MAX` / `i64::MIN`. Always returns `true`; the
    /// operation has no failure mode.
    pub fn increment(&self, name: &str, by: i64) -> bool {
        let mut slot = self.counters.entry(name.to_owned()).or_insert(0);
        *slot = slot.saturating_add(by);
        true
    }

    /// Subtract `|by|` from the counter named `name`.
    ///
    /// The sign of `by` is ignored, so decrementing by -2 and by 2 are the
    /// same operation.
    pub fn decrement(&self, name: &str, by: i64) -> bool {
        self.increment(name, -by.saturating_abs())
    }

    /// Current value of `name`, or 0 if it was never incremented.
    ///
    /// Reads do not materialize missing counters.
    pub fn get(&self, name: &str) -> i64 {
        self.counters.get(name).map(|slot| *slot).unwrap_or(0)
    }

    /// Point-in-time snapshot of every known counter.
    ///
    /// Each entry is read under its shard lock, so individual values are
    /// never torn; the snapshot as a whole is not linearizable with updates
    /// to other names that race the iteration.
    pub fn all(&self) -> HashMap<String, i64> {
        self.counters
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }

    /// Set one counter back to 0, creating it if absent.
    pub fn reset(&self, name: &str) -> bool {
        self.counters.insert(name.to_owned(), 0);
        true
    }

    /// Remove every counter.
    pub fn reset_all(&self) -> bool {
        self.counters.clear();
        true
    }

    /// Number of distinct counter names observed.
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    /// Whether no counter has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }
}
