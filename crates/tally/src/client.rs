//! Pluggable counter backends.

use std::collections::HashMap;

use crate::error::Result;
use crate::store::CounterStore;

/// Capability interface for counter backends.
///
/// A [`MetricsRegistry`](crate::registry::MetricsRegistry) forwards its
/// calls to whichever implementation is attached. Deltas arrive already
/// normalized: a registry-level decrement shows up as a negative `by`, a
/// reset as `by == 0`. Implementations that can fail report the failure
/// through [`Error::Client`](crate::error::Error::Client); it reaches the
/// registry caller unchanged.
pub trait Client: Send + Sync {
    /// Add `by` to the named counter.
    fn inc(&self, name: &str, by: i64) -> Result<bool>;

    /// Current value of the named counter, 0 if unknown.
    fn get(&self, name: &str) -> Result<i64>;

    /// Snapshot of every counter the backend knows about.
    fn all(&self) -> Result<HashMap<String, i64>>;
}

/// In-memory client for testing and single-process use.
///
/// Wraps a [`CounterStore`] and never fails.
#[derive(Debug, Default)]
pub struct MemoryClient {
    counters: CounterStore,
}

impl MemoryClient {
    /// Create an empty client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Client for MemoryClient {
    fn inc(&self, name: &str, by: i64) -> Result<bool> {
        Ok(self.counters.increment(name, by))
    }

    fn get(&self, name: &str) -> Result<i64> {
        Ok(self.counters.get(name))
    }

    fn all(&self) -> Result<HashMap<String, i64>> {
        Ok(self.counters.all())
    }
}

/// Client that discards every update and reads every counter as 0.
#[derive(Debug, Default)]
pub struct NullClient;

impl Client for NullClient {
    fn inc(&self, _name: &str, _by: i64) -> Result<bool> {
        Ok(true)
    }

    fn get(&self, _name: &str) -> Result<i64> {
        Ok(0)
    }

    fn all(&self) -> Result<HashMap<String, i64>> {
        Ok(HashMap::new())
    }
}
