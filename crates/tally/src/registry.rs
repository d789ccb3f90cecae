//! Central metrics registry.
//!
//! [`MetricsRegistry`] is the public-facing surface: it either mutates its
//! own [`CounterStore`] or forwards every call to an attached [`Client`].

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::client::Client;
use crate::error::Result;
use crate::store::CounterStore;

/// Counter registry with a swappable backing.
///
/// A fresh registry is backed by its own in-memory [`CounterStore`]. Once a
/// [`Client`] is attached with [`set_client`](Self::set_client), every call
/// is forwarded to the client instead; the internal store keeps whatever it
/// accumulated but is no longer reachable through the registry. There is no
/// way to detach a client again.
///
/// All methods are safe to call from many threads at once. Each call
/// observes exactly one backing for its whole duration, even when it races
/// a concurrent [`set_client`](Self::set_client).
pub struct MetricsRegistry {
    store: CounterStore,
    client: RwLock<Option<Arc<dyn Client>>>,
}

impl MetricsRegistry {
    /// Create a registry backed by its own empty store.
    pub fn new() -> Self {
        Self {
            store: CounterStore::new(),
            client: RwLock::new(None),
        }
    }

    /// The backing active for one call: the attached client, if any.
    fn backing(&self) -> Option<Arc<dyn Client>> {
        self.client.read().as_ref().map(Arc::clone)
    }

    /// Increment the named counter by 1.
    pub fn inc(&self, name: &str) -> Result<bool> {
        self.inc_by(name, Some(1))
    }

    /// Increment the named counter by `by`.
    ///
    /// `None` is normalized to 1, never to 0. The result is whatever the
    /// active backing returned.
    pub fn inc_by(&self, name: &str, by: Option<i64>) -> Result<bool> {
        let by = by.unwrap_or(1);
        match self.backing() {
            Some(client) => client.inc(name, by),
            None => Ok(self.store.increment(name, by)),
        }
    }

    /// Decrement the named counter by 1.
    pub fn dec(&self, name: &str) -> Result<bool> {
        self.dec_by(name, Some(1))
    }

    /// Decrement the named counter by `|by|`; `None` is normalized to 1.
    ///
    /// An attached client receives the decrement as a negative increment;
    /// the capability interface has no decrement of its own.
    pub fn dec_by(&self, name: &str, by: Option<i64>) -> Result<bool> {
        let by = by.unwrap_or(1).saturating_abs();
        match self.backing() {
            Some(client) => client.inc(name, -by),
            None => Ok(self.store.decrement(name, by)),
        }
    }

    /// Current value of the named counter, 0 if never incremented.
    pub fn get(&self, name: &str) -> Result<i64> {
        match self.backing() {
            Some(client) => client.get(name),
            None => Ok(self.store.get(name)),
        }
    }

    /// Snapshot of every counter in the active backing.
    pub fn all(&self) -> Result<HashMap<String, i64>> {
        match self.backing() {
            Some(client) => client.all(),
            None => Ok(self.store.all()),
        }
    }

    /// Set the named counter back to 0.
    ///
    /// An attached client receives a zero-delta increment instead; whether
    /// that zeroes the remote counter is up to the backend.
    pub fn reset(&self, name: &str) -> Result<bool> {
        match self.backing() {
            Some(client) => client.inc(name, 0),
            None => Ok(self.store.reset(name)),
        }
    }

    /// Drop every counter in the internal store.
    ///
    /// Only the internal store is cleared; the capability interface exposes
    /// no clear-all, so an attached client's state is left untouched.
    pub fn reset_all(&self) -> Result<bool> {
        Ok(self.store.reset_all())
    }

    /// Attach `client` as the active backing.
    ///
    /// All subsequent calls are forwarded to it. Replacing an attached
    /// client with another is allowed; falling back to the internal store
    /// is not. The internal store retains its accumulated values but
    /// becomes unreachable through the registry.
    pub fn set_client(&self, client: Arc<dyn Client>) {
        let mut slot = self.client.write();
        let replaced = slot.is_some();
        *slot = Some(client);
        drop(slot);
        tracing::debug!(replaced, "metrics client attached");
    }

    /// Whether a client backing is currently attached.
    pub fn has_client(&self) -> bool {
        self.client.read().is_some()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared metrics registry handle.
pub type SharedMetricsRegistry = Arc<MetricsRegistry>;

/// Create a new shared metrics registry.
pub fn new_shared_registry() -> SharedMetricsRegistry {
    Arc::new(MetricsRegistry::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryClient;

    #[test]
    fn test_inc_and_get() {
        let registry = MetricsRegistry::new();

        registry.inc("requests").unwrap();
        registry.inc_by("requests", Some(2)).unwrap();

        assert_eq!(registry.get("requests").unwrap(), 3);

        let all = registry.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all.get("requests"), Some(&3));
    }

    #[test]
    fn test_inc_by_none_counts_as_one() {
        let registry = MetricsRegistry::new();

        registry.inc_by("hits", None).unwrap();
        registry.inc_by("hits", Some(1)).unwrap();
        registry.inc("hits").unwrap();

        assert_eq!(registry.get("hits").unwrap(), 3);
    }

    #[test]
    fn test_unseen_name_reads_zero() {
        let registry = MetricsRegistry::new();
        assert_eq!(registry.get("missing").unwrap(), 0);
    }

    #[test]
    fn test_dec_family() {
        let registry = MetricsRegistry::new();

        registry.inc_by("inflight", Some(5)).unwrap();
        registry.dec("inflight").unwrap();
        registry.dec_by("inflight", Some(-2)).unwrap();
        registry.dec_by("inflight", None).unwrap();

        assert_eq!(registry.get("inflight").unwrap(), 1);
    }

    #[test]
    fn test_reset() {
        let registry = MetricsRegistry::new();
        registry.inc_by("a", Some(4)).unwrap();
        registry.inc_by("b", Some(2)).unwrap();

        registry.reset("a").unwrap();

        assert_eq!(registry.get("a").unwrap(), 0);
        assert_eq!(registry.get("b").unwrap(), 2);
    }

    #[test]
    fn test_reset_all() {
        let registry = MetricsRegistry::new();
        registry.inc("a").unwrap();
        registry.inc("b").unwrap();

        registry.reset_all().unwrap();

        assert!(registry.all().unwrap().is_empty());
    }

    #[test]
    fn test_set_client_switches_backing() {
        let registry = MetricsRegistry::new();
        registry.inc_by("requests", Some(10)).unwrap();

        registry.set_client(Arc::new(MemoryClient::new()));

        // The client starts empty; the internal store's 10 is unreachable.
        assert_eq!(registry.get("requests").unwrap(), 0);

        registry.inc("requests").unwrap();
        registry.inc_by("requests", Some(2)).unwrap();

        assert_eq!(registry.get("requests").unwrap(), 3);
        assert_eq!(registry.all().unwrap().get("requests"), Some(&3));
    }

    #[test]
    fn test_set_client_is_repeatable() {
        let registry = MetricsRegistry::new();

        registry.set_client(Arc::new(MemoryClient::new()));
        registry.inc_by("requests", Some(7)).unwrap();

        registry.set_client(Arc::new(MemoryClient::new()));

        assert!(registry.has_client());
        assert_eq!(registry.get("requests").unwrap(), 0);
    }

    #[test]
    fn test_client_outlives_registry_scope() {
        let client = Arc::new(MemoryClient::new());
        {
            let registry = MetricsRegistry::new();
            registry.set_client(Arc::clone(&client) as Arc<dyn Client>);
            registry.inc_by("persisted", Some(4)).unwrap();
        }

        // The caller-owned client keeps the values after the registry drops.
        assert_eq!(client.get("persisted").unwrap(), 4);
    }

    #[test]
    fn test_shared_registry() {
        let registry = new_shared_registry();

        registry.inc("requests").unwrap();

        let registry2 = Arc::clone(&registry);
        registry2.inc("requests").unwrap();

        assert_eq!(registry.get("requests").unwrap(), 2);
    }
}
