//! Tally - In-process counter registry with a pluggable client backing.
//!
//! This crate accumulates named integer counters under concurrent access.
//! A [`MetricsRegistry`] starts out backed by its own in-memory
//! [`CounterStore`]; attaching a [`Client`] reroutes every call to that
//! backend instead.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use tally::{MemoryClient, MetricsRegistry};
//!
//! let metrics = MetricsRegistry::new();
//!
//! metrics.inc("requests")?;
//! metrics.inc_by("requests", Some(2))?;
//! assert_eq!(metrics.get("requests")?, 3);
//!
//! // Swap in an external backend; the registry API stays the same.
//! metrics.set_client(Arc::new(MemoryClient::new()));
//! metrics.inc("requests")?;
//! ```

pub mod client;
pub mod error;
pub mod registry;
pub mod service;
pub mod store;

pub use client::{Client, MemoryClient, NullClient};
pub use error::{Error, Result};
pub use registry::{new_shared_registry, MetricsRegistry, SharedMetricsRegistry};
pub use store::CounterStore;

// Service call helpers
pub use service::{avg_latency_ms, record_call};
