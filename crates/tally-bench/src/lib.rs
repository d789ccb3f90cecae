//! Tally Benchmark Suite
//!
//! Criterion benchmarks for the counter store and registry hot paths.
//!
//! # Benchmark Categories
//!
//! - **Store**: raw increment/read/snapshot cost on the counter map
//! - **Registry**: delegation overhead over the store and over a client

pub mod fixtures;

pub use fixtures::{counter_names, populate, Scale};
