//! Test data generation for benchmarks.
//!
//! Seeded generators keep benchmark runs reproducible.

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tally::CounterStore;

/// Scale factor for benchmark data generation.
#[derive(Clone, Copy, Debug)]
pub enum Scale {
    /// Tiny scale: 10 counters. Use for quick iteration.
    Tiny,
    /// Small scale: 100 counters.
    Small,
    /// Medium scale: 1,000 counters.
    Medium,
    /// Large scale: 100,000 counters.
    Large,
}

impl Scale {
    /// Get the counter count for this scale.
    pub fn count(&self) -> usize {
        match self {
            Scale::Tiny => 10,
            Scale::Small => 100,
            Scale::Medium => 1_000,
            Scale::Large => 100_000,
        }
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale::Medium
    }
}

/// Generate dotted counter names like `svc.a1b2c3.requests`.
pub fn counter_names(scale: Scale) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..scale.count())
        .map(|_| {
            let infix: String = (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(8)
                .map(char::from)
                .collect();
            format!("svc.{}.requests", infix.to_lowercase())
        })
        .collect()
}

/// Fill a store with one increment per generated name.
pub fn populate(store: &CounterStore, names: &[String]) {
    for name in names {
        store.increment(name, 1);
    }
}
