//! Inter-service call counters.
//!
//! Helpers that record the conventional `svc.call.*` counter family for
//! calls between named services: a total, an ok/error split, and a latency
//! sum/count pair from which an average can be derived without histogram
//! support.

use std::collections::HashMap;

use crate::error::Result;
use crate::registry::MetricsRegistry;

/// Record one call from service `from` to service `to`.
///
/// Touches four counters:
/// `svc.call.total.{from}.{to}`, one of `svc.call.ok.{from}.{to}` /
/// `svc.call.error.{from}.{to}`, and the latency pair
/// `svc.call.latency_ms.sum.{from}.{to}` /
/// `svc.call.latency_ms.count.{from}.{to}`.
pub fn record_call(
    registry: &MetricsRegistry,
    from: &str,
    to: &str,
    ok: bool,
    latency_ms: i64,
) -> Result<()> {
    let path = format!("{}.{}", from, to);
    let outcome = if ok { "ok" } else { "error" };

    registry.inc_by(&format!("svc.call.total.{}", path), Some(1))?;
    registry.inc_by(&format!("svc.call.{}.{}", outcome, path), Some(1))?;
    registry.inc_by(&format!("svc.call.latency_ms.sum.{}", path), Some(latency_ms))?;
    registry.inc_by(&format!("svc.call.latency_ms.count.{}", path), Some(1))?;
    Ok(())
}

/// Average latency in milliseconds for calls from `from` to `to`, computed
/// from a counter snapshot.
///
/// The count is floored at 1 so a snapshot with a sum but no count never
/// divides by zero; a path with no recorded calls averages to 0.
pub fn avg_latency_ms(counters: &HashMap<String, i64>, from: &str, to: &str) -> f64 {
    let sum = counters
        .get(&format!("svc.call.latency_ms.sum.{}.{}", from, to))
        .copied()
        .unwrap_or(0);
    let count = counters
        .get(&format!("svc.call.latency_ms.count.{}.{}", from, to))
        .copied()
        .unwrap_or(0)
        .max(1);

    sum as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_call_counter_family() {
        let registry = MetricsRegistry::new();

        record_call(&registry, "orders", "inventory", true, 12).unwrap();
        record_call(&registry, "orders", "inventory", false, 41).unwrap();
        record_call(&registry, "orders", "payment", true, 25).unwrap();

        let all = registry.all().unwrap();
        assert_eq!(all.get("svc.call.total.orders.inventory"), Some(&2));
        assert_eq!(all.get("svc.call.ok.orders.inventory"), Some(&1));
        assert_eq!(all.get("svc.call.error.orders.inventory"), Some(&1));
        assert_eq!(all.get("svc.call.latency_ms.sum.orders.inventory"), Some(&53));
        assert_eq!(all.get("svc.call.latency_ms.count.orders.inventory"), Some(&2));

        assert_eq!(all.get("svc.call.total.orders.payment"), Some(&1));
        assert_eq!(all.get("svc.call.ok.orders.payment"), Some(&1));
        assert_eq!(all.get("svc.call.error.orders.payment"), None);
    }

    #[test]
    fn test_avg_latency() {
        let registry = MetricsRegistry::new();

        record_call(&registry, "orders", "inventory", true, 12).unwrap();
        record_call(&registry, "orders", "inventory", false, 41).unwrap();

        let all = registry.all().unwrap();
        let avg = avg_latency_ms(&all, "orders", "inventory");
        assert!((avg - 26.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_avg_latency_unknown_path() {
        let counters = HashMap::new();
        assert_eq!(avg_latency_ms(&counters, "a", "b"), 0.0);
    }
}
