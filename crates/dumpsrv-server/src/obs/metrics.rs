//! Request counter registry.
//!
//! A single-dimension counter vector backed by `DashMap`. Each label value owns
//! an `AtomicU64`, so increments on different labels never contend on a shared
//! lock. Rendering sorts by label value to keep scrape output deterministic.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Exported counter name. Matches the series existing dashboards query.
pub const REQUEST_COUNT_NAME: &str = "harness_canary_skeleton_hhtp_count";
const REQUEST_COUNT_HELP: &str = "Number of http requests to each endpoint";
const REQUEST_COUNT_LABEL: &str = "path";

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

pub struct CounterVec {
    label_key: &'static str,
    map: DashMap<String, AtomicU64>,
}

impl CounterVec {
    pub fn new(label_key: &'static str) -> Self {
        Self { label_key, map: DashMap::new() }
    }

    /// Increment by 1.
    pub fn inc(&self, label: &str) {
        self.add(label, 1);
    }

    fn add(&self, label: &str, v: u64) {
        // Read lock on the shard for the common case; entry() only on first hit.
        if let Some(counter) = self.map.get(label) {
            counter.fetch_add(v, Ordering::Relaxed);
            return;
        }
        let counter = self
            .map
            .entry(label.to_owned())
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value, 0 when the label was never seen.
    pub fn get(&self, label: &str) -> u64 {
        self.map
            .get(label)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort_by(|a, b| a.0.cmp(&b.0));

        for (label, val) in rows {
            let _ = writeln!(
                out,
                "{}{{{}=\"{}\"}} {}",
                name,
                self.label_key,
                escape_label(&label),
                val
            );
        }
    }
}

/// Registry owned by the application state and shared with every handler.
pub struct RequestMetrics {
    requests: CounterVec,
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self { requests: CounterVec::new(REQUEST_COUNT_LABEL) }
    }
}

impl RequestMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one hit for `label`.
    pub fn increment(&self, label: &str) {
        self.requests.inc(label);
    }

    pub fn get(&self, label: &str) -> u64 {
        self.requests.get(label)
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests.render(REQUEST_COUNT_NAME, REQUEST_COUNT_HELP, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn increment_creates_then_accumulates() {
        let m = RequestMetrics::new();
        assert_eq!(m.get("test200"), 0);
        m.increment("test200");
        assert_eq!(m.get("test200"), 1);
        m.increment("test200");
        assert_eq!(m.get("test200"), 2);
        assert_eq!(m.get("test400"), 0);
    }

    #[test]
    fn render_is_sorted_and_typed() {
        let m = RequestMetrics::new();
        m.increment("test404");
        m.increment("test200");
        m.increment("test404");

        let out = m.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# HELP harness_canary_skeleton_hhtp_count Number of http requests to each endpoint",
                "# TYPE harness_canary_skeleton_hhtp_count counter",
                "harness_canary_skeleton_hhtp_count{path=\"test200\"} 1",
                "harness_canary_skeleton_hhtp_count{path=\"test404\"} 2",
            ]
        );
    }

    #[test]
    fn label_values_are_escaped() {
        let v = CounterVec::new("path");
        v.inc("a\"b");
        let mut out = String::new();
        v.render("x", "h", &mut out);
        assert!(out.contains("x{path=\"a\\\"b\"} 1"));
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let m = Arc::new(RequestMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let m = Arc::clone(&m);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        m.increment("test200");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(m.get("test200"), 8000);
    }
}
