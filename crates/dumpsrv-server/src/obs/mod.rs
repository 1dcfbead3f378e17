//! Lightweight in-process metrics.
//!
//! Counters are stored as atomics behind a `DashMap` and rendered in
//! Prometheus text format by the `/metrics` handler.

pub mod metrics;

pub use metrics::{CounterVec, RequestMetrics};
