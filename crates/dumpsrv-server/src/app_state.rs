//! Shared application state for the dump server.
//!
//! Cheap to clone; handlers receive it through axum's `State` extractor. The
//! metrics registry is constructed here and injected, never global, so tests
//! can build isolated instances.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::dump::DumpLimits;
use crate::obs::RequestMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    metrics: Arc<RequestMetrics>,
}

struct AppStateInner {
    cfg: ServerConfig,
    dump_limits: DumpLimits,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_metrics(cfg, Arc::new(RequestMetrics::new()))
    }

    /// Build state around an existing registry (shared with the caller).
    pub fn with_metrics(cfg: ServerConfig, metrics: Arc<RequestMetrics>) -> Self {
        let dump_limits = DumpLimits {
            max_body_bytes: cfg.server.max_body_bytes,
            read_timeout: cfg.server.read_timeout(),
        };
        Self {
            inner: Arc::new(AppStateInner { cfg, dump_limits }),
            metrics,
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn dump_limits(&self) -> &DumpLimits {
        &self.inner.dump_limits
    }

    pub fn metrics(&self) -> &RequestMetrics {
        &self.metrics
    }
}
