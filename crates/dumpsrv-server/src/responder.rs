//! Fixed-status responder.
//!
//! Every hit is dumped to the log, counted under the endpoint's label, and
//! answered with the endpoint's status and an empty body. Dump failures are
//! logged and otherwise ignored.

use axum::{body::Body, http::Request, http::StatusCode};

use dumpsrv_core::EndpointDef;

use crate::app_state::AppState;
use crate::dump;

pub async fn respond(state: AppState, def: &'static EndpointDef, req: Request<Body>) -> StatusCode {
    match dump::dump_request(req, state.dump_limits()).await {
        Ok(text) => {
            tracing::info!(label = def.label, status = def.status, "request dump:\n{}", text);
        }
        Err(e) => {
            tracing::warn!(
                label = def.label,
                kind = e.kind().as_str(),
                error = %e,
                "request dump failed"
            );
        }
    }

    tracing::debug!(label = def.label, "Sending response back");
    state.metrics().increment(def.label);
    status_of(def)
}

fn status_of(def: &EndpointDef) -> StatusCode {
    StatusCode::from_u16(def.status).unwrap_or_else(|_| {
        tracing::error!(label = def.label, status = def.status, "invalid status in endpoint table");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
