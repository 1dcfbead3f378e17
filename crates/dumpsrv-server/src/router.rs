//! Axum router wiring.
//!
//! Exact-path routes only: the ops endpoints plus one fixed-status route per
//! entry of the endpoint table. Anything else gets axum's default 404.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    routing::{any, get},
    Router,
};
use tower_http::timeout::TimeoutLayer;

use dumpsrv_core::ENDPOINTS;

use crate::{app_state::AppState, ops, responder};

pub fn build_router(state: AppState) -> Router {
    // Body reads are cut at read_timeout inside the dumper; the response must
    // then be produced within write_timeout.
    let server = &state.cfg().server;
    let deadline = server.read_timeout() + server.write_timeout();

    let mut router = Router::new()
        .route("/healthz", any(ops::healthz))
        .route("/readyz", any(ops::readyz))
        .route("/metrics", get(ops::metrics));

    for def in ENDPOINTS.iter() {
        router = router.route(
            def.path,
            any(move |State(state): State<AppState>, req: Request<Body>| {
                responder::respond(state, def, req)
            }),
        );
    }

    router.layer(TimeoutLayer::new(deadline)).with_state(state)
}
