//! Dump server library entry.
//!
//! Wires config, the request dumper, fixed-status responder, ops endpoints and
//! metrics into an axum router, plus the supervisor that serves it. Consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod cli;
pub mod config;
pub mod dump;
pub mod obs;
pub mod ops;
pub mod responder;
pub mod router;
pub mod server;
pub mod transport;
