//! Dump server core: the endpoint table and the error surface shared by the
//! server and its tooling.
//!
//! This crate carries no transport or runtime dependencies so the endpoint
//! definitions can be reused by clients and test harnesses.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod endpoint;
pub mod error;

/// Shared result type.
pub use error::{DumpSrvError, Result};
pub use endpoint::{EndpointDef, ENDPOINTS};
