//! Top-level facade crate for the dump server.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use dumpsrv_core::*;
}

pub mod server {
    pub use dumpsrv_server::*;
}
