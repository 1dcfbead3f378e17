//! Connection-level serving.
//!
//! Each accepted socket is served by hyper-util's auto (HTTP/1 + HTTP/2)
//! builder on its own task. HTTP/1 request heads must arrive within the read
//! timeout, and every connection is closed once `read + write` has elapsed,
//! so a stalled client (slow headers, idle keep-alive, unread responses)
//! cannot hold a socket open.

use std::time::Duration;

use axum::Router;
use hyper_util::{
    rt::{TokioExecutor, TokioIo, TokioTimer},
    server::conn::auto,
    service::TowerToHyperService,
};
use tokio::net::TcpListener;

use crate::config::ServerSection;

/// Per-connection deadlines.
#[derive(Debug, Clone, Copy)]
pub struct ConnTimeouts {
    /// Budget for receiving a request head.
    pub read: Duration,
    /// Budget for producing and writing the response, after `read`.
    pub write: Duration,
}

impl ConnTimeouts {
    pub fn from_section(server: &ServerSection) -> Self {
        Self { read: server.read_timeout(), write: server.write_timeout() }
    }

    /// Hard lifetime of one connection.
    pub fn connection(&self) -> Duration {
        self.read + self.write
    }
}

/// Accept loop. Runs until the task is aborted.
pub async fn serve(listener: TcpListener, app: Router, timeouts: ConnTimeouts) {
    let mut builder = auto::Builder::new(TokioExecutor::new());
    builder
        .http1()
        .timer(TokioTimer::new())
        .header_read_timeout(timeouts.read);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                // Typically fd exhaustion; back off instead of spinning.
                tracing::warn!(error = %e, "accept failed");
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            }
        };

        let builder = builder.clone();
        let service = TowerToHyperService::new(app.clone());
        let lifetime = timeouts.connection();

        tokio::spawn(async move {
            let conn = builder.serve_connection(TokioIo::new(stream), service);
            match tokio::time::timeout(lifetime, conn).await {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::debug!(%peer, error = %e, "connection closed with error"),
                Err(_) => tracing::debug!(%peer, ?lifetime, "connection deadline reached, closing"),
            }
        });
    }
}
