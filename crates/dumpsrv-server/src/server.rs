//! Process supervisor.
//!
//! Binds the listener, runs the accept loop on its own task and waits for a
//! shutdown trigger. Shutdown is immediate: the server task is aborted and
//! in-flight requests are not drained. The trigger is an arbitrary future so
//! tests can fire it without OS signals.

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use dumpsrv_core::error::{DumpSrvError, Result};

use crate::{
    app_state::AppState,
    config::ServerConfig,
    router,
    transport::{self, ConnTimeouts},
};

/// Bind the listening socket. Failure is fatal to the caller; no retry.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| DumpSrvError::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// Returns `Ok(())` on shutdown, or an error if the server stops on its own.
pub async fn run_until<F>(
    listener: TcpListener,
    app: Router,
    timeouts: ConnTimeouts,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let local = listener.local_addr()?;
    tracing::info!(%local, "Starting Server on port {}....", local.port());

    let mut server = tokio::spawn(transport::serve(listener, app, timeouts));

    tokio::select! {
        _ = shutdown => {
            tracing::info!("signal received, exiting without drain");
            server.abort();
            Ok(())
        }
        res = &mut server => match res {
            Ok(()) => Err(DumpSrvError::Internal("server exited unexpectedly".into())),
            Err(e) => Err(DumpSrvError::Internal(format!("server task failed: {e}"))),
        },
    }
}

/// Build state and router from `cfg`, bind, and serve until `shutdown`.
pub async fn run<F>(cfg: ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send,
{
    let listen = cfg.server.listen_addr()?;
    let timeouts = ConnTimeouts::from_section(&cfg.server);
    let app = router::build_router(AppState::new(cfg));

    tracing::info!(%listen, "simple-dump-server starting");
    let listener = bind(listen).await?;
    run_until(listener, app, timeouts, shutdown).await
}

/// Resolves on SIGINT or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
