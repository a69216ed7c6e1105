// Rust guideline compliant 2026-10-16

//! Server runtime: wiring, binding and graceful shutdown.

use crate::error::ServerError;
use crate::http::{build_router, AppState};
use crate::logging::init_tracing;
use std::future::Future;
use std::path::PathBuf;
use tasklist_app::{Board, DataContext};
use tokio::net::TcpListener;

/// Runtime options for the HTTP server.
#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Data directory override.
    pub data_dir: Option<PathBuf>,
    /// Bind address override, taking precedence over configuration.
    pub bind: Option<String>,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

/// Runs the server until SIGINT or SIGTERM.
///
/// # Errors
///
/// Returns an error if configuration, logging, storage or the listener
/// cannot be set up, or if serving fails.
pub fn run(options: ServerOptions) -> Result<(), ServerError> {
    let ctx = DataContext::discover(options.data_dir.as_deref())?;
    let mut config = ctx.load_config()?;
    if let Some(bind) = options.bind {
        config.bind_addr = bind;
        config.validate()?;
    }

    let _guard = init_tracing(&config.log_level, config.log_format, options.log_file.as_deref())?;

    let storage = ctx.open_storage(&config)?;
    let state = AppState::new(Board::open(storage)).with_max_body_bytes(config.max_body_bytes);
    let addr = config.socket_addr()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async move {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr = %listener.local_addr()?, data_dir = %ctx.data_dir().display(), "listening");
        serve(listener, state, wait_for_shutdown_signal()).await?;
        tracing::info!("server stopped");
        Ok::<(), ServerError>(())
    })
}

/// Serves the API on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the underlying server fails.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = tokio::signal::ctrl_c() => {}
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "SIGTERM handler unavailable");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }

    tracing::info!("shutdown signal received");
}
